// ABOUTME: Core data models for mingle sessions

pub mod session;

pub use session::{Session, SessionKind};
