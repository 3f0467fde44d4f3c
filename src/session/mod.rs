// ABOUTME: Session catalog and connect flow
// Merges every session source and takes a chosen session from "maybe running" to attached

pub mod catalog;
pub mod connect;
pub mod error;

pub use catalog::{SessionAggregator, SessionCatalog};
pub use connect::{ConnectOutcome, Connector};
pub use error::SessionError;
