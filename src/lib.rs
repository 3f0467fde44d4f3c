// ABOUTME: Library crate for mingle exposing the session catalog and connect flow for testing and reuse

pub mod cli;
pub mod config;
pub mod git;
pub mod models;
pub mod process;
pub mod session;
pub mod tmux;
pub mod zoxide;
