// ABOUTME: Errors surfaced while connecting to a session

use crate::tmux::TmuxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Tmux(#[from] TmuxError),
}
