// ABOUTME: Error types for tmux session management
// Defines error conditions that can occur when creating or switching to tmux sessions

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("Session path is missing, cannot create session {0}")]
    MissingPath(String),

    #[error("Error creating new tmux session: {0}")]
    CreateFailed(String),

    #[error("Error starting tmuxinator session: {0}")]
    TemplateFailed(String),

    #[error("Error switching to tmux session: {0}")]
    SwitchFailed(String),

    #[error("Error executing tmux: {0}")]
    AttachFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
