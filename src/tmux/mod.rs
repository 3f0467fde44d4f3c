// ABOUTME: Host-based tmux session management
// Lists, creates and switches to tmux sessions running directly on the host

pub mod session;
pub mod error;

pub use session::{inside_client, list_sessions, session_exists, create_session, switch_client};
pub use error::TmuxError;
