// ABOUTME: Reads the zoxide directory index as a low-priority session source

use crate::models::Session;
use crate::process::{CommandOutput, CommandRunner, ProcessCommand};
use tracing::{debug, warn};

pub fn query_command() -> ProcessCommand {
    ProcessCommand::new("zoxide", ["query", "-l"])
}

/// Each listed directory becomes a session named after itself.
pub fn parse_directories(output: &CommandOutput) -> Vec<Session> {
    output.stdout_lines().map(Session::at_path).collect()
}

/// Directories known to zoxide, best ranked first. Empty when zoxide is unavailable.
pub async fn list_directories<R: CommandRunner>(runner: &R) -> Vec<Session> {
    match runner.run(&query_command()).await {
        Ok(output) if output.success => {
            let sessions = parse_directories(&output);
            debug!("Found {} zoxide directories", sessions.len());
            sessions
        }
        Ok(output) => {
            warn!("zoxide query failed: {}", output.stderr.trim());
            Vec::new()
        }
        Err(e) => {
            warn!("Failed to run zoxide: {}", e);
            Vec::new()
        }
    }
}
