// ABOUTME: tmux session listing, creation and client switching on the host
// Every call goes through a CommandRunner; attaching is returned as a command to exec

use crate::models::Session;
use crate::process::{CommandOutput, CommandRunner, ProcessCommand};
use crate::tmux::error::TmuxError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable tmux sets for processes running inside a client
pub const TMUX_ENV: &str = "TMUX";

/// Whether this process runs inside a tmux client.
pub fn inside_client() -> bool {
    std::env::var_os(TMUX_ENV).is_some_and(|value| !value.is_empty())
}

pub fn list_sessions_command() -> ProcessCommand {
    ProcessCommand::new("tmux", ["list-sessions", "-F", "#{session_name}"])
}

/// Parse `list-sessions -F #{session_name}` output into live sessions.
pub fn parse_session_names(output: &CommandOutput) -> Vec<Session> {
    output.stdout_lines().map(Session::live).collect()
}

/// List running tmux sessions.
///
/// No server, or no tmux at all, is an empty list rather than an error so the
/// other session sources still show up.
pub async fn list_sessions<R: CommandRunner>(runner: &R) -> Vec<Session> {
    match runner.run(&list_sessions_command()).await {
        Ok(output) if output.success => {
            let sessions = parse_session_names(&output);
            debug!("Found {} live tmux sessions", sessions.len());
            sessions
        }
        Ok(output) => {
            debug!("tmux list-sessions returned no sessions: {}", output.stderr.trim());
            Vec::new()
        }
        Err(e) => {
            warn!("Failed to run tmux list-sessions: {}", e);
            Vec::new()
        }
    }
}

/// Fresh existence check against the running server.
pub async fn session_exists<R: CommandRunner>(runner: &R, name: &str) -> bool {
    list_sessions(runner)
        .await
        .iter()
        .any(|session| session.name == name)
}

pub fn new_session_command(name: &str, path: &Path) -> ProcessCommand {
    ProcessCommand::new(
        "tmux",
        [
            "new-session".to_string(),
            "-s".to_string(),
            name.to_string(),
            "-d".to_string(),
            "-c".to_string(),
            path.to_string_lossy().to_string(),
        ],
    )
}

/// `yes |` answers tmuxinator's prompts; name and profile are positional shell args.
pub fn tmuxinator_command(name: &str, profile: &str, path: &Path) -> ProcessCommand {
    ProcessCommand::new(
        "sh",
        [
            "-c".to_string(),
            r#"yes | tmuxinator start -n "$1" -p "$2" --no-attach"#.to_string(),
            "mingle".to_string(),
            name.to_string(),
            profile.to_string(),
        ],
    )
    .in_dir(path)
}

pub fn switch_client_command(name: &str) -> ProcessCommand {
    ProcessCommand::new("tmux", ["switch-client", "-t", name])
}

pub fn attach_session_command(name: &str) -> ProcessCommand {
    ProcessCommand::new("tmux", ["attach-session", "-t", name])
}

/// Create a detached session for `session`, through tmuxinator when it names a profile.
pub async fn create_session<R: CommandRunner>(runner: &R, session: &Session) -> Result<(), TmuxError> {
    let path = session
        .path
        .as_deref()
        .ok_or_else(|| TmuxError::MissingPath(session.name.clone()))?;

    if let Some(profile) = &session.template_profile {
        info!("Starting tmuxinator profile {} as session {}", profile, session.name);
        let output = runner
            .run(&tmuxinator_command(&session.name, profile, path))
            .await?;
        if !output.success {
            return Err(TmuxError::TemplateFailed(output.stderr.trim().to_string()));
        }
    } else {
        info!("Creating tmux session {} in {}", session.name, path.display());
        let output = runner.run(&new_session_command(&session.name, path)).await?;
        if !output.success {
            return Err(TmuxError::CreateFailed(output.stderr.trim().to_string()));
        }
    }

    Ok(())
}

/// Point the current tmux client at `name`.
pub async fn switch_client<R: CommandRunner>(runner: &R, name: &str) -> Result<(), TmuxError> {
    debug!("Switching tmux client to {}", name);
    let output = runner.run(&switch_client_command(name)).await?;
    if !output.success {
        return Err(TmuxError::SwitchFailed(output.stderr.trim().to_string()));
    }
    Ok(())
}
