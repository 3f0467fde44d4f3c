// ABOUTME: CLI connect command - create the session if needed, then switch or attach
//
// Outside tmux, exec replaces the current process with tmux attach.

use anyhow::Result;
use std::os::unix::process::CommandExt;
use std::process::Command;
use tracing::debug;

use super::ConnectArgs;
use crate::config::ConfigSource;
use crate::process::{ProcessCommand, SystemRunner};
use crate::session::{ConnectOutcome, Connector, SessionAggregator};
use crate::tmux::{self, TmuxError};

/// Execute the connect command
pub async fn execute<C: ConfigSource>(args: ConnectArgs, config: &C) -> Result<()> {
    let runner = SystemRunner;
    let catalog = SessionAggregator::new(config, &runner).build().await?;

    let connector = Connector::new(&runner, tmux::inside_client());
    match connector.connect(&catalog, &args.session).await? {
        ConnectOutcome::Switched(name) => {
            debug!("Switched client to {}", name);
            Ok(())
        }
        ConnectOutcome::ExecReplace(command) => Err(exec_replace(&command).into()),
    }
}

/// Only returns if exec failed.
fn exec_replace(command: &ProcessCommand) -> TmuxError {
    debug!("Replacing process with: {}", command);

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args);
    if let Some(dir) = &command.current_dir {
        cmd.current_dir(dir);
    }

    let err = cmd.exec();
    TmuxError::AttachFailed(err.to_string())
}
