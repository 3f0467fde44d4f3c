// ABOUTME: Connects to a catalog session, creating the tmux session first when it is not running
// Inside tmux the client is switched; outside, the caller is handed an attach command to exec

use crate::models::Session;
use crate::process::{CommandRunner, ProcessCommand};
use crate::session::catalog::SessionCatalog;
use crate::session::error::SessionError;
use crate::tmux;
use crate::tmux::session::attach_session_command;
use tracing::{debug, info};

/// Where a successful connect leaves the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// The current tmux client now shows the session.
    Switched(String),
    /// Replace this process with the command; control never comes back.
    ExecReplace(ProcessCommand),
}

pub struct Connector<'a, R> {
    runner: &'a R,
    inside_client: bool,
}

impl<'a, R: CommandRunner> Connector<'a, R> {
    pub fn new(runner: &'a R, inside_client: bool) -> Self {
        Self {
            runner,
            inside_client,
        }
    }

    /// Resolve `target` in the catalog, make sure tmux has it, then switch or attach.
    ///
    /// Nothing is created or switched when `target` is not in the catalog.
    pub async fn connect(
        &self,
        catalog: &SessionCatalog,
        target: &str,
    ) -> Result<ConnectOutcome, SessionError> {
        let session = catalog
            .find(target)
            .ok_or_else(|| SessionError::NotFound(target.to_string()))?;
        debug!("Resolved {} to {:?}", target, session.path);

        self.ensure_running(session).await?;
        self.attach(session).await
    }

    /// The catalog may be stale, so existence is checked against tmux again.
    async fn ensure_running(&self, session: &Session) -> Result<(), SessionError> {
        if tmux::session_exists(self.runner, &session.name).await {
            debug!("tmux session {} already running", session.name);
            return Ok(());
        }

        tmux::create_session(self.runner, session).await?;
        info!("Created tmux session {}", session.name);
        Ok(())
    }

    async fn attach(&self, session: &Session) -> Result<ConnectOutcome, SessionError> {
        if self.inside_client {
            tmux::switch_client(self.runner, &session.name).await?;
            Ok(ConnectOutcome::Switched(session.name.clone()))
        } else {
            Ok(ConnectOutcome::ExecReplace(attach_session_command(&session.name)))
        }
    }
}
