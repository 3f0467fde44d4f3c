// ABOUTME: Builds the session catalog from live tmux sessions, the config file, git worktrees and zoxide
// Sources are merged in precedence order, names normalized, and the first occurrence of a name wins

use crate::config::{ConfigError, ConfigSession, ConfigSource};
use crate::git;
use crate::models::{Session, SessionKind};
use crate::process::CommandRunner;
use crate::{tmux, zoxide};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Ordered, deduplicated sessions for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCatalog {
    sessions: Vec<Session>,
}

impl SessionCatalog {
    /// Merge source groups given from highest to lowest precedence.
    ///
    /// Names are normalized here and nowhere earlier, so `a.b` from one source
    /// and `a_b` from another collapse into whichever came first.
    pub fn merge<G, I>(groups: G) -> Self
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = Session>,
    {
        let mut sessions = Vec::new();
        let mut seen = HashSet::new();

        for session in groups.into_iter().flatten() {
            let session = session.normalized();
            if seen.insert(session.name.clone()) {
                sessions.push(session);
            }
        }

        Self { sessions }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sessions.iter().map(|session| session.name.as_str())
    }

    pub fn find(&self, name: &str) -> Option<&Session> {
        self.sessions.iter().find(|session| session.name == name)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl<'a> IntoIterator for &'a SessionCatalog {
    type Item = &'a Session;
    type IntoIter = std::slice::Iter<'a, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.sessions.iter()
    }
}

/// Split config entries into plain sessions and worktree roots still to expand.
pub fn partition_config(entries: Vec<ConfigSession>) -> (Vec<Session>, Vec<ConfigSession>) {
    let (roots, plain): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(ConfigSession::is_worktree_root);

    let plain = plain
        .into_iter()
        .map(|entry| Session::at_path(&entry.path).with_template_profile(entry.tmuxinator))
        .collect();

    (plain, roots)
}

/// One session per worktree of each root, carrying the root's tmuxinator profile.
pub async fn expand_worktree_roots<R: CommandRunner>(
    runner: &R,
    roots: &[ConfigSession],
) -> Vec<Session> {
    let mut sessions = Vec::new();

    for root in roots {
        let worktrees = git::list_worktrees(runner, Path::new(&root.path)).await;
        sessions.extend(worktrees.into_iter().map(|worktree| {
            Session::at_path(worktree)
                .with_kind(SessionKind::WorktreeRoot)
                .with_template_profile(root.tmuxinator.clone())
        }));
    }

    sessions
}

/// Gathers every session source into a [`SessionCatalog`].
pub struct SessionAggregator<'a, C: ?Sized, R> {
    config: &'a C,
    runner: &'a R,
}

impl<'a, C, R> SessionAggregator<'a, C, R>
where
    C: ConfigSource + ?Sized,
    R: CommandRunner,
{
    pub fn new(config: &'a C, runner: &'a R) -> Self {
        Self { config, runner }
    }

    /// Query all sources and merge them.
    ///
    /// The config is loaded before any external command runs, so a broken
    /// config file fails fast. The remaining sources never fail, they come
    /// back empty instead.
    pub async fn build(&self) -> Result<SessionCatalog, ConfigError> {
        let (plain, roots) = partition_config(self.config.load()?);

        let (live, worktrees, directories) = tokio::join!(
            tmux::list_sessions(self.runner),
            expand_worktree_roots(self.runner, &roots),
            zoxide::list_directories(self.runner),
        );

        debug!(
            "Merging {} live, {} configured, {} worktree and {} zoxide sessions",
            live.len(),
            plain.len(),
            worktrees.len(),
            directories.len()
        );

        let catalog = SessionCatalog::merge([live, plain, worktrees, directories]);
        info!("Session catalog has {} entries", catalog.len());
        Ok(catalog)
    }
}
