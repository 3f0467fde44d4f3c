// ABOUTME: Loads the declarative session list from ~/.config/mingle/mingle.yaml
// Missing file means no configured sessions; `~` in paths is resolved against the user's home

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Value of `type` that turns an entry into one session per git worktree
pub const WORKTREE_ROOT_TYPE: &str = "worktreeroot";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Cannot resolve home directory: {0}")]
    HomeDirUnavailable(String),
}

/// One entry of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSession {
    pub path: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmuxinator: Option<String>,
}

impl ConfigSession {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: None,
            tmuxinator: None,
        }
    }

    pub fn worktree_root(path: impl Into<String>) -> Self {
        Self {
            kind: Some(WORKTREE_ROOT_TYPE.to_string()),
            ..Self::new(path)
        }
    }

    pub fn with_tmuxinator(mut self, profile: impl Into<String>) -> Self {
        self.tmuxinator = Some(profile.into());
        self
    }

    /// Unknown `type` values fall back to a plain entry.
    pub fn is_worktree_root(&self) -> bool {
        self.kind.as_deref() == Some(WORKTREE_ROOT_TYPE)
    }
}

/// Anything that can hand the catalog its configured sessions.
pub trait ConfigSource {
    fn load(&self) -> Result<Vec<ConfigSession>, ConfigError>;
}

impl ConfigSource for Vec<ConfigSession> {
    fn load(&self) -> Result<Vec<ConfigSession>, ConfigError> {
        Ok(self.clone())
    }
}

/// The YAML config file on disk.
#[derive(Debug, Clone)]
pub struct FileConfig {
    path: PathBuf,
}

impl FileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/mingle/mingle.yaml`
    pub fn default_location() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or_else(|| {
            ConfigError::HomeDirUnavailable("Failed to get home directory".to_string())
        })?;
        Ok(Self::new(home.join(".config").join("mingle").join("mingle.yaml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<Vec<ConfigSession>, ConfigError> {
        if !self.path.exists() {
            info!("No config file was found at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        let mut sessions = parse_sessions(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        for session in &mut sessions {
            session.path = expand_home(&session.path)?;
        }

        debug!("Loaded {} config sessions from {}", sessions.len(), self.path.display());
        Ok(sessions)
    }
}

/// An empty document is an empty list, not a parse error.
fn parse_sessions(content: &str) -> Result<Vec<ConfigSession>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(content)
}

/// Resolve a leading `~` or `~/` against the current user's home directory.
pub fn expand_home(path: &str) -> Result<String, ConfigError> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(path.to_string()),
    };

    let home = current_user_home()?;
    if rest.is_empty() {
        Ok(home.to_string_lossy().to_string())
    } else {
        Ok(home.join(rest).to_string_lossy().to_string())
    }
}

fn current_user_home() -> Result<PathBuf, ConfigError> {
    use nix::unistd::{getuid, User};

    match User::from_uid(getuid()) {
        Ok(Some(user)) => Ok(user.dir),
        Ok(None) => dirs::home_dir().ok_or_else(|| {
            ConfigError::HomeDirUnavailable(format!("no passwd entry for uid {}", getuid()))
        }),
        Err(e) => Err(ConfigError::HomeDirUnavailable(e.to_string())),
    }
}
