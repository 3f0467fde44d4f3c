// ABOUTME: Session data model shared by every session source, the catalog and connect
// A session is identified by its name alone; path and template profile only matter for creation

use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionKind {
    /// Expanded from a `worktreeroot` config entry, one per git worktree
    WorktreeRoot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<SessionKind>,
    #[serde(rename = "tmuxinator", skip_serializing_if = "Option::is_none")]
    pub template_profile: Option<String>,
}

impl Session {
    /// A live tmux session, known only by name.
    pub fn live(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            kind: None,
            template_profile: None,
        }
    }

    /// A session rooted at a directory; its name is the directory itself.
    pub fn at_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            name: path.to_string_lossy().to_string(),
            path: Some(path.to_path_buf()),
            kind: None,
            template_profile: None,
        }
    }

    pub fn with_kind(mut self, kind: SessionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_template_profile(mut self, profile: Option<String>) -> Self {
        self.template_profile = profile;
        self
    }

    /// tmux does not allow dots in session names.
    pub fn normalize_name(name: &str) -> String {
        name.replace('.', "_")
    }

    pub fn normalized(mut self) -> Self {
        self.name = Self::normalize_name(&self.name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_replaces_every_dot() {
        assert_eq!(Session::normalize_name("a.b.c"), "a_b_c");
        assert_eq!(Session::normalize_name("/home/me/.dotfiles"), "/home/me/_dotfiles");
        assert_eq!(Session::normalize_name("plain"), "plain");
    }

    #[test]
    fn test_live_session_has_no_path() {
        let session = Session::live("work");
        assert_eq!(session.name, "work");
        assert!(session.path.is_none());
        assert!(session.kind.is_none());
        assert!(session.template_profile.is_none());
    }

    #[test]
    fn test_at_path_uses_path_as_name() {
        let session = Session::at_path("/srv/app.v2");
        assert_eq!(session.name, "/srv/app.v2");
        assert_eq!(session.path, Some(PathBuf::from("/srv/app.v2")));

        // Only the name is rewritten, the directory stays as is
        let session = session.normalized();
        assert_eq!(session.name, "/srv/app_v2");
        assert_eq!(session.path, Some(PathBuf::from("/srv/app.v2")));
    }

    #[test]
    fn test_serializes_without_empty_fields() {
        let json = serde_json::to_string(&Session::live("work")).unwrap();
        assert_eq!(json, r#"{"name":"work"}"#);

        let session = Session::at_path("/repo")
            .with_kind(SessionKind::WorktreeRoot)
            .with_template_profile(Some("dev".to_string()));
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["kind"], "worktree-root");
        assert_eq!(json["tmuxinator"], "dev");
        assert_eq!(json["path"], "/repo");
    }
}
