// ABOUTME: Lists the worktrees of a repository through `git worktree list --porcelain`
// Used to expand a `worktreeroot` config entry into one session per working tree

use crate::process::{CommandOutput, CommandRunner, ProcessCommand};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const WORKTREE_PREFIX: &str = "worktree ";

pub fn worktree_list_command(repository: &Path) -> ProcessCommand {
    ProcessCommand::new(
        "git",
        [
            "-C".to_string(),
            repository.to_string_lossy().to_string(),
            "worktree".to_string(),
            "list".to_string(),
            "--porcelain".to_string(),
        ],
    )
}

/// Keep only the `worktree <path>` lines of porcelain output.
///
/// The primary working tree is listed first, linked worktrees follow in git's order.
pub fn parse_worktree_paths(output: &CommandOutput) -> Vec<PathBuf> {
    output
        .stdout
        .lines()
        .filter_map(|line| line.strip_prefix(WORKTREE_PREFIX))
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Every working tree of the repository at `repository`, primary included.
///
/// A path that is not a repository, or a missing git, yields an empty list.
pub async fn list_worktrees<R: CommandRunner>(runner: &R, repository: &Path) -> Vec<PathBuf> {
    match runner.run(&worktree_list_command(repository)).await {
        Ok(output) if output.success => {
            let worktrees = parse_worktree_paths(&output);
            debug!("Found {} worktrees under {}", worktrees.len(), repository.display());
            worktrees
        }
        Ok(output) => {
            warn!(
                "git worktree list failed for {}: {}",
                repository.display(),
                output.stderr.trim()
            );
            Vec::new()
        }
        Err(e) => {
            warn!("Failed to run git for {}: {}", repository.display(), e);
            Vec::new()
        }
    }
}
