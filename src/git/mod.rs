// ABOUTME: Git integration module for discovering the worktrees of a configured repository

pub mod worktree;

pub use worktree::{list_worktrees, parse_worktree_paths};
