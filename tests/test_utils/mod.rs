// ABOUTME: Shared test helpers - a CommandRunner that answers from a table and records every call

#![allow(dead_code)]

use mingle::process::{CommandOutput, CommandRunner, ProcessCommand};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

/// Answers commands by their rendered command line.
///
/// Commands without a scripted answer fail to start, as if the binary were missing.
#[derive(Default)]
pub struct FakeRunner {
    responses: HashMap<String, CommandOutput>,
    calls: RefCell<Vec<ProcessCommand>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, command_line: &str, output: CommandOutput) -> Self {
        self.responses.insert(command_line.to_string(), output);
        self
    }

    pub fn tmux_sessions(self, names: &[&str]) -> Self {
        let stdout: String = names.iter().map(|name| format!("{name}\n")).collect();
        self.respond("tmux list-sessions -F #{session_name}", CommandOutput::ok(stdout))
    }

    pub fn zoxide(self, dirs: &[&str]) -> Self {
        let stdout: String = dirs.iter().map(|dir| format!("{dir}\n")).collect();
        self.respond("zoxide query -l", CommandOutput::ok(stdout))
    }

    pub fn worktrees(self, root: &str, paths: &[&str]) -> Self {
        let stdout: String = paths
            .iter()
            .map(|path| format!("worktree {path}\nHEAD 0000000000000000000000000000000000000000\nbranch refs/heads/main\n\n"))
            .collect();
        self.respond(
            &format!("git -C {root} worktree list --porcelain"),
            CommandOutput::ok(stdout),
        )
    }

    pub fn calls(&self) -> Vec<ProcessCommand> {
        self.calls.borrow().clone()
    }

    pub fn call_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }

    /// Calls other than the read-only listing queries.
    pub fn mutating_calls(&self) -> Vec<String> {
        self.call_lines()
            .into_iter()
            .filter(|line| {
                !line.starts_with("tmux list-sessions")
                    && !line.starts_with("zoxide query")
                    && !line.contains("worktree list")
            })
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, command: &ProcessCommand) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(command.clone());
        self.responses
            .get(&command.to_string())
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} not found", command.program)))
    }
}
