// ABOUTME: External command description and runner used by every tmux, git and zoxide call
// The runner is a trait so catalog building and connecting can be exercised without the real tools

use std::fmt;
use std::path::PathBuf;
use tokio::process::Command;

/// A program invocation: program name, arguments and optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCommand {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl ProcessCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: None,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl fmt::Display for ProcessCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Non-blank lines of stdout, trimmed.
    pub fn stdout_lines(&self) -> impl Iterator<Item = &str> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// Runs external commands to completion.
///
/// `Err` means the program could not be started at all (missing binary,
/// bad working directory). A program that ran and exited non-zero is an
/// `Ok` output with `success == false`.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&self, command: &ProcessCommand) -> std::io::Result<CommandOutput>;
}

/// Runs commands on the host through `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &ProcessCommand) -> std::io::Result<CommandOutput> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = &command.current_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_lines_skips_blank_lines() {
        let output = CommandOutput::ok("alpha\n\n   \n  beta  \n\t\ngamma");
        let lines: Vec<&str> = output.stdout_lines().collect();
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_display_joins_program_and_args() {
        let cmd = ProcessCommand::new("tmux", ["switch-client", "-t", "work"]);
        assert_eq!(cmd.to_string(), "tmux switch-client -t work");
        assert!(cmd.current_dir.is_none());
    }

    #[test]
    fn test_in_dir_sets_working_directory() {
        let cmd = ProcessCommand::new("sh", ["-c", "true"]).in_dir("/tmp");
        assert_eq!(cmd.current_dir, Some(PathBuf::from("/tmp")));
    }

    #[tokio::test]
    async fn test_system_runner_reports_missing_binary_as_error() {
        let cmd = ProcessCommand::new("mingle-definitely-not-a-real-binary", Vec::<String>::new());
        assert!(SystemRunner.run(&cmd).await.is_err());
    }
}
