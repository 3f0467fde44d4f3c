// ABOUTME: CLI argument parsing and command routing for mingle
//
// Provides command-line interface for:
// - Listing every known session (list)
// - Creating and attaching to a session (connect)

pub mod connect;
pub mod list;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::FileConfig;

/// Mingle tmux, config, git worktree and zoxide sessions together
#[derive(Parser)]
#[command(name = "mingle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to read instead of ~/.config/mingle/mingle.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all available sessions
    List(ListArgs),

    /// Connect to a given session
    Connect(ConnectArgs),
}

/// Arguments for the list command
#[derive(clap::Args)]
pub struct ListArgs {
    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the connect command
#[derive(clap::Args)]
pub struct ConnectArgs {
    /// Session name as printed by `mingle list`
    pub session: String,
}

impl Cli {
    pub fn config_file(&self) -> Result<FileConfig> {
        match &self.config {
            Some(path) => Ok(FileConfig::new(path)),
            None => Ok(FileConfig::default_location()?),
        }
    }
}

/// Run the parsed command.
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.config_file()?;
    match cli.command {
        Commands::List(args) => list::execute(args, &config).await,
        Commands::Connect(args) => connect::execute(args, &config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_defaults_to_text() {
        let cli = Cli::try_parse_from(["mingle", "list"]).unwrap();
        match cli.command {
            Commands::List(args) => assert_eq!(args.format, OutputFormat::Text),
            Commands::Connect(_) => panic!("expected list"),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_list_json_with_config() {
        let cli =
            Cli::try_parse_from(["mingle", "list", "--format", "json", "--config", "/tmp/m.yaml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/m.yaml")));
        assert!(matches!(cli.command, Commands::List(ListArgs { format: OutputFormat::Json })));
        assert_eq!(cli.config_file().unwrap().path(), std::path::Path::new("/tmp/m.yaml"));
    }

    #[test]
    fn test_parse_connect_requires_session() {
        assert!(Cli::try_parse_from(["mingle", "connect"]).is_err());

        let cli = Cli::try_parse_from(["mingle", "connect", "/srv/app_v2"]).unwrap();
        match cli.command {
            Commands::Connect(args) => assert_eq!(args.session, "/srv/app_v2"),
            Commands::List(_) => panic!("expected connect"),
        }
    }
}
