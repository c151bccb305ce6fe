//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Docman CLI - Import patient documents and search them by attribute.
///
/// Documents are held in memory for the lifetime of one invocation; pass the
/// files to import alongside each command, or use the REPL.
#[derive(Debug, Parser)]
#[command(name = "docman")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DOCMAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Skip files that fail to import instead of stopping at the first failure
    #[arg(short, long, global = true)]
    pub keep_going: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import files and list the resulting documents
    List(ListArgs),

    /// Import files and show the documents matching a query
    Search(SearchArgs),

    /// Show which file extensions can be imported
    Formats,

    /// Enter interactive REPL mode
    Repl(ReplArgs),
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Files to import
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Query text: comma-separated name:substring clauses, e.g. "patient:Joe,body:Coke"
    pub query: String,

    /// Files to import before searching
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the REPL.
#[derive(Debug, Parser)]
pub struct ReplArgs {
    /// Files to import before the prompt opens
    pub files: Vec<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_repl() {
        let cli = Cli::parse_from(["docman"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_search_command() {
        let cli = Cli::parse_from([
            "docman",
            "-vv",
            "search",
            "patient:Joe,body:Diet Coke",
            "a.letter",
            "b.report",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Search(args)) => {
                assert_eq!(args.query, "patient:Joe,body:Diet Coke");
                assert_eq!(args.files.len(), 2);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_list_requires_files() {
        assert!(Cli::try_parse_from(["docman", "list"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["docman", "list", "a.letter", "--format", "json", "-k"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.keep_going);
    }
}
