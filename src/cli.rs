//! CLI argument parsing for laddercut

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for ranked ladder cuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing and renderers
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "laddercut")]
#[command(version)]
#[command(about = "Rank 2D ladder cuts by significance and reduce them to their outer hulls", long_about = None)]
pub struct Cli {
    /// Enable debug tracing output (to stderr)
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the signed significance of a signal yield over background
    Significance {
        /// Signal yield passing the cut
        #[arg(short = 's', long = "signal", value_name = "S")]
        signal: f64,

        /// Background yield passing the cut
        #[arg(short = 'b', long = "background", value_name = "B", allow_negative_numbers = true)]
        background: f64,
    },

    /// Reduce ladder cuts to their outer hulls and list the most significant
    Rank {
        /// Engine configuration file (bounds and cut axes, TOML)
        #[arg(short = 'c', long = "config", value_name = "FILE")]
        config: Option<PathBuf>,

        /// Ladder cut as S,B:Y/X,Y/X,... or z=VALUE:Y/X,...
        #[arg(long = "cut", value_name = "EXPR", required = true, allow_hyphen_values = true)]
        cuts: Vec<String>,

        /// Number of ladder cuts to list
        #[arg(short = 'n', long = "top", value_name = "N", default_value = "1")]
        top: usize,

        /// Output format (text or json)
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_significance() {
        let cli = Cli::parse_from(["laddercut", "significance", "-s", "50", "-b", "10"]);
        match cli.command {
            Command::Significance { signal, background } => {
                assert_eq!(signal, 50.0);
                assert_eq!(background, 10.0);
            }
            _ => panic!("Expected significance subcommand"),
        }
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_parses_rank_defaults() {
        let cli = Cli::parse_from(["laddercut", "rank", "--cut", "50,10:0.1/100"]);
        match cli.command {
            Command::Rank {
                config,
                cuts,
                top,
                format,
            } => {
                assert!(config.is_none());
                assert_eq!(cuts, vec!["50,10:0.1/100"]);
                assert_eq!(top, 1);
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("Expected rank subcommand"),
        }
    }

    #[test]
    fn test_cli_parses_multiple_cuts_and_json() {
        let cli = Cli::parse_from([
            "laddercut",
            "rank",
            "--cut",
            "z=1:0.1/1",
            "--cut",
            "z=-2:0.2/2",
            "--top",
            "5",
            "--format",
            "json",
            "--debug",
        ]);
        assert!(cli.debug);
        match cli.command {
            Command::Rank {
                cuts, top, format, ..
            } => {
                assert_eq!(cuts.len(), 2);
                assert_eq!(top, 5);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected rank subcommand"),
        }
    }

    #[test]
    fn test_cli_rank_requires_cut() {
        assert!(Cli::try_parse_from(["laddercut", "rank"]).is_err());
    }
}
