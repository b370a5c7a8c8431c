//! CLI command definitions and dispatch for the `heirloom` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod chat;
pub mod config;
pub mod transcripts;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Ask questions about your family history.
#[derive(Parser)]
#[command(name = "heirloom", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Ask a single question in a fresh session and print the reply.
    Ask {
        /// The question to send.
        question: String,

        /// Save a transcript after the reply arrives.
        #[arg(long)]
        save: bool,
    },

    /// List saved transcripts.
    #[command(alias = "ls")]
    Transcripts,

    /// Show the effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_parse_ask_with_global_flags() {
        let cli = Cli::try_parse_from(["heirloom", "ask", "Who was Ama?", "--save", "--json", "-vv"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Ask { question, save } => {
                assert_eq!(question, "Who was Ama?");
                assert!(save);
            }
            _ => panic!("expected ask"),
        }
    }
}
