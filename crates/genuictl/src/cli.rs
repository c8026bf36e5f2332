//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generative UI demo: markdown answers next to interactive mini-apps
#[derive(Parser, Debug)]
#[command(name = "genui")]
#[command(about = "Generative UI demo - compare markdown answers with generated mini-apps", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Config file (overrides ~/.config/genui/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for card shuffles and quiz problems
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Color theme: dark or light
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Subcommand (if not provided, starts interactive TUI)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Launch the side-by-side comparison TUI
    Tui,

    /// List example prompts and the mini-app each one produces
    Prompts {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Print the mini-app a prompt resolves to, or "none"
    Resolve {
        /// Prompt text
        prompt: String,
    },

    /// Print Sierpinski triangle statistics for a depth
    Fractal {
        /// Recursion depth, clamped to 0..=6
        #[arg(long)]
        depth: Option<u32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["genui"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["genui", "fractal", "--depth", "5", "--seed", "9"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Fractal { depth: Some(5) }));
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn test_resolve_takes_prompt() {
        let cli = Cli::try_parse_from(["genui", "resolve", "지금 시간"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Resolve {
                prompt: "지금 시간".to_string()
            })
        );
    }
}
