//! genui - Generative UI demo
//!
//! Without a subcommand it opens the comparison TUI.

use anyhow::{Context, Result};
use clap::Parser;
use genui_common::GenUiConfig;
use owo_colors::OwoColorize;
use tracing::{debug, error};

use genuictl::cli::{Cli, Commands};
use genuictl::errors::{exit_code_for, EXIT_NO_MATCH, EXIT_SUCCESS};
use genuictl::{logging, output, tui};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
            exit_code_for(&e)
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    let target = logging::init(interactive)?;
    debug!(?target, "logging initialised");

    let mut config =
        GenUiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(seed) = cli.seed {
        config.random.seed = Some(seed);
    }
    if let Some(theme) = cli.theme.as_deref() {
        config
            .set_theme(theme)
            .with_context(|| format!("Invalid --theme '{}'", theme))?;
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            tui::run(tui::TuiOptions::from_config(&config)).await?;
        }
        Some(Commands::Prompts { json }) => output::print_prompts(json)?,
        Some(Commands::Resolve { prompt }) => {
            let line = output::resolution_line(&prompt);
            println!("{}", line);
            if line == "none" {
                return Ok(EXIT_NO_MATCH);
            }
        }
        Some(Commands::Fractal { depth }) => {
            let summary = output::fractal_summary(depth.unwrap_or(config.fractal.default_depth));
            output::print_fractal(&summary);
        }
    }

    Ok(EXIT_SUCCESS)
}
