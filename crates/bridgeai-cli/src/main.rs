//! BridgeAI survey CLI entry point.
//!
//! Binary name: `bridgeai`
//!
//! Parses CLI arguments, sets up tracing, loads configuration, then dispatches
//! to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use bridgeai_observe::tracing_setup::{init_tracing, shutdown_tracing};
use bridgeai_types::config::RunMode;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.tracing_options())
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "bridgeai", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.data_dir.clone()).await;
    let output = cli.output();

    match cli.command {
        Commands::Take {
            survey,
            wizard,
            form,
        } => {
            let mode = if wizard {
                RunMode::Wizard
            } else if form {
                RunMode::Form
            } else {
                state.config.default_mode
            };
            cli::take::take_survey(&state, survey, mode, output).await?;
        }

        Commands::Submit { survey, answers } => {
            cli::submit::submit_answers(&state, survey, &answers, output).await?;
        }

        Commands::Surveys => {
            cli::surveys::list_surveys(&state, cli.json)?;
        }

        Commands::Columns { survey } => {
            cli::surveys::show_columns(survey, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
