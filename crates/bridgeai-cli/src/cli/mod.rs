//! CLI command definitions for the `bridgeai` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod display;
pub mod prompt;
pub mod submit;
pub mod surveys;
pub mod take;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use bridgeai_observe::tracing_setup::{TracingOptions, filter_for_verbosity};
use bridgeai_types::survey::SurveyId;

/// Short surveys for businesses and newcomers to Canada.
#[derive(Parser)]
#[command(name = "bridgeai", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding config.toml and survey output.
    #[arg(long, global = true, env = "BRIDGEAI_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write log lines to stderr as JSON instead of text.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Subscriber settings derived from the logging flags.
    pub fn tracing_options(&self) -> TracingOptions {
        TracingOptions {
            default_filter: filter_for_verbosity(self.verbose, self.quiet).to_string(),
            json: self.log_json,
            otel: self.otel,
        }
    }

    /// Output switches shared by commands that report a result.
    pub fn output(&self) -> Output {
        Output {
            json: self.json,
            quiet: self.quiet,
        }
    }
}

/// How a command reports its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    /// Print a JSON document instead of styled text.
    pub json: bool,
    /// Skip banners and confirmations; prompts and errors still show.
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a survey interactively.
    Take {
        /// Survey to run (business, newcomer).
        survey: SurveyId,

        /// One question at a time, no review step.
        #[arg(long, conflicts_with = "form")]
        wizard: bool,

        /// Full form with review before submitting.
        #[arg(long)]
        form: bool,
    },

    /// Submit answers from a JSON or TOML file without prompting.
    Submit {
        /// Survey the answers belong to.
        survey: SurveyId,

        /// Answers file keyed by question id.
        #[arg(short, long)]
        answers: PathBuf,
    },

    /// List available surveys and where their responses are stored.
    #[command(alias = "ls")]
    Surveys,

    /// Print the output columns of a survey.
    Columns {
        /// Survey to describe.
        survey: SurveyId,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
