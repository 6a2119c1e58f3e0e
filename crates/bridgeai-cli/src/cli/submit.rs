//! Non-interactive submission from an answers file (`bridgeai submit`).

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use bridgeai_core::catalog;
use bridgeai_infra::answers_file::load_answers;
use bridgeai_types::survey::SurveyId;

use super::Output;
use super::display::print_confirmation;
use crate::state::AppState;

/// Decode `answers`, validate, and append one row.
///
/// # Examples
///
/// ```bash
/// bridgeai submit business --answers answers.toml
/// bridgeai --json submit newcomer -a answers.json
/// ```
pub async fn submit_answers(
    state: &AppState,
    id: SurveyId,
    answers: &Path,
    output: Output,
) -> Result<()> {
    let survey = catalog::survey(id);
    let submission = load_answers(answers, survey)
        .await
        .with_context(|| format!("Invalid answers in {}", answers.display()))?;

    let service = state.survey_service(id);
    let receipt = service
        .submit(&submission)
        .await
        .context("Submission not saved")?;

    if output.json {
        let out = serde_json::json!({
            "survey": id.to_string(),
            "path": receipt.outcome.path.display().to_string(),
            "header_written": receipt.outcome.header_written,
            "confirmation": receipt.confirmation,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if !output.quiet {
        print_confirmation(&receipt.confirmation);
        if receipt.outcome.header_written {
            println!(
                "  {}",
                style(format!("Created {} with header row", receipt.outcome.path.display())).dim()
            );
            println!();
        }
    }

    Ok(())
}
