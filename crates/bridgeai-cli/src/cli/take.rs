//! Interactive survey runs (`bridgeai take <survey>`).
//!
//! Form mode asks every visible question, then offers a review where any
//! answer can be changed before submitting. A rejected submission keeps all
//! answers and goes straight back to the offending question. Wizard mode
//! walks the questions one step at a time and submits at the end.
//!
//! Changing an answer clears any follow-up it no longer reveals, so switching
//! back later asks the follow-up again.

use anyhow::{Context, Result, bail};
use console::style;
use dialoguer::Select;

use bridgeai_core::catalog;
use bridgeai_core::render::{next_unanswered, prune_hidden, visible_questions};
use bridgeai_core::wizard::WizardState;
use bridgeai_types::config::RunMode;
use bridgeai_types::error::{SubmitError, ValidationError};
use bridgeai_types::submission::Submission;
use bridgeai_types::survey::{Survey, SurveyId};

use super::Output;
use super::display::{SectionAnnouncer, print_banner, print_confirmation, print_error};
use super::prompt::ask;
use crate::state::AppState;

/// Run a survey interactively and store the result.
///
/// With `quiet`, the banner and confirmation are skipped; prompts still show.
pub async fn take_survey(state: &AppState, id: SurveyId, mode: RunMode, output: Output) -> Result<()> {
    let survey = catalog::survey(id);
    tracing::info!(survey = %id, %mode, "starting survey");
    if !output.quiet {
        print_banner(survey);
    }

    match mode {
        RunMode::Form => run_form(state, survey, output).await,
        RunMode::Wizard => run_wizard(state, survey, output).await,
    }
}

enum ReviewChoice {
    Submit,
    Edit(String),
    Discard,
}

async fn run_form(state: &AppState, survey: &Survey, output: Output) -> Result<()> {
    let service = state.survey_service(survey.id);
    let mut submission = Submission::new(survey.id);
    let mut announcer = SectionAnnouncer::default();

    loop {
        fill_unanswered(survey, &mut submission, &mut announcer)?;

        match review(survey, &submission)? {
            ReviewChoice::Submit => match service.submit(&submission).await {
                Ok(receipt) => {
                    report(&receipt, output)?;
                    return Ok(());
                }
                Err(SubmitError::Validation(err)) => {
                    print_error(&err);
                    let ValidationError::TooManySelections { question, .. } = err;
                    reask(survey, &mut submission, &question)?;
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("Failed to store response in {}", service.appender().path().display())
                    });
                }
            },
            ReviewChoice::Edit(question_id) => reask(survey, &mut submission, &question_id)?,
            ReviewChoice::Discard => {
                tracing::info!(survey = %survey.id, "submission discarded");
                if !output.quiet {
                    println!();
                    println!("  {}", style("Discarded. Nothing was saved.").dim());
                    println!();
                }
                return Ok(());
            }
        }
    }
}

/// Ask every visible question that has no answer yet, in order.
///
/// Re-evaluated after each answer so newly revealed follow-ups are picked up.
fn fill_unanswered(
    survey: &Survey,
    submission: &mut Submission,
    announcer: &mut SectionAnnouncer,
) -> Result<()> {
    while let Some(question) = next_unanswered(survey, submission) {
        announcer.before(survey, submission, question);
        let answer = ask(question, None)?;
        submission.set(question.id.as_str(), answer);
    }
    Ok(())
}

fn reask(survey: &Survey, submission: &mut Submission, question_id: &str) -> Result<()> {
    let question = survey
        .question(question_id)
        .with_context(|| format!("unknown question '{question_id}'"))?;
    println!();
    let answer = ask(question, submission.get(question_id))?;
    submission.set(question_id, answer);
    let cleared = prune_hidden(survey, submission);
    if !cleared.is_empty() {
        tracing::debug!(?cleared, "follow-ups hidden by changed answer");
    }
    Ok(())
}

fn review(survey: &Survey, submission: &Submission) -> Result<ReviewChoice> {
    println!();
    println!("{}", style("--- Your answers ---").cyan());
    let visible = visible_questions(survey, submission);
    for question in &visible {
        println!(
            "  {} {}",
            style(format!("{}:", question.id)).bold(),
            submission.cell(&question.id)
        );
    }
    println!("{}", style("---").cyan());

    let action = Select::new()
        .with_prompt("Ready to submit?")
        .items(&["Submit", "Change an answer", "Discard"])
        .default(0)
        .interact()?;

    Ok(match action {
        0 => ReviewChoice::Submit,
        1 => {
            let items: Vec<&str> = visible.iter().map(|q| q.prompt.as_str()).collect();
            let picked = Select::new()
                .with_prompt("Which answer?")
                .items(&items)
                .default(0)
                .interact()?;
            ReviewChoice::Edit(visible[picked].id.clone())
        }
        _ => ReviewChoice::Discard,
    })
}

async fn run_wizard(state: &AppState, survey: &Survey, output: Output) -> Result<()> {
    let mut wizard = WizardState::new(survey);
    let mut announcer = SectionAnnouncer::default();

    while let Some(question) = wizard.current(survey) {
        announcer.before(survey, &wizard.answers, question);
        let (step, total) = wizard.progress(survey);
        println!("{}", style(format!("[{step}/{total}]")).dim());
        let answer = ask(question, None)?;
        wizard = wizard.advance(&question.id, answer);
    }

    let submission = wizard.into_submission();
    let service = state.survey_service(survey.id);
    match service.submit(&submission).await {
        Ok(receipt) => report(&receipt, output),
        Err(err) => bail!("Submission not saved: {err}"),
    }
}

fn report(receipt: &bridgeai_core::service::Receipt, output: Output) -> Result<()> {
    if output.json {
        let out = serde_json::json!({
            "path": receipt.outcome.path.display().to_string(),
            "header_written": receipt.outcome.header_written,
            "confirmation": receipt.confirmation,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if !output.quiet {
        print_confirmation(&receipt.confirmation);
    }
    Ok(())
}
