//! Answers files for non-interactive submissions.
//!
//! A JSON or TOML table keyed by question id:
//!
//! ```toml
//! industry = "Other"
//! industry_other = "Bakery"
//! cities = ["Toronto/GTA", "Calgary"]
//! difficulty = 4
//! ```
//!
//! Values are checked against the question's kind here. Selection caps are
//! left to the validator so the error reads the same as in interactive runs.

use std::path::Path;

use serde_json::Value;

use bridgeai_types::answer::Answer;
use bridgeai_types::error::AnswerError;
use bridgeai_types::submission::Submission;
use bridgeai_types::survey::{Question, QuestionKind, Survey};

/// Read and decode an answers file. `.json` files are parsed as JSON,
/// anything else as TOML.
pub async fn load_answers(path: &Path, survey: &Survey) -> Result<Submission, AnswerError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AnswerError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let table: Value = if is_json {
        serde_json::from_str(&content).map_err(|e| AnswerError::Parse(e.to_string()))?
    } else {
        toml::from_str(&content).map_err(|e| AnswerError::Parse(e.to_string()))?
    };

    let submission = decode_answers(&table, survey)?;
    tracing::debug!(
        path = %path.display(),
        answers = submission.len(),
        "loaded answers file"
    );
    Ok(submission)
}

/// Decode a table of `question id -> value` into a submission.
pub fn decode_answers(table: &Value, survey: &Survey) -> Result<Submission, AnswerError> {
    let Value::Object(entries) = table else {
        return Err(AnswerError::Parse(
            "expected a table of question ids".to_string(),
        ));
    };

    let mut submission = Submission::new(survey.id);
    for (id, value) in entries {
        let question = survey
            .question(id)
            .ok_or_else(|| AnswerError::UnknownQuestion(id.clone()))?;
        if value.is_null() {
            continue;
        }
        submission.set(id.as_str(), decode_answer(question, value)?);
    }
    Ok(submission)
}

/// Decode one value against its question.
pub fn decode_answer(question: &Question, value: &Value) -> Result<Answer, AnswerError> {
    let shape = |expected: &'static str| AnswerError::WrongShape {
        question: question.id.clone(),
        expected,
    };

    match &question.kind {
        QuestionKind::SingleChoice { .. } => {
            let label = value.as_str().ok_or_else(|| shape("a single option label"))?;
            ensure_offered(question, label)?;
            Ok(Answer::Choice(label.to_string()))
        }
        QuestionKind::MultiChoice { .. } => {
            let labels: Vec<String> = match value {
                Value::String(label) => vec![label.clone()],
                Value::Array(items) => items
                    .iter()
                    .map(|item| {
                        item.as_str()
                            .map(str::to_string)
                            .ok_or_else(|| shape("a list of option labels"))
                    })
                    .collect::<Result<_, _>>()?,
                _ => return Err(shape("a list of option labels")),
            };
            for (i, label) in labels.iter().enumerate() {
                ensure_offered(question, label)?;
                if labels[..i].contains(label) {
                    return Err(AnswerError::DuplicateOption {
                        question: question.id.clone(),
                        label: label.clone(),
                    });
                }
            }
            Ok(Answer::Choices(labels))
        }
        QuestionKind::Scale { min, max, .. } => {
            let rating = value.as_i64().ok_or_else(|| shape("an integer rating"))?;
            if rating < *min || rating > *max {
                return Err(AnswerError::RatingOutOfRange {
                    question: question.id.clone(),
                    value: rating,
                    min: *min,
                    max: *max,
                });
            }
            Ok(Answer::Rating(rating))
        }
        QuestionKind::FreeText { .. } => {
            let text = value.as_str().ok_or_else(|| shape("text"))?;
            Ok(Answer::Text(text.to_string()))
        }
    }
}

fn ensure_offered(question: &Question, label: &str) -> Result<(), AnswerError> {
    let offered = question
        .kind
        .choices()
        .is_some_and(|choices| choices.iter().any(|c| c.label == label));
    if offered {
        Ok(())
    } else {
        Err(AnswerError::UnknownOption {
            question: question.id.clone(),
            label: label.to_string(),
        })
    }
}
