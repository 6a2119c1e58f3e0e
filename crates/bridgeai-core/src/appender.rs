//! Row appender port and row layout.
//!
//! Every survey is stored the same way: a fixed header written once, then one
//! row per submission with a leading timestamp. The trait lives here so the
//! service can append without knowing about files; `CsvFileAppender` in
//! bridgeai-infra is the real implementation.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use bridgeai_types::error::StorageError;
use bridgeai_types::submission::Submission;
use bridgeai_types::survey::Survey;

use crate::render::visible_questions;

/// Name of the leading column.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Timestamp layout: local ISO-8601 with microseconds, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Result of a successful append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    pub path: PathBuf,
    /// True when this append created the file and wrote the header.
    pub header_written: bool,
}

/// Append-only sink for submission rows.
pub trait RowAppender: Send + Sync {
    /// Append `row`, writing `header` first if the destination is new.
    fn append(
        &self,
        header: &[String],
        row: &[String],
    ) -> impl std::future::Future<Output = Result<AppendOutcome, StorageError>> + Send;
}

/// Header for a survey: the timestamp, then every question id in catalog order.
pub fn columns(survey: &Survey) -> Vec<String> {
    std::iter::once(TIMESTAMP_COLUMN.to_string())
        .chain(survey.questions().map(|q| q.id.clone()))
        .collect()
}

/// One output row, aligned with [`columns`].
///
/// Hidden questions are written as empty cells even if an answer was recorded
/// for them before a branch changed.
pub fn row(survey: &Survey, submission: &Submission, at: DateTime<Local>) -> Vec<String> {
    let visible = visible_questions(survey, submission);
    std::iter::once(at.format(TIMESTAMP_FORMAT).to_string())
        .chain(survey.questions().map(|q| {
            if visible.iter().any(|v| v.id == q.id) {
                submission.cell(&q.id)
            } else {
                String::new()
            }
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use bridgeai_types::answer::Answer;
    use bridgeai_types::survey::SurveyId;
    use chrono::TimeZone;

    use super::*;
    use crate::catalog;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_row_width_matches_header_for_every_survey() {
        for survey in catalog::all() {
            let header = columns(survey);
            assert_eq!(header[0], TIMESTAMP_COLUMN);
            let empty = row(survey, &Submission::new(survey.id), at());
            assert_eq!(empty.len(), header.len(), "{}", survey.id);
        }
    }

    #[test]
    fn test_timestamp_cell_format() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let cells = row(survey, &Submission::new(survey.id), at());
        assert_eq!(cells[0], "2025-03-14T09:26:53.000000");
    }

    #[test]
    fn test_cities_flattened_in_their_column() {
        let survey = catalog::survey(SurveyId::Business);
        let mut submission = Submission::new(SurveyId::Business);
        submission.set(
            "cities",
            Answer::Choices(vec![
                "Toronto/GTA".to_string(),
                "Vancouver/Lower Mainland".to_string(),
            ]),
        );

        let header = columns(survey);
        let cells = row(survey, &submission, at());
        let idx = header.iter().position(|c| c == "cities").unwrap();
        assert_eq!(cells[idx], "Toronto/GTA; Vancouver/Lower Mainland");
    }

    #[test]
    fn test_other_with_blank_follow_up_keeps_empty_column() {
        let survey = catalog::survey(SurveyId::Business);
        let mut submission = Submission::new(SurveyId::Business);
        submission.set("industry", Answer::Choice("Other".into()));
        submission.set("industry_other", Answer::Text(String::new()));

        let header = columns(survey);
        let cells = row(survey, &submission, at());
        let idx = header.iter().position(|c| c == "industry_other").unwrap();
        assert_eq!(cells.len(), header.len());
        assert_eq!(cells[idx - 1], "Other");
        assert_eq!(cells[idx], "");
    }

    #[test]
    fn test_hidden_answer_is_blanked() {
        let survey = catalog::survey(SurveyId::Business);
        let mut submission = Submission::new(SurveyId::Business);
        submission.set("role", Answer::Choice("Operations".into()));
        submission.set("role_other", Answer::Text("Chief tinkerer".into()));

        let header = columns(survey);
        let cells = row(survey, &submission, at());
        let idx = header.iter().position(|c| c == "role_other").unwrap();
        assert_eq!(cells[idx], "");
    }
}
