//! Submission service: validate, append, confirm.

use chrono::Local;

use bridgeai_types::error::SubmitError;
use bridgeai_types::submission::Submission;

use crate::appender::{self, AppendOutcome, RowAppender};
use crate::catalog;
use crate::summary::{self, Confirmation};
use crate::validate;

/// Records submissions through a [`RowAppender`].
///
/// Generic over the appender so tests can record rows in memory.
pub struct SurveyService<A: RowAppender> {
    appender: A,
}

/// A stored submission and what to tell the respondent.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub outcome: AppendOutcome,
    pub confirmation: Confirmation,
}

impl<A: RowAppender> SurveyService<A> {
    pub fn new(appender: A) -> Self {
        Self { appender }
    }

    pub fn appender(&self) -> &A {
        &self.appender
    }

    /// Validate and store one submission.
    ///
    /// A validation failure returns before anything is written. Storage
    /// errors are returned as-is; nothing is retried.
    #[tracing::instrument(skip_all, fields(survey = %submission.survey))]
    pub async fn submit(&self, submission: &Submission) -> Result<Receipt, SubmitError> {
        let survey = catalog::survey(submission.survey);

        if let Err(err) = validate::validate(survey, submission) {
            tracing::info!(%err, "submission rejected");
            return Err(err.into());
        }

        let header = appender::columns(survey);
        let row = appender::row(survey, submission, Local::now());
        let outcome = self.appender.append(&header, &row).await?;

        tracing::info!(
            path = %outcome.path.display(),
            header_written = outcome.header_written,
            "submission stored"
        );

        let confirmation = summary::confirmation(submission, &outcome.path);
        Ok(Receipt {
            outcome,
            confirmation,
        })
    }
}
