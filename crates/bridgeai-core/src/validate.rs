//! Submission validation.
//!
//! The only enforced rule is the selection cap on bounded multi-selects.
//! Free text, blank answers, and unanswered questions all pass.

use bridgeai_types::answer::Answer;
use bridgeai_types::error::ValidationError;
use bridgeai_types::submission::Submission;
use bridgeai_types::survey::{Question, QuestionKind, Survey};

use crate::render::visible_questions;

/// Check one answer against its question's selection cap.
pub fn check_answer(question: &Question, answer: &Answer) -> Result<(), ValidationError> {
    let QuestionKind::MultiChoice {
        max_selections: Some(max),
        ..
    } = question.kind
    else {
        return Ok(());
    };

    let selected = answer.selected_labels().len();
    if selected > max {
        return Err(ValidationError::TooManySelections {
            question: question.id.clone(),
            max,
            selected,
        });
    }
    Ok(())
}

/// Check every visible answer of a submission. Stops at the first violation.
pub fn validate(survey: &Survey, submission: &Submission) -> Result<(), ValidationError> {
    for question in visible_questions(survey, submission) {
        if let Some(answer) = submission.get(&question.id) {
            check_answer(question, answer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use bridgeai_types::survey::SurveyId;

    use super::*;
    use crate::catalog;

    fn trust(labels: &[&str]) -> Answer {
        Answer::Choices(labels.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn test_three_trust_factors_pass() {
        let survey = catalog::survey(SurveyId::Business);
        let mut submission = Submission::new(SurveyId::Business);
        submission.set(
            "trust_factors",
            trust(&[
                "Clear, transparent pricing",
                "Free trial period",
                "No long-term contract or commitment",
            ]),
        );
        assert!(validate(survey, &submission).is_ok());
    }

    #[test]
    fn test_four_trust_factors_rejected() {
        let survey = catalog::survey(SurveyId::Business);
        let mut submission = Submission::new(SurveyId::Business);
        submission.set(
            "trust_factors",
            trust(&[
                "Clear, transparent pricing",
                "Free trial period",
                "No long-term contract or commitment",
                "Other",
            ]),
        );

        let err = validate(survey, &submission).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooManySelections {
                question: "trust_factors".to_string(),
                max: 3,
                selected: 4,
            }
        );
    }

    #[test]
    fn test_uncapped_multi_select_accepts_everything() {
        let survey = catalog::survey(SurveyId::Business);
        let cities = survey.question("cities").unwrap();
        let all: Vec<String> = cities
            .kind
            .choices()
            .unwrap()
            .iter()
            .map(|c| c.label.clone())
            .collect();
        assert!(check_answer(cities, &Answer::Choices(all)).is_ok());
    }

    #[test]
    fn test_blank_text_and_empty_submission_pass() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let mut submission = Submission::new(SurveyId::Newcomer);
        assert!(validate(survey, &submission).is_ok());

        submission.set("challenge_text", Answer::Text(String::new()));
        assert!(validate(survey, &submission).is_ok());
    }
}
