//! Step wizard: one question at a time.
//!
//! The wizard is an explicit state value `{cursor, answers}` advanced by a pure
//! transition. The cursor indexes the list of questions visible for the
//! answers collected so far. Conditions only look at earlier questions, so
//! the already-answered prefix of that list never moves as the cursor
//! advances.

use bridgeai_types::answer::Answer;
use bridgeai_types::submission::Submission;
use bridgeai_types::survey::{Question, Survey};

use crate::render::visible_questions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub cursor: usize,
    pub answers: Submission,
}

impl WizardState {
    /// A fresh wizard positioned on the first question.
    pub fn new(survey: &Survey) -> Self {
        Self {
            cursor: 0,
            answers: Submission::new(survey.id),
        }
    }

    /// The question at the cursor, or `None` once every step is done.
    pub fn current<'a>(&self, survey: &'a Survey) -> Option<&'a Question> {
        visible_questions(survey, &self.answers)
            .get(self.cursor)
            .copied()
    }

    /// Store `answer` under `question_id` and move to the next step.
    #[must_use]
    pub fn advance(self, question_id: &str, answer: Answer) -> Self {
        let mut answers = self.answers;
        answers.set(question_id, answer);
        tracing::trace!(question_id, cursor = self.cursor + 1, "wizard advanced");
        Self {
            cursor: self.cursor + 1,
            answers,
        }
    }

    pub fn is_finished(&self, survey: &Survey) -> bool {
        self.current(survey).is_none()
    }

    /// `(step number, total steps)` for display. The total can change as
    /// branch questions are revealed.
    pub fn progress(&self, survey: &Survey) -> (usize, usize) {
        let total = visible_questions(survey, &self.answers).len();
        ((self.cursor + 1).min(total), total)
    }

    /// Hand the collected answers over for validation and storage.
    pub fn into_submission(self) -> Submission {
        self.answers
    }
}

#[cfg(test)]
mod tests {
    use bridgeai_types::survey::{QuestionKind, SurveyId};

    use super::*;
    use crate::catalog;

    /// Answer whatever the wizard asks with the first option, the default
    /// rating, or a fixed text.
    fn auto_answer(question: &Question) -> Answer {
        match &question.kind {
            QuestionKind::SingleChoice { choices, .. } => Answer::Choice(choices[0].label.clone()),
            QuestionKind::MultiChoice { choices, .. } => {
                Answer::Choices(vec![choices[0].label.clone()])
            }
            QuestionKind::Scale { default, .. } => Answer::Rating(*default),
            QuestionKind::FreeText { .. } => Answer::Text(format!("text for {}", question.id)),
        }
    }

    #[test]
    fn test_new_wizard_starts_on_first_question() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let state = WizardState::new(survey);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.current(survey).unwrap().id, "status");
        assert!(!state.is_finished(survey));
    }

    #[test]
    fn test_advance_is_pure_transition() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let start = WizardState::new(survey);
        let next = start
            .clone()
            .advance("status", Answer::Choice("🎓 International student".into()));

        assert_eq!(start.cursor, 0);
        assert!(start.answers.is_empty());
        assert_eq!(next.cursor, 1);
        assert_eq!(next.current(survey).unwrap().id, "province");
    }

    #[test]
    fn test_branch_questions_follow_status() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let state = WizardState::new(survey)
            .advance("status", Answer::Choice("🎓 International student".into()))
            .advance("province", Answer::Choice("Ontario".into()))
            .advance("timeline", Answer::Choice("Less than 3 months".into()));
        assert_eq!(state.current(survey).unwrap().id, "study_field");
    }

    #[test]
    fn test_final_step_exposes_every_answer_unchanged() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let mut state = WizardState::new(survey);
        let mut given = Vec::new();

        while let Some(question) = state.current(survey) {
            let answer = auto_answer(question);
            given.push((question.id.clone(), answer.clone()));
            state = state.advance(&question.id, answer);
        }

        assert!(state.is_finished(survey));
        let submission = state.into_submission();
        assert_eq!(submission.len(), given.len());
        for (id, answer) in given {
            assert_eq!(submission.get(&id), Some(&answer), "answer for {id} changed");
        }
        // First status option is the student branch.
        assert!(submission.contains("study_field"));
        assert!(!submission.contains("profession"));
    }

    #[test]
    fn test_progress_counts_visible_steps() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let state = WizardState::new(survey);
        let (step, total_before) = state.progress(survey);
        assert_eq!(step, 1);

        let state = state.advance("status", Answer::Choice("🛠️ Refugee / protected person".into()));
        let (step, total_after) = state.progress(survey);
        assert_eq!(step, 2);
        assert_eq!(total_after, total_before + 2);
    }
}
