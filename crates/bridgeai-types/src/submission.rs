//! One respondent's answers for one survey.
//!
//! A `Submission` is filled answer by answer, validated, turned into a single
//! output row, and then dropped. It has no identity beyond that row.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::answer::Answer;
use crate::survey::SurveyId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub survey: SurveyId,
    answers: BTreeMap<String, Answer>,
}

impl Submission {
    pub fn new(survey: SurveyId) -> Self {
        Self {
            survey,
            answers: BTreeMap::new(),
        }
    }

    /// Record (or replace) the answer for `question_id`.
    pub fn set(&mut self, question_id: impl Into<String>, answer: Answer) {
        self.answers.insert(question_id.into(), answer);
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Drop the answer for `question_id`, returning it if there was one.
    pub fn remove(&mut self, question_id: &str) -> Option<Answer> {
        self.answers.remove(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    /// All recorded answers keyed by question id.
    pub fn answers(&self) -> &BTreeMap<String, Answer> {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Cell text for a question, empty when unanswered.
    pub fn cell(&self, question_id: &str) -> String {
        self.get(question_id).map(Answer::to_cell).unwrap_or_default()
    }
}
