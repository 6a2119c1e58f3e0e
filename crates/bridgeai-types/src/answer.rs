use serde::{Deserialize, Serialize};

/// Separator used to flatten a multi-select answer into one cell.
pub const MULTI_SELECT_DELIMITER: &str = "; ";

/// A respondent's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// A single selected label.
    Choice(String),
    /// Selected labels, in the order they were picked.
    Choices(Vec<String>),
    /// A bounded integer rating.
    Rating(i64),
    /// Free-form text, possibly empty.
    Text(String),
}

impl Answer {
    /// Flatten to the string stored in the output cell.
    pub fn to_cell(&self) -> String {
        match self {
            Answer::Choice(label) => label.clone(),
            Answer::Choices(labels) => labels.join(MULTI_SELECT_DELIMITER),
            Answer::Rating(value) => value.to_string(),
            Answer::Text(text) => text.clone(),
        }
    }

    /// Labels this answer selects. Empty for ratings and text.
    pub fn selected_labels(&self) -> Vec<&str> {
        match self {
            Answer::Choice(label) => vec![label.as_str()],
            Answer::Choices(labels) => labels.iter().map(String::as_str).collect(),
            Answer::Rating(_) | Answer::Text(_) => Vec::new(),
        }
    }

    pub fn as_rating(&self) -> Option<i64> {
        match self {
            Answer::Rating(value) => Some(*value),
            _ => None,
        }
    }
}
