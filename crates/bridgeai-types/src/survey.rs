//! Survey structure: sections, questions, choices, and branch conditions.
//!
//! A survey is a fixed, ordered list of sections. Follow-up questions are
//! revealed by [`Condition`]s keyed on a [`ChoiceTag`] that each offered choice
//! carries from the moment the catalog is defined. Branching never inspects
//! label text.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Identifier of a survey variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyId {
    /// Business survey on reaching immigrant customers.
    Business,
    /// Newcomer settlement companion survey.
    Newcomer,
}

impl SurveyId {
    /// Every survey variant, in listing order.
    pub const ALL: [SurveyId; 2] = [SurveyId::Business, SurveyId::Newcomer];
}

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurveyId::Business => write!(f, "business"),
            SurveyId::Newcomer => write!(f, "newcomer"),
        }
    }
}

impl FromStr for SurveyId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "business" => Ok(SurveyId::Business),
            "newcomer" => Ok(SurveyId::Newcomer),
            other => Err(format!("unknown survey: '{other}'")),
        }
    }
}

/// Life-stage bucket a newcomer picks on the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewcomerStatus {
    Student,
    Worker,
    Family,
    Refugee,
    Planning,
}

/// Category tag attached to a choice when the catalog is defined.
///
/// Conditions dispatch on these tags, so editing a label never changes
/// which follow-up questions appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceTag {
    /// "Other" -- reveals a free-text follow-up.
    Other,
    /// Respondent agreed to be contacted.
    OptIn,
    /// Newcomer life-stage bucket.
    Status(NewcomerStatus),
}

/// One offered option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub tag: Option<ChoiceTag>,
}

impl Choice {
    /// An option with no branch behavior.
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tag: None,
        }
    }

    /// An option that drives conditional follow-ups.
    pub fn tagged(label: impl Into<String>, tag: ChoiceTag) -> Self {
        Self {
            label: label.into(),
            tag: Some(tag),
        }
    }
}

/// Input shape of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Exactly one option. `dropdown` only changes how the prompt is drawn.
    SingleChoice { choices: Vec<Choice>, dropdown: bool },
    /// Zero or more options, optionally capped.
    MultiChoice {
        choices: Vec<Choice>,
        max_selections: Option<usize>,
    },
    /// Bounded integer rating.
    Scale {
        min: i64,
        max: i64,
        default: i64,
        hint: Option<String>,
    },
    /// Free-form text, accepted unvalidated (empty included).
    FreeText {
        multiline: bool,
        placeholder: Option<String>,
    },
}

impl QuestionKind {
    /// Offered choices, if this is a choice question.
    pub fn choices(&self) -> Option<&[Choice]> {
        match self {
            QuestionKind::SingleChoice { choices, .. } | QuestionKind::MultiChoice { choices, .. } => {
                Some(choices.as_slice())
            }
            _ => None,
        }
    }
}

/// Reveal rule: the answer to question `on` must include a choice tagged `tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub on: &'static str,
    pub tag: ChoiceTag,
}

impl Condition {
    pub fn new(on: &'static str, tag: ChoiceTag) -> Self {
        Self { on, tag }
    }
}

/// A single question. Its `id` doubles as the output column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub condition: Option<Condition>,
}

impl Question {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            condition: None,
        }
    }

    /// Radio-style single choice over untagged labels.
    pub fn single(id: &str, prompt: &str, labels: &[&str]) -> Self {
        Self::single_with(id, prompt, labels.iter().map(|l| Choice::plain(*l)).collect())
    }

    /// Radio-style single choice over prepared choices.
    pub fn single_with(id: &str, prompt: &str, choices: Vec<Choice>) -> Self {
        Self::new(
            id,
            prompt,
            QuestionKind::SingleChoice {
                choices,
                dropdown: false,
            },
        )
    }

    /// Dropdown single choice over untagged labels.
    pub fn dropdown(id: &str, prompt: &str, labels: &[&str]) -> Self {
        Self::new(
            id,
            prompt,
            QuestionKind::SingleChoice {
                choices: labels.iter().map(|l| Choice::plain(*l)).collect(),
                dropdown: true,
            },
        )
    }

    /// Multi-select over prepared choices.
    pub fn multi_with(id: &str, prompt: &str, choices: Vec<Choice>, max: Option<usize>) -> Self {
        Self::new(
            id,
            prompt,
            QuestionKind::MultiChoice {
                choices,
                max_selections: max,
            },
        )
    }

    pub fn scale(id: &str, prompt: &str, min: i64, max: i64, default: i64) -> Self {
        Self::new(
            id,
            prompt,
            QuestionKind::Scale {
                min,
                max,
                default,
                hint: None,
            },
        )
    }

    pub fn text(id: &str, prompt: &str) -> Self {
        Self::new(
            id,
            prompt,
            QuestionKind::FreeText {
                multiline: false,
                placeholder: None,
            },
        )
    }

    pub fn text_area(id: &str, prompt: &str) -> Self {
        Self::new(
            id,
            prompt,
            QuestionKind::FreeText {
                multiline: true,
                placeholder: None,
            },
        )
    }

    /// Reveal this question only when `condition` holds.
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Attach a hint to a scale, or a placeholder to free text.
    pub fn hint(mut self, text: &str) -> Self {
        match &mut self.kind {
            QuestionKind::Scale { hint, .. } => *hint = Some(text.to_string()),
            QuestionKind::FreeText { placeholder, .. } => *placeholder = Some(text.to_string()),
            _ => {}
        }
        self
    }

    /// Tag of the offered choice whose label is exactly `label`.
    pub fn tag_of(&self, label: &str) -> Option<ChoiceTag> {
        self.kind
            .choices()?
            .iter()
            .find(|c| c.label == label)
            .and_then(|c| c.tag)
    }
}

/// A labeled group of questions, optionally conditional as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub caption: Option<String>,
    pub condition: Option<Condition>,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            caption: None,
            condition: None,
            questions,
        }
    }

    pub fn caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_string());
        self
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// A complete survey variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    pub id: SurveyId,
    pub title: String,
    pub intro: String,
    /// Default output file name, relative to the output directory.
    pub file_name: String,
    pub sections: Vec<Section>,
}

impl Survey {
    /// Every question in catalog order, conditional ones included.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|q| q.id == id)
    }
}
