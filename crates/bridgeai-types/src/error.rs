use std::path::PathBuf;

use thiserror::Error;

/// The one rule a respondent can break: picking too many options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please select no more than {max} options for '{question}' ({selected} selected)")]
    TooManySelections {
        question: String,
        max: usize,
        selected: usize,
    },
}

/// Errors decoding answers supplied outside the interactive prompts.
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),

    #[error("question '{question}' expects {expected}")]
    WrongShape {
        question: String,
        expected: &'static str,
    },

    #[error("'{label}' is not an option of question '{question}'")]
    UnknownOption { question: String, label: String },

    #[error("'{label}' is selected more than once for question '{question}'")]
    DuplicateOption { question: String, label: String },

    #[error("rating {value} for '{question}' is outside {min}..={max}")]
    RatingOutOfRange {
        question: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("failed to read answers file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse answers file: {0}")]
    Parse(String),
}

/// Errors on the append path.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anything that can stop a submission from being recorded.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
