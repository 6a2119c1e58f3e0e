//! Shared domain types for BridgeAI surveys.
//!
//! Surveys, questions, answers, submissions, configuration, and their error
//! types. No I/O and no infrastructure dependencies -- only serde and
//! thiserror.

pub mod answer;
pub mod config;
pub mod error;
pub mod submission;
pub mod survey;
