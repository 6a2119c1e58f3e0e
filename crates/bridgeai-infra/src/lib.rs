//! Infrastructure layer for BridgeAI.
//!
//! Implements the [`bridgeai_core::appender::RowAppender`] port over CSV files
//! on local disk, loads `config.toml`, resolves the data directory, and
//! decodes answers files for non-interactive submissions.

pub mod answers_file;
pub mod config;
pub mod csv_file;
