//! Survey logic for BridgeAI.
//!
//! Defines the survey catalogs, the conditional renderer, the validator, the
//! step wizard, confirmation summaries, and the [`appender::RowAppender`] port
//! that the infrastructure layer implements. Depends only on `bridgeai-types`
//! -- never on `bridgeai-infra` or any I/O crate.

pub mod appender;
pub mod catalog;
pub mod render;
pub mod service;
pub mod summary;
pub mod validate;
pub mod wizard;
