//! Built-in survey catalogs.
//!
//! Each catalog is built once on first use and shared for the life of the
//! process.

mod business;
mod newcomer;

use std::sync::LazyLock;

use bridgeai_types::survey::{Survey, SurveyId};

pub use business::TRUST_FACTORS_MAX;
pub use newcomer::CHALLENGE_AREAS;

static BUSINESS: LazyLock<Survey> = LazyLock::new(business::build);
static NEWCOMER: LazyLock<Survey> = LazyLock::new(newcomer::build);

/// The catalog for a survey variant.
pub fn survey(id: SurveyId) -> &'static Survey {
    match id {
        SurveyId::Business => &BUSINESS,
        SurveyId::Newcomer => &NEWCOMER,
    }
}

/// Every built-in survey, in listing order.
pub fn all() -> impl Iterator<Item = &'static Survey> {
    SurveyId::ALL.into_iter().map(survey)
}
