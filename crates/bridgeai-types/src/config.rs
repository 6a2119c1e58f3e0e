//! Global configuration types.
//!
//! `GlobalConfig` is the optional `config.toml` in the data directory. Every
//! field has a default, so an empty or missing file behaves like stock output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::survey::SurveyId;

/// How interactive runs walk through a survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Ask everything, allow review and edits, then submit.
    #[default]
    Form,
    /// One question at a time, no going back.
    Wizard,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Form => write!(f, "form"),
            RunMode::Wizard => write!(f, "wizard"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "form" => Ok(RunMode::Form),
            "wizard" => Ok(RunMode::Wizard),
            other => Err(format!("invalid run mode: '{other}'")),
        }
    }
}

/// Top-level configuration loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Output directory, relative to the data directory unless absolute.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Override for the business survey's output file name.
    #[serde(default)]
    pub business_file: Option<String>,

    /// Override for the newcomer survey's output file name.
    #[serde(default)]
    pub newcomer_file: Option<String>,

    /// Mode used by `take` when `--wizard` is not given.
    #[serde(default)]
    pub default_mode: RunMode,
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl GlobalConfig {
    /// Configured file name override for a survey, if any.
    pub fn file_override(&self, survey: SurveyId) -> Option<&str> {
        match survey {
            SurveyId::Business => self.business_file.as_deref(),
            SurveyId::Newcomer => self.newcomer_file.as_deref(),
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            business_file: None,
            newcomer_file: None,
            default_mode: RunMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.output_dir, ".");
        assert!(config.business_file.is_none());
        assert_eq!(config.default_mode, RunMode::Form);
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.output_dir, ".");
        assert!(config.file_override(SurveyId::Newcomer).is_none());
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
output_dir = "responses"
business_file = "biz.csv"
default_mode = "wizard"
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output_dir, "responses");
        assert_eq!(config.file_override(SurveyId::Business), Some("biz.csv"));
        assert!(config.file_override(SurveyId::Newcomer).is_none());
        assert_eq!(config.default_mode, RunMode::Wizard);
    }

    #[test]
    fn test_run_mode_parse() {
        assert_eq!("Wizard".parse::<RunMode>().unwrap(), RunMode::Wizard);
        assert!("chat".parse::<RunMode>().is_err());
    }
}
