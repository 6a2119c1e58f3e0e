//! Application state shared by the commands.

use std::path::PathBuf;

use bridgeai_core::catalog;
use bridgeai_core::service::SurveyService;
use bridgeai_infra::config::{load_global_config, output_path, resolve_data_dir};
use bridgeai_infra::csv_file::CsvFileAppender;
use bridgeai_types::config::GlobalConfig;
use bridgeai_types::survey::SurveyId;

/// Survey service pinned to the CSV file appender.
pub type ConcreteSurveyService = SurveyService<CsvFileAppender>;

pub struct AppState {
    pub data_dir: PathBuf,
    pub config: GlobalConfig,
}

impl AppState {
    /// Resolve the data directory and load its config.
    pub async fn init(data_dir: Option<PathBuf>) -> Self {
        let data_dir = resolve_data_dir(data_dir);
        let config = load_global_config(&data_dir).await;
        tracing::debug!(data_dir = %data_dir.display(), ?config, "state initialized");
        Self { data_dir, config }
    }

    /// Output file for a survey.
    pub fn output_path(&self, survey: SurveyId) -> PathBuf {
        output_path(&self.config, &self.data_dir, catalog::survey(survey))
    }

    /// A service that appends to the survey's output file.
    pub fn survey_service(&self, survey: SurveyId) -> ConcreteSurveyService {
        SurveyService::new(CsvFileAppender::new(self.output_path(survey)))
    }
}
