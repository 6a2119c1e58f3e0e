//! Global configuration loader and output path resolution.
//!
//! Reads `config.toml` from the data directory (`./data` by default) and
//! deserializes it into [`GlobalConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use bridgeai_types::config::GlobalConfig;
use bridgeai_types::survey::Survey;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "BRIDGEAI_DATA_DIR";

/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Resolve the data directory.
///
/// Priority:
/// 1. Explicit `--data-dir` flag
/// 2. `BRIDGEAI_DATA_DIR` environment variable
/// 3. `./data`
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Where a survey's rows go: `{data_dir}/{output_dir}/{file}`.
///
/// An absolute `output_dir` ignores the data directory.
pub fn output_path(config: &GlobalConfig, data_dir: &Path, survey: &Survey) -> PathBuf {
    let file = config
        .file_override(survey.id)
        .unwrap_or(&survey.file_name);
    let dir = Path::new(&config.output_dir);
    if dir.is_absolute() {
        dir.join(file)
    } else {
        data_dir.join(dir).join(file)
    }
}
