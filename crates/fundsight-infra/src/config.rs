//! Advisor configuration loader for FundSight.
//!
//! Reads `config.toml` from the data directory (`~/.fundsight/` in
//! production) and deserializes it into [`AdvisorConfig`]. Falls back to
//! sensible defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use fundsight_types::config::AdvisorConfig;

/// The default data directory, `~/.fundsight`.
///
/// Falls back to a relative `.fundsight` when no home directory can be
/// determined (e.g., stripped-down containers).
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".fundsight"))
        .unwrap_or_else(|| PathBuf::from(".fundsight"))
}

/// Load advisor configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AdvisorConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns
///   the default.
/// - If the file exists and parses successfully, returns the parsed
///   config.
pub async fn load_advisor_config(data_dir: &Path) -> AdvisorConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return AdvisorConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return AdvisorConfig::default();
        }
    };

    match toml::from_str::<AdvisorConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AdvisorConfig::default()
        }
    }
}

/// Resolve the advice service API key from the configured environment
/// variable. Returns `None` when the variable is unset or empty.
pub fn resolve_api_key(config: &AdvisorConfig) -> Option<SecretString> {
    std::env::var(&config.api_key_env)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(SecretString::from)
}
