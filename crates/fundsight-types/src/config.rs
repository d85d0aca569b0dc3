//! Advisor configuration types for FundSight.
//!
//! `AdvisorConfig` represents the `config.toml` that controls the advice
//! service model, request shaping, and the history window forwarded as
//! conversational context.

use serde::{Deserialize, Serialize};

/// Configuration for the advice service adapter and session controller.
///
/// Loaded from `~/.fundsight/config.toml`. All fields have sensible
/// defaults; an empty file parses to `AdvisorConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Model identifier for the advice service.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum output tokens per advice response.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Sampling temperature for advice generation.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum number of prior turns forwarded as conversational context.
    /// The transcript itself is never truncated; only the forwarded
    /// window is bounded.
    #[serde(default = "default_max_history_turns")]
    pub max_history_turns: usize,

    /// HTTP request timeout for the advice service, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Environment variable holding the advice service API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_history_turns() -> usize {
    40
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_api_key_env() -> String {
    "FUNDSIGHT_API_KEY".to_string()
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
            max_history_turns: default_max_history_turns(),
            request_timeout_secs: default_request_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AdvisorConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.max_output_tokens, 1024);
        assert_eq!(config.max_history_turns, 40);
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.api_key_env, "FUNDSIGHT_API_KEY");
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let config: AdvisorConfig = toml::from_str("").unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.max_history_turns, 40);
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let toml_str = r#"
model = "gemini-2.5-pro"
max_history_turns = 12
"#;
        let config: AdvisorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.max_history_turns, 12);
        // Untouched fields keep their defaults
        assert_eq!(config.max_output_tokens, 1024);
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = AdvisorConfig {
            model: "gemini-2.5-flash".to_string(),
            max_output_tokens: 2048,
            temperature: 0.4,
            max_history_turns: 20,
            request_timeout_secs: 30,
            api_key_env: "GEMINI_API_KEY".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AdvisorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.max_output_tokens, 2048);
        assert_eq!(parsed.max_history_turns, 20);
        assert_eq!(parsed.api_key_env, "GEMINI_API_KEY");
    }
}
