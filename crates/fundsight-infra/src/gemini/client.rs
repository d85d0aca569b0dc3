//! GeminiAdvisor -- concrete [`AdviceProvider`] implementation for the
//! Gemini `generateContent` API.
//!
//! Sends one non-streaming request per advice query, with the financial
//! context serialized into the system instruction and the prior dialogue
//! mapped to Gemini `contents`.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::{Instrument, info_span};

use fundsight_core::advisor::AdviceProvider;
use fundsight_observe::genai_attrs::{OP_CHAT, PROVIDER_GEMINI};
use fundsight_types::chat::DialogueTurn;
use fundsight_types::config::AdvisorConfig;
use fundsight_types::error::AdviceError;
use fundsight_types::finance::FinancialContext;

use super::prompt::AdvicePromptBuilder;
use super::types::{GeminiContent, GeminiRequest, GeminiResponse, GenerationConfig};

/// Gemini advice provider.
///
/// Implements [`AdviceProvider`] against
/// `POST {base}/v1beta/models/{model}:generateContent`.
pub struct GeminiAdvisor {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    temperature: f64,
    max_output_tokens: u32,
}

impl GeminiAdvisor {
    /// Create a new Gemini advisor.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key wrapped in SecretString
    /// * `config` - model, request shaping, and timeout settings
    pub fn new(api_key: SecretString, config: &AdvisorConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    /// The model this advisor requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full generateContent URL for the configured model.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Assemble the wire request from query, grounding data, and prior
    /// dialogue. The query is always the final `contents` entry.
    fn to_gemini_request(
        &self,
        query: &str,
        context: &FinancialContext,
        prior_history: &[DialogueTurn],
    ) -> GeminiRequest {
        let mut contents: Vec<GeminiContent> = prior_history
            .iter()
            .map(|turn| GeminiContent::turn(turn.role, turn.text.clone()))
            .collect();
        contents.push(GeminiContent::turn(
            fundsight_types::chat::TurnRole::User,
            query,
        ));

        GeminiRequest {
            system_instruction: Some(GeminiContent::system(AdvicePromptBuilder::build(context))),
            contents,
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        }
    }
}

// GeminiAdvisor intentionally does NOT derive Debug to prevent
// accidental exposure of internal state.

impl AdviceProvider for GeminiAdvisor {
    fn name(&self) -> &str {
        PROVIDER_GEMINI
    }

    async fn request(
        &self,
        query: &str,
        context: &FinancialContext,
        prior_history: &[DialogueTurn],
    ) -> Result<String, AdviceError> {
        let body = self.to_gemini_request(query, context, prior_history);
        let url = self.url();

        let span = info_span!(
            "gen_ai.generate_content",
            gen_ai.operation.name = OP_CHAT,
            gen_ai.provider.name = PROVIDER_GEMINI,
            gen_ai.request.model = %self.model,
            gen_ai.request.max_tokens = self.max_output_tokens,
        );

        async {
            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", self.api_key.expose_secret())
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await
                .map_err(|e| AdviceError::Provider {
                    message: format!("HTTP request failed: {e}"),
                })?;

            let status = response.status();
            if !status.is_success() {
                let error_body = response.text().await.unwrap_or_default();
                return Err(match status.as_u16() {
                    400 => AdviceError::InvalidRequest(error_body),
                    401 | 403 => AdviceError::AuthenticationFailed,
                    429 => AdviceError::RateLimited,
                    _ => AdviceError::Provider {
                        message: format!("HTTP {status}: {error_body}"),
                    },
                });
            }

            let gemini_resp: GeminiResponse = response.json().await.map_err(|e| {
                AdviceError::Deserialization(format!("failed to parse response: {e}"))
            })?;

            let advice = gemini_resp.advice_text();
            if advice.trim().is_empty() {
                return Err(AdviceError::EmptyResponse);
            }

            Ok(advice)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_advisor() -> GeminiAdvisor {
        GeminiAdvisor::new(
            SecretString::from("test-key-not-real"),
            &AdvisorConfig::default(),
        )
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(make_advisor().name(), "gemini");
    }

    #[test]
    fn test_url_includes_model() {
        let advisor = make_advisor();
        assert_eq!(
            advisor.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_base_url_override() {
        let advisor = make_advisor().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            advisor.url(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_to_gemini_request_appends_query_last() {
        let advisor = make_advisor();
        let history = vec![
            DialogueTurn::assistant("Welcome."),
            DialogueTurn::user("Hi"),
            DialogueTurn::assistant("How can I help?"),
        ];
        let request = advisor.to_gemini_request(
            "Which budget category am I most likely to exceed?",
            &FinancialContext::default(),
            &history,
        );

        assert_eq!(request.contents.len(), 4);
        assert_eq!(request.contents[0].role.as_deref(), Some("model"));
        assert_eq!(request.contents[1].role.as_deref(), Some("user"));
        let last = request.contents.last().unwrap();
        assert_eq!(last.role.as_deref(), Some("user"));
        assert_eq!(
            last.parts[0].text,
            "Which budget category am I most likely to exceed?"
        );
    }

    #[test]
    fn test_to_gemini_request_has_system_instruction() {
        let advisor = make_advisor();
        let request =
            advisor.to_gemini_request("q", &FinancialContext::default(), &[]);
        let system = request.system_instruction.unwrap();
        assert!(system.role.is_none());
        assert!(system.parts[0].text.contains("<role>"));
    }

    #[test]
    fn test_generation_config_from_advisor_config() {
        let config = AdvisorConfig {
            temperature: 0.3,
            max_output_tokens: 512,
            ..AdvisorConfig::default()
        };
        let advisor = GeminiAdvisor::new(SecretString::from("k"), &config);
        let request = advisor.to_gemini_request("q", &FinancialContext::default(), &[]);
        assert!((request.generation_config.temperature - 0.3).abs() < f64::EPSILON);
        assert_eq!(request.generation_config.max_output_tokens, 512);
    }

    #[test]
    fn test_wire_roles_in_history_mapping() {
        let advisor = make_advisor();
        let history = vec![DialogueTurn::user("a"), DialogueTurn::assistant("b")];
        let request = advisor.to_gemini_request("c", &FinancialContext::default(), &history);
        let roles: Vec<Option<&str>> = request
            .contents
            .iter()
            .map(|c| c.role.as_deref())
            .collect();
        assert_eq!(roles, [Some("user"), Some("model"), Some("user")]);
    }
}
