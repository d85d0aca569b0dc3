//! AdviceProvider trait definition.
//!
//! This is the single network-shaped boundary of the advisor core: one
//! asynchronous call taking the user's query, the financial grounding
//! data, and the prior dialogue, returning natural-language advice text.

use fundsight_types::chat::DialogueTurn;
use fundsight_types::error::AdviceError;
use fundsight_types::finance::FinancialContext;

/// User-facing text appended when the advice service fails.
///
/// The session controller never surfaces a raw provider fault; every
/// failure degrades to this message while the turn still completes.
pub const FALLBACK_ADVICE: &str =
    "I couldn't retrieve advice just now. Please try again in a moment.";

/// Trait for advice service backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in fundsight-infra (e.g., `GeminiAdvisor`).
///
/// `prior_history` is the dialogue as it stood before the current query;
/// it never contains the user turn created for this same call.
pub trait AdviceProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Request advice for `query`, grounded in the financial context and
    /// the prior dialogue. Expected-bounded latency; any timeout is the
    /// implementation's responsibility, not the session controller's.
    fn request(
        &self,
        query: &str,
        context: &FinancialContext,
        prior_history: &[DialogueTurn],
    ) -> impl std::future::Future<Output = Result<String, AdviceError>> + Send;
}
