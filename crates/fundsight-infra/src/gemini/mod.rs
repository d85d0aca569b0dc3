//! Gemini-backed [`AdviceProvider`](fundsight_core::advisor::AdviceProvider)
//! implementation.

mod client;
mod prompt;
mod types;

pub use client::GeminiAdvisor;
pub use prompt::AdvicePromptBuilder;
