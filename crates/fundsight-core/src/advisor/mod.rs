//! Advice service boundary.

mod provider;

pub use provider::{AdviceProvider, FALLBACK_ADVICE};
