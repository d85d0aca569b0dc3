//! Observability setup for FundSight.
//!
//! The hosting product calls [`tracing_setup::init_tracing`] once at
//! startup; the advisor crates only emit `tracing` events and spans.

pub mod genai_attrs;
pub mod tracing_setup;
