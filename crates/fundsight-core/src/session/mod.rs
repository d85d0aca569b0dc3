//! Advisor session: the single authority for initiating and completing
//! advice requests.

mod controller;
mod store;

pub use controller::{AdvisorSession, DEFAULT_GREETING, SessionView};
pub use store::SnapshotStore;
