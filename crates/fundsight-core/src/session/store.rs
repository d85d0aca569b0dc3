//! SnapshotStore trait definition.
//!
//! Session persistence is an external collaborator with explicit
//! load-at-start / save-on-change hooks; the controller itself holds no
//! global mutable state. Implementations live in fundsight-infra
//! (e.g., `JsonSnapshotStore`).
//!
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use fundsight_types::chat::SessionSnapshot;
use fundsight_types::error::SnapshotError;

/// Store for the single persisted session snapshot.
pub trait SnapshotStore: Send + Sync {
    /// Load the saved snapshot, if one exists.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<SessionSnapshot>, SnapshotError>> + Send;

    /// Persist the snapshot, replacing any previous one.
    fn save(
        &self,
        snapshot: &SessionSnapshot,
    ) -> impl std::future::Future<Output = Result<(), SnapshotError>> + Send;
}
