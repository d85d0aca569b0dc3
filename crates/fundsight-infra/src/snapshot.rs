//! JSON-file implementation of the session snapshot store.
//!
//! Persists the single [`SessionSnapshot`] as `session.json` in the
//! data directory. Writes go through a temp file plus rename so a crash
//! mid-write never leaves a truncated snapshot behind.

use std::path::{Path, PathBuf};

use fundsight_core::session::SnapshotStore;
use fundsight_types::chat::SessionSnapshot;
use fundsight_types::error::SnapshotError;

/// Snapshot store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a store writing `session.json` under `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session.json"),
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    async fn load(&self) -> Result<Option<SessionSnapshot>, SnapshotError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SnapshotError::Io(err.to_string())),
        };

        let snapshot = serde_json::from_str(&content)
            .map_err(|err| SnapshotError::Serialization(err.to_string()))?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|err| SnapshotError::Serialization(err.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|err| SnapshotError::Io(err.to_string()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|err| SnapshotError::Io(err.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundsight_types::chat::{DialogueTurn, TurnRole};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_missing_file_returns_none() {
        let tmp = TempDir::new().unwrap();
        let store = JsonSnapshotStore::new(tmp.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let store = JsonSnapshotStore::new(tmp.path());

        let snapshot = SessionSnapshot::new(vec![
            DialogueTurn::assistant("Welcome back."),
            DialogueTurn::user("Hi"),
        ]);
        store.save(&snapshot).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.turns.len(), 2);
        assert_eq!(loaded.turns[0].role, TurnRole::Assistant);
        assert_eq!(loaded.turns[1].text, "Hi");
    }

    #[tokio::test]
    async fn test_save_replaces_previous_snapshot() {
        let tmp = TempDir::new().unwrap();
        let store = JsonSnapshotStore::new(tmp.path());

        store
            .save(&SessionSnapshot::new(vec![DialogueTurn::user("old")]))
            .await
            .unwrap();
        store
            .save(&SessionSnapshot::new(vec![
                DialogueTurn::user("new"),
                DialogueTurn::assistant("reply"),
            ]))
            .await
            .unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.turns.len(), 2);
        assert_eq!(loaded.turns[0].text, "new");
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_serialization_error() {
        let tmp = TempDir::new().unwrap();
        let store = JsonSnapshotStore::new(tmp.path());
        tokio::fs::write(store.path(), "not json {{")
            .await
            .unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, SnapshotError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let tmp = TempDir::new().unwrap();
        let store = JsonSnapshotStore::new(tmp.path());
        store
            .save(&SessionSnapshot::new(vec![DialogueTurn::user("x")]))
            .await
            .unwrap();

        let leftover = tmp.path().join("session.json.tmp");
        assert!(!leftover.exists());
    }
}
