//! Dialogue turn and session snapshot types for FundSight.
//!
//! These types model the advisor conversation: individual turns tagged
//! with a speaker role, and the snapshot shape used for session
//! persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Speaker role for a dialogue turn.
///
/// The advisor wire protocol names the assistant side "model"; that
/// mapping lives in the infra adapter, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// One message in the advisor dialogue.
///
/// Turns are immutable once appended to a transcript; the transcript is
/// strictly append-only for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueTurn {
    pub id: Uuid,
    pub role: TurnRole,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl DialogueTurn {
    /// Create a user turn with the given text.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TurnRole::User, text)
    }

    /// Create an assistant turn with the given text.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, text)
    }

    fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Persisted form of one advisor session.
///
/// The only artifact the session ever saves: the ordered turn history
/// plus a save timestamp. Loaded at session start, written on change by
/// an external collaborator (see `SnapshotStore` in fundsight-core).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub turns: Vec<DialogueTurn>,
    pub saved_at: DateTime<Utc>,
}

impl SessionSnapshot {
    /// Capture a snapshot of the given turns, stamped now.
    pub fn new(turns: Vec<DialogueTurn>) -> Self {
        Self {
            turns,
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_roundtrip() {
        for role in [TurnRole::User, TurnRole::Assistant] {
            let s = role.to_string();
            let parsed: TurnRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_turn_role_serde() {
        let role = TurnRole::Assistant;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: TurnRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TurnRole::Assistant);
    }

    #[test]
    fn test_turn_role_rejects_unknown() {
        let err = "moderator".parse::<TurnRole>().unwrap_err();
        assert!(err.contains("moderator"));
    }

    #[test]
    fn test_dialogue_turn_constructors() {
        let user = DialogueTurn::user("How can I save more?");
        assert_eq!(user.role, TurnRole::User);
        assert_eq!(user.text, "How can I save more?");

        let assistant = DialogueTurn::assistant("Start with a budget.");
        assert_eq!(assistant.role, TurnRole::Assistant);
    }

    #[test]
    fn test_dialogue_turn_serde_roundtrip() {
        let turn = DialogueTurn::user("Hello");
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        let parsed: DialogueTurn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, turn.id);
        assert_eq!(parsed.text, "Hello");
    }

    #[test]
    fn test_session_snapshot_roundtrip() {
        let snapshot = SessionSnapshot::new(vec![
            DialogueTurn::assistant("Welcome back."),
            DialogueTurn::user("Hi"),
        ]);
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.turns.len(), 2);
        assert_eq!(parsed.turns[0].role, TurnRole::Assistant);
        assert_eq!(parsed.turns[1].role, TurnRole::User);
    }
}
