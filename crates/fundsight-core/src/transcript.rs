//! Append-only dialogue transcript.
//!
//! The transcript is the canonical, ordered record of the conversation.
//! Turns are immutable once pushed; there is no removal or edit API.
//! The transcript lives for the session and is never persisted except
//! through an explicit [`SessionSnapshot`](fundsight_types::chat::SessionSnapshot).

use fundsight_types::chat::DialogueTurn;

/// Ordered, append-only log of dialogue turns.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<DialogueTurn>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript seeded with one assistant greeting turn.
    pub fn seeded(greeting: &str) -> Self {
        Self {
            turns: vec![DialogueTurn::assistant(greeting)],
        }
    }

    /// Rebuild a transcript from previously saved turns.
    pub fn from_turns(turns: Vec<DialogueTurn>) -> Self {
        Self { turns }
    }

    /// Append a turn to the end. Never fails; O(1) amortized.
    pub fn push(&mut self, turn: DialogueTurn) {
        self.turns.push(turn);
    }

    /// All turns in chronological order.
    pub fn turns(&self) -> &[DialogueTurn] {
        &self.turns
    }

    /// An owned copy of the current history, reflecting every push made
    /// before this call.
    pub fn snapshot(&self) -> Vec<DialogueTurn> {
        self.turns.clone()
    }

    /// The most recent `max` turns, cut at a turn boundary.
    ///
    /// This is the bounded window forwarded to the advice service as
    /// conversational context; the transcript itself is never truncated.
    pub fn recent(&self, max: usize) -> &[DialogueTurn] {
        let start = self.turns.len().saturating_sub(max);
        &self.turns[start..]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundsight_types::chat::TurnRole;

    #[test]
    fn test_new_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }

    #[test]
    fn test_seeded_starts_with_assistant_greeting() {
        let transcript = Transcript::seeded("Welcome to FundSight.");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.turns()[0].role, TurnRole::Assistant);
        assert_eq!(transcript.turns()[0].text, "Welcome to FundSight.");
    }

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(DialogueTurn::user("first"));
        transcript.push(DialogueTurn::assistant("second"));
        transcript.push(DialogueTurn::user("third"));

        let texts: Vec<&str> = transcript.turns().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn test_snapshot_reflects_all_pushes() {
        let mut transcript = Transcript::new();
        transcript.push(DialogueTurn::user("a"));
        let before = transcript.snapshot();
        transcript.push(DialogueTurn::assistant("b"));
        let after = transcript.snapshot();

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_recent_returns_tail_window() {
        let mut transcript = Transcript::new();
        for i in 0..10 {
            transcript.push(DialogueTurn::user(format!("turn {i}")));
        }

        let window = transcript.recent(3);
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].text, "turn 7");
        assert_eq!(window[2].text, "turn 9");
    }

    #[test]
    fn test_recent_with_window_larger_than_history() {
        let mut transcript = Transcript::new();
        transcript.push(DialogueTurn::user("only"));
        assert_eq!(transcript.recent(40).len(), 1);
    }

    #[test]
    fn test_from_turns_roundtrip() {
        let turns = vec![DialogueTurn::assistant("hi"), DialogueTurn::user("hello")];
        let transcript = Transcript::from_turns(turns);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[1].role, TurnRole::User);
    }
}
