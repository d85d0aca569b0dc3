//! Session controller orchestrating the advice request lifecycle.
//!
//! `AdvisorSession` owns the transcript and the one-in-flight `pending`
//! flag. A send appends the user turn, invokes the advice provider
//! exactly once, and appends the response (or the fallback text) as the
//! assistant turn. Overlapping sends and empty queries are dropped
//! silently; that is throttling, not failure.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{Instrument, debug, info_span, warn};

use fundsight_types::chat::{DialogueTurn, SessionSnapshot};
use fundsight_types::config::AdvisorConfig;
use fundsight_types::finance::FinancialContext;
use fundsight_types::suggestion::Suggestion;

use crate::advisor::{AdviceProvider, FALLBACK_ADVICE};
use crate::transcript::Transcript;

/// Assistant greeting seeded into every fresh session.
pub const DEFAULT_GREETING: &str = "Namaste! I'm FundSight, your personal \
    finance assistant. I've looked over your recent activity and noticed \
    your dining-out spending crept up this week. How can I help you \
    optimize your finances today?";

/// Read-only view of the session published after every state change.
///
/// The presentation shell renders from this; it never mutates session
/// state directly.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub turns: Vec<DialogueTurn>,
    pub pending: bool,
}

struct SessionState {
    transcript: Transcript,
    pending: bool,
}

/// One continuous advisor conversation.
///
/// State is mutated only under a short-lived lock that is never held
/// across an await; the `pending` flag is the sole logical
/// synchronization primitive. It is set synchronously before the
/// provider call is issued and cleared synchronously after it settles,
/// so at most one provider invocation is outstanding at any time and
/// assistant turns append in submission order.
pub struct AdvisorSession<P: AdviceProvider> {
    provider: P,
    context: FinancialContext,
    max_history_turns: usize,
    state: Mutex<SessionState>,
    view_tx: watch::Sender<SessionView>,
}

impl<P: AdviceProvider> AdvisorSession<P> {
    /// Create a session seeded with the default assistant greeting.
    pub fn new(provider: P, context: FinancialContext, config: &AdvisorConfig) -> Self {
        Self::with_transcript(provider, context, config, Transcript::seeded(DEFAULT_GREETING))
    }

    /// Rebuild a session from a previously saved snapshot.
    ///
    /// This is the load-at-start persistence hook: the saved turns become
    /// the initial transcript, and the append-only invariant holds from
    /// here on.
    pub fn from_snapshot(
        provider: P,
        context: FinancialContext,
        config: &AdvisorConfig,
        snapshot: SessionSnapshot,
    ) -> Self {
        Self::with_transcript(
            provider,
            context,
            config,
            Transcript::from_turns(snapshot.turns),
        )
    }

    /// Create a session over an explicit starting transcript.
    pub fn with_transcript(
        provider: P,
        context: FinancialContext,
        config: &AdvisorConfig,
        transcript: Transcript,
    ) -> Self {
        let view = SessionView {
            turns: transcript.snapshot(),
            pending: false,
        };
        let (view_tx, _) = watch::channel(view);
        Self {
            provider,
            context,
            max_history_turns: config.max_history_turns,
            state: Mutex::new(SessionState {
                transcript,
                pending: false,
            }),
            view_tx,
        }
    }

    /// Submit a query to the advisor.
    ///
    /// A no-op when the trimmed query is empty or when a request is
    /// already in flight. Otherwise the transcript grows by exactly two
    /// turns: the user turn immediately, the assistant turn when the
    /// provider settles. Provider faults are absorbed here as the
    /// fallback advice text; no error reaches the caller.
    pub async fn send(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            debug!("ignoring empty query");
            return;
        }

        // Admission and the user-turn append are atomic under the state
        // lock, which is released before the provider call.
        let prior_history = {
            let mut state = self.lock_state();
            if state.pending {
                debug!("advice request already in flight; dropping query");
                return;
            }
            // Capture the context window before appending the new user
            // turn: the provider must not see this query duplicated
            // inside the history argument.
            let prior = state.transcript.recent(self.max_history_turns).to_vec();
            state.transcript.push(DialogueTurn::user(query));
            state.pending = true;
            self.publish(&state);
            prior
        };

        let span = info_span!(
            "advice.request",
            provider = self.provider.name(),
            history_turns = prior_history.len()
        );
        let advice = match self
            .provider
            .request(query, &self.context, &prior_history)
            .instrument(span)
            .await
        {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    error = %err,
                    "advice request failed; answering with fallback"
                );
                FALLBACK_ADVICE.to_string()
            }
        };

        let mut state = self.lock_state();
        state.transcript.push(DialogueTurn::assistant(advice));
        state.pending = false;
        self.publish(&state);
    }

    /// Submit a suggestion from the catalog.
    ///
    /// Exactly equivalent to typing the suggestion's query and
    /// submitting it, including the one-in-flight throttle.
    pub async fn send_suggestion(&self, suggestion: &Suggestion) {
        self.send(&suggestion.query).await;
    }

    /// The current ordered history.
    pub fn history(&self) -> Vec<DialogueTurn> {
        self.lock_state().transcript.snapshot()
    }

    /// Whether a request is currently in flight.
    pub fn pending(&self) -> bool {
        self.lock_state().pending
    }

    /// Subscribe to `(history, pending)` updates.
    ///
    /// The controller publishes a new [`SessionView`] after every
    /// mutation; any reactive rendering strategy can sit on this.
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view_tx.subscribe()
    }

    /// Capture the current history for saving.
    ///
    /// This is the save-on-change persistence hook, paired with
    /// [`AdvisorSession::from_snapshot`].
    pub fn to_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(self.history())
    }

    fn publish(&self, state: &SessionState) {
        self.view_tx.send_replace(SessionView {
            turns: state.transcript.snapshot(),
            pending: state.pending,
        });
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        // Nothing panics while the lock is held, so recover from
        // poisoning instead of propagating it.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
