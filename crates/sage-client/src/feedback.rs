//! Per-reply feedback tracking.
//!
//! Feedback state lives in the injected key-value store keyed by the reply
//! text, so a mark set before a page reload is still there afterwards. The
//! backend only hears about feedback on explicit submission.

use sage_core::error::{Result, SageError};
use sage_core::feedback::{FeedbackMark, FeedbackState};
use sage_core::gateway::{BackendGateway, FeedbackSubmission};
use sage_core::kv::KeyValueStore;
use std::sync::Arc;
use tracing::warn;

const FEEDBACK_KEY_PREFIX: &str = "feedback:";

fn feedback_key(reply_text: &str) -> String {
    format!("{FEEDBACK_KEY_PREFIX}{reply_text}")
}

/// Tracks the (mark, elaboration) pair for bot replies.
pub struct FeedbackTracker {
    gateway: Arc<dyn BackendGateway>,
    store: Arc<dyn KeyValueStore>,
    user_id: String,
}

impl FeedbackTracker {
    pub fn new(
        gateway: Arc<dyn BackendGateway>,
        store: Arc<dyn KeyValueStore>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            store,
            user_id: user_id.into(),
        }
    }

    /// The stored feedback state for a reply, defaulting to (none, "").
    pub fn state_for(&self, reply_text: &str) -> FeedbackState {
        self.store
            .get(&feedback_key(reply_text))
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Applies a thumbs click: reselecting the active mark clears it,
    /// selecting the other replaces it. The new state is written back to the
    /// local store immediately and returned.
    pub fn toggle_mark(&self, reply_text: &str, clicked: FeedbackMark) -> FeedbackState {
        let mut state = self.state_for(reply_text);
        state.mark = state.mark.toggle(clicked);
        self.persist(reply_text, &state);
        state
    }

    /// Updates the elaboration text alongside the current mark.
    pub fn set_elaboration(&self, reply_text: &str, elaboration: &str) -> FeedbackState {
        let mut state = self.state_for(reply_text);
        state.elaboration = elaboration.to_string();
        self.persist(reply_text, &state);
        state
    }

    /// Flushes the stored feedback for a reply to the backend.
    ///
    /// Requires a mark to be set (the submit control is inert otherwise).
    /// On success the elaboration input is cleared; the mark stays.
    pub async fn submit(&self, reply_text: &str, user_query: &str) -> Result<()> {
        let state = self.state_for(reply_text);
        if !state.mark.is_set() {
            return Err(SageError::validation("no feedback mark is set"));
        }

        self.gateway
            .submit_feedback(FeedbackSubmission {
                text: reply_text.to_string(),
                mark: state.mark,
                elaboration: state.elaboration.clone(),
                user_query: user_query.to_string(),
                user_id: self.user_id.clone(),
            })
            .await?;

        let cleared = FeedbackState {
            mark: state.mark,
            elaboration: String::new(),
        };
        self.persist(reply_text, &cleared);
        Ok(())
    }

    fn persist(&self, reply_text: &str, state: &FeedbackState) {
        let raw = match serde_json::to_string(state) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to serialize feedback state: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(&feedback_key(reply_text), &raw) {
            warn!("failed to persist feedback state: {err}");
        }
    }
}
