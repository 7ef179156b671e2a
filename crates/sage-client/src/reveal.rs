//! Word-by-word reveal of freshly generated replies.
//!
//! A fully received reply is disclosed one word at a time on a randomized
//! cadence, the way the web client animates new bot messages. Each entry
//! being revealed owns its own engine (and therefore its own timer chain);
//! several entries may reveal concurrently with no ordering between their
//! completions, but within one entry tokens always append in source order.

use rand::Rng;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{sleep, Duration};

/// Default per-token delay range, in milliseconds.
pub const DEFAULT_DELAY_MS: RangeInclusive<u64> = 20..=100;

/// Tagged reveal state for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealState {
    /// No reveal has been started.
    Idle,
    /// A reveal is in flight: `position` tokens of `tokens` are visible.
    Revealing { tokens: Vec<String>, position: usize },
    /// The last token has been appended (or the text was shown at once).
    Done,
}

/// What the rendering layer observes while a reveal runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    /// The visible prefix grew.
    Progress { visible: String },
    /// The reveal finished. Fired exactly once per run; this is the signal
    /// that triggers the supplementary-resource fetch and makes feedback and
    /// read-aloud controls eligible.
    Completed { full_text: String },
}

struct Inner {
    state: RevealState,
    visible: String,
}

/// Drives the incremental disclosure of one entry's text.
///
/// `begin` starts (or restarts) a reveal and hands back the event stream for
/// that run. Starting a new reveal while one is in flight discards the
/// in-flight run wholesale: its scheduled appends stop and its event stream
/// goes quiet. There is no pause/resume.
pub struct RevealEngine {
    delay_ms: RangeInclusive<u64>,
    inner: Arc<Mutex<Inner>>,
    generation: Arc<AtomicU64>,
}

impl RevealEngine {
    /// Creates an engine with the default 20-100 ms per-token cadence.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY_MS)
    }

    /// Creates an engine with a custom per-token delay range (milliseconds).
    pub fn with_delay(delay_ms: RangeInclusive<u64>) -> Self {
        Self {
            delay_ms,
            inner: Arc::new(Mutex::new(Inner {
                state: RevealState::Idle,
                visible: String::new(),
            })),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The currently visible text.
    pub fn visible(&self) -> String {
        self.inner.lock().unwrap().visible.clone()
    }

    /// The current reveal state.
    pub fn state(&self) -> RevealState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Whether the current run has finished.
    pub fn is_done(&self) -> bool {
        matches!(self.inner.lock().unwrap().state, RevealState::Done)
    }

    /// Starts revealing `text`, discarding any run in flight.
    ///
    /// With `animate` the text is split on whitespace and one token (plus a
    /// separator) appears per tick, each tick scheduled after a uniformly
    /// random delay from the configured range. Without `animate` the full
    /// text becomes visible immediately and the completion event is already
    /// queued when this returns — same tick, no timer.
    pub fn begin(&self, text: &str, animate: bool) -> UnboundedReceiver<RevealEvent> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut guard = self.inner.lock().unwrap();
        // Bumping the generation under the lock is what discards an
        // in-flight run: its next wake sees a stale generation and stops
        // before touching the new state.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        guard.visible.clear();

        let tokens: Vec<String> = text.split_whitespace().map(String::from).collect();

        if !animate {
            guard.visible = text.to_string();
            guard.state = RevealState::Done;
            drop(guard);
            let _ = tx.send(RevealEvent::Progress {
                visible: text.to_string(),
            });
            let _ = tx.send(RevealEvent::Completed {
                full_text: text.to_string(),
            });
            return rx;
        }

        if tokens.is_empty() {
            guard.state = RevealState::Done;
            drop(guard);
            let _ = tx.send(RevealEvent::Completed {
                full_text: text.to_string(),
            });
            return rx;
        }

        guard.state = RevealState::Revealing {
            tokens,
            position: 0,
        };
        drop(guard);

        self.spawn_ticker(generation, text.to_string(), tx);
        rx
    }

    fn spawn_ticker(&self, generation: u64, full_text: String, tx: UnboundedSender<RevealEvent>) {
        let inner = Arc::clone(&self.inner);
        let current = Arc::clone(&self.generation);
        let delay_ms = self.delay_ms.clone();

        tokio::spawn(async move {
            loop {
                let wait = rand::thread_rng().gen_range(delay_ms.clone());
                sleep(Duration::from_millis(wait)).await;

                let mut guard = inner.lock().unwrap();
                if current.load(Ordering::SeqCst) != generation {
                    // Superseded by a restart; discard without touching state.
                    return;
                }
                let inner_mut = &mut *guard;
                let RevealState::Revealing { tokens, position } = &mut inner_mut.state else {
                    return;
                };

                inner_mut.visible.push_str(&tokens[*position]);
                inner_mut.visible.push(' ');
                *position += 1;
                let finished = *position == tokens.len();
                let visible = inner_mut.visible.clone();
                if finished {
                    inner_mut.state = RevealState::Done;
                }
                drop(guard);

                let _ = tx.send(RevealEvent::Progress { visible });
                if finished {
                    let _ = tx.send(RevealEvent::Completed { full_text });
                    return;
                }
            }
        });
    }
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drains events until (and including) the completion event.
    async fn drain(rx: &mut UnboundedReceiver<RevealEvent>) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            let done = matches!(event, RevealEvent::Completed { .. });
            events.push(event);
            if done {
                break;
            }
        }
        events
    }

    #[tokio::test]
    async fn test_prefix_sequence_is_exact() {
        let engine = RevealEngine::with_delay(0..=0);
        let mut rx = engine.begin("a b c", true);
        let events = drain(&mut rx).await;

        assert_eq!(
            events,
            vec![
                RevealEvent::Progress {
                    visible: "a ".to_string()
                },
                RevealEvent::Progress {
                    visible: "a b ".to_string()
                },
                RevealEvent::Progress {
                    visible: "a b c ".to_string()
                },
                RevealEvent::Completed {
                    full_text: "a b c".to_string()
                },
            ]
        );
        assert!(engine.is_done());
        // Completion fired exactly once: nothing further arrives.
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_pass_through_is_synchronous() {
        let engine = RevealEngine::with_delay(0..=0);
        let mut rx = engine.begin("hello there", false);

        // Both events were queued before begin() returned; no await needed.
        assert_eq!(
            rx.try_recv().unwrap(),
            RevealEvent::Progress {
                visible: "hello there".to_string()
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            RevealEvent::Completed {
                full_text: "hello there".to_string()
            }
        );
        assert_eq!(engine.visible(), "hello there");
    }

    #[tokio::test]
    async fn test_restart_discards_old_text() {
        let engine = RevealEngine::with_delay(40..=60);
        let _old = engine.begin("alpha beta gamma", true);

        // Restart before the first token of the old run can land.
        let mut rx = engine.begin("x y", true);
        let events = drain(&mut rx).await;

        assert_eq!(
            events,
            vec![
                RevealEvent::Progress {
                    visible: "x ".to_string()
                },
                RevealEvent::Progress {
                    visible: "x y ".to_string()
                },
                RevealEvent::Completed {
                    full_text: "x y".to_string()
                },
            ]
        );
        // No token of the discarded text survives the restart.
        assert_eq!(engine.visible(), "x y ");
    }

    #[tokio::test]
    async fn test_empty_text_completes_immediately() {
        let engine = RevealEngine::with_delay(0..=0);
        let mut rx = engine.begin("", true);
        assert_eq!(
            rx.try_recv().unwrap(),
            RevealEvent::Completed {
                full_text: String::new()
            }
        );
        assert!(engine.is_done());
    }

    #[tokio::test]
    async fn test_entries_reveal_independently() {
        let first = RevealEngine::with_delay(0..=0);
        let second = RevealEngine::with_delay(0..=0);

        let mut rx_first = first.begin("one two", true);
        let mut rx_second = second.begin("three", true);

        let first_events = drain(&mut rx_first).await;
        let second_events = drain(&mut rx_second).await;

        assert_eq!(first_events.len(), 3); // two tokens + completion
        assert_eq!(second_events.len(), 2); // one token + completion
        assert_eq!(first.visible(), "one two ");
        assert_eq!(second.visible(), "three ");
    }
}
