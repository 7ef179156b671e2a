//! Application layer for the SAGE chat client.
//!
//! The stateful components the rendering layer drives: the transcript store
//! for the open session, the per-entry reveal engine, the feedback tracker,
//! and the notification center.

pub mod feedback;
pub mod notifications;
pub mod reveal;
pub mod transcript;

pub use feedback::FeedbackTracker;
pub use notifications::NotificationCenter;
pub use reveal::{RevealEngine, RevealEvent, RevealState};
pub use transcript::TranscriptStore;
