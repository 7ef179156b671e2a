//! Mentor notification model.

use serde::{Deserialize, Serialize};

/// A notification that a mentor has answered one of the student's escalated
/// questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Opaque notification identifier (the backend owns the scheme).
    pub id: String,
    /// The question that was escalated.
    pub query: String,
    /// The mentor's answer.
    pub mentor_response: String,
    /// Which mentor answered.
    pub mentor_id: String,
    /// Whether the student has opened this notification.
    pub viewed: bool,
}

impl Notification {
    /// Whether this notification still counts toward the badge.
    pub fn is_unread(&self) -> bool {
        !self.viewed
    }
}
