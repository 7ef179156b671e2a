//! Mentor notification bookkeeping.
//!
//! Keeps the in-memory notification list and the unread badge derived from
//! it. Marking a notification viewed is optimistic: the local list changes
//! first and the backend update is fire-and-forget, so a failed update never
//! takes the mark back.

use sage_core::gateway::BackendGateway;
use sage_core::notification::Notification;
use std::sync::Arc;
use tracing::warn;

/// The notification list and badge for one user.
pub struct NotificationCenter {
    gateway: Arc<dyn BackendGateway>,
    user_id: String,
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(gateway: Arc<dyn BackendGateway>, user_id: impl Into<String>) -> Self {
        Self {
            gateway,
            user_id: user_id.into(),
            notifications: Vec::new(),
        }
    }

    /// The notifications as of the last refresh.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Badge count: notifications not yet viewed.
    pub fn unread_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|notification| notification.is_unread())
            .count()
    }

    /// Reloads the list from the backend. A failed read leaves the previous
    /// list untouched (logged, not surfaced).
    pub async fn refresh(&mut self) {
        match self.gateway.list_notifications(&self.user_id).await {
            Ok(notifications) => self.notifications = notifications,
            Err(err) => warn!("failed to refresh notifications: {err}"),
        }
    }

    /// Marks a notification viewed: the in-memory entry flips immediately
    /// (decrementing the badge) and the backend update runs in the
    /// background. A failed update is logged and not rolled back.
    pub fn mark_viewed(&mut self, notification_id: &str) {
        let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|notification| notification.id == notification_id)
        else {
            return;
        };
        if notification.viewed {
            return;
        }
        notification.viewed = true;

        let gateway = Arc::clone(&self.gateway);
        let id = notification_id.to_string();
        tokio::spawn(async move {
            if let Err(err) = gateway.mark_notification_viewed(&id).await {
                warn!("failed to persist viewed state for notification {id}: {err}");
            }
        });
    }
}
