//! # Acknowledgement Client
//!
//! Fire-and-forget delivery/resolution acks. Every failure is caught
//! and dropped here: a lost ack at worst makes the reminder reappear
//! on a later poll, which is recoverable, while surfacing the error
//! would interrupt the chat flow for nothing the user can act on.

use log::debug;
use std::sync::Arc;

use crate::features::reminders::backend::ReminderBackend;
use crate::features::reminders::protocol::AckRequest;

/// Best-effort acknowledgement sender. Cheap to clone; the poller and
/// the notification host share one.
#[derive(Clone)]
pub struct AckClient {
    backend: Arc<dyn ReminderBackend>,
}

impl AckClient {
    pub fn new(backend: Arc<dyn ReminderBackend>) -> Self {
        AckClient { backend }
    }

    /// Confirm that a reminder was shown to the user. This marks
    /// delivery, not resolution; the card stays up until the user
    /// dismisses it.
    pub async fn ack_delivered(&self, id: &str) {
        self.send(AckRequest::delivered(id)).await;
    }

    /// Report user resolution: `Some(minutes)` snoozes, `None` marks
    /// the reminder done.
    pub async fn ack_resolved(&self, id: &str, snooze_minutes: Option<u32>) {
        let request = match snooze_minutes {
            Some(minutes) => AckRequest::snoozed(id, minutes),
            None => AckRequest::delivered(id),
        };
        self.send(request).await;
    }

    async fn send(&self, request: AckRequest) {
        let id = request.id.clone();
        if let Err(e) = self.backend.ack(request).await {
            debug!("Dropping failed reminder ack for {id}: {e:#}");
        }
    }
}
