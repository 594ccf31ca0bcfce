//! # Reminder Wire Protocol
//!
//! JSON shapes exchanged with the assistant backend's reminder
//! endpoints:
//! - `GET /reminders-due` -> array of due reminders
//! - `POST /reminders-ack` -> `{id, snooze_minutes?}`, body of the
//!   response is ignored
//! - `GET /dashboard` -> array of full reminder records
//!
//! The due feed is decoded tolerantly: a non-array payload means "no
//! reminders due", and array elements that fail to decode are skipped.
//! The poll loop must never die on a malformed response.

use log::debug;
use serde::{Deserialize, Serialize};

/// A due reminder as delivered by the backend.
///
/// `id` is opaque and stable; it is the key for delivery acks and for
/// the notification card while mounted. `task` is the raw text the
/// user originally typed and is never mutated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub task: String,
}

/// A full reminder record from the dashboard listing.
///
/// Superset of [`Reminder`]: the backend also stores the due timestamp
/// and the delivered flag, which the due feed omits.
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderRecord {
    pub id: String,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub due_ts: Option<String>,
    #[serde(default)]
    pub delivered: bool,
}

/// Acknowledgement body for `POST /reminders-ack`.
///
/// Absence of `snooze_minutes` marks the reminder delivered/done;
/// presence reschedules it that many minutes out.
#[derive(Debug, Clone, Serialize)]
pub struct AckRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snooze_minutes: Option<u32>,
}

impl AckRequest {
    /// Delivery or "done" acknowledgement (no snooze offset)
    pub fn delivered(id: &str) -> Self {
        AckRequest {
            id: id.to_string(),
            snooze_minutes: None,
        }
    }

    /// Snooze acknowledgement with an offset in minutes
    pub fn snoozed(id: &str, minutes: u32) -> Self {
        AckRequest {
            id: id.to_string(),
            snooze_minutes: Some(minutes),
        }
    }
}

/// Decode a due-reminders payload, treating anything malformed as
/// "nothing due".
pub fn parse_due_payload(payload: serde_json::Value) -> Vec<Reminder> {
    let serde_json::Value::Array(items) = payload else {
        debug!("Due-reminders payload was not an array; treating as empty");
        return Vec::new();
    };

    let mut due = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<Reminder>(item) {
            Ok(reminder) => due.push(reminder),
            Err(e) => debug!("Skipping undecodable due reminder: {e}"),
        }
    }
    due
}
