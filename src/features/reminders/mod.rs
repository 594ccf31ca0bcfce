//! # Reminders Feature
//!
//! Client side of the backend's reminder scheduler: a fixed-interval
//! poll loop that discovers due reminders, mounts dismissible
//! notification cards, and acknowledges delivery and resolution over
//! HTTP. Everything here is best-effort by design; no failure in this
//! feature may reach the chat flow.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//! - **Toggleable**: true

pub mod ack;
pub mod backend;
pub mod notifications;
pub mod poller;
pub mod protocol;

#[cfg(test)]
pub mod testing;

pub use ack::AckClient;
pub use backend::{HttpReminderBackend, ReminderBackend};
pub use notifications::{
    display_text, CardEvent, NotificationCard, NotificationHost, Resolution, SNOOZE_MINUTES,
};
pub use poller::{CycleOutcome, PollerHandle, ReminderPoller, POLL_INTERVAL};
pub use protocol::{AckRequest, Reminder, ReminderRecord};
