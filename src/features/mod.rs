//! # Features Layer
//!
//! Feature modules of the echoline client. Each module carries its own
//! version/changelog header.

pub mod dashboard;
pub mod reminders;

pub use reminders::{
    AckClient, HttpReminderBackend, NotificationHost, ReminderBackend, ReminderPoller,
};

/// Client version, embedded at compile time
pub fn get_client_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
