// Core layer - configuration and shared plumbing
pub mod core;

// Features layer - reminder delivery and dashboard
pub mod features;

// Re-export core config for convenience
pub use crate::core::Config;

// Re-export feature items for convenience
pub use features::{
    // Reminders
    AckClient, HttpReminderBackend, NotificationHost, ReminderBackend, ReminderPoller,
};
