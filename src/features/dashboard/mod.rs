//! # Dashboard Feature
//!
//! On-demand listing of every stored reminder (pending and done),
//! distinct from the due-poll: this is a user-initiated one-shot, so
//! unlike the poll loop its errors propagate to the caller.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//! - **Toggleable**: true

use anyhow::Result;
use std::sync::Arc;

use crate::features::reminders::backend::ReminderBackend;
use crate::features::reminders::notifications::display_text;
use crate::features::reminders::protocol::ReminderRecord;

/// Shown when the backend has no reminders stored
pub const EMPTY_OVERVIEW: &str = "No reminders yet";

/// Fetch the full reminder list and format it for display.
pub async fn fetch_overview(backend: &Arc<dyn ReminderBackend>) -> Result<String> {
    let records = backend.list_all().await?;
    Ok(format_overview(&records))
}

/// One line per reminder: a done/pending marker and the task text.
pub fn format_overview(records: &[ReminderRecord]) -> String {
    if records.is_empty() {
        return EMPTY_OVERVIEW.to_string();
    }

    records
        .iter()
        .map(|record| {
            let marker = if record.delivered { "✅" } else { "⏳" };
            format!("{marker} {}", display_text(&record.task))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
