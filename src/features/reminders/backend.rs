//! # Reminder Backend
//!
//! The seam between the reminder subsystem and the assistant backend.
//! [`ReminderBackend`] covers the three wire operations; the real
//! implementation speaks HTTP via reqwest, and tests substitute
//! recording or failing fakes.
//!
//! Callers decide what a failed `Result` means: the poller swallows
//! fetch failures and retries next tick, AckClient discards ack
//! failures outright, and the dashboard propagates because it is a
//! user-initiated one-shot.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

use crate::features::reminders::protocol::{
    parse_due_payload, AckRequest, Reminder, ReminderRecord,
};

/// Async access to the backend's reminder endpoints
#[async_trait]
pub trait ReminderBackend: Send + Sync {
    /// Fetch the currently-due reminders. A malformed payload is not
    /// an error: it decodes to an empty batch.
    async fn fetch_due(&self) -> Result<Vec<Reminder>>;

    /// Send a delivery/resolution acknowledgement. The returned
    /// `Result` only reports transport success; the response body is
    /// ignored. Callers are permitted to discard it.
    async fn ack(&self, request: AckRequest) -> Result<()>;

    /// Fetch the full reminder list for the dashboard view.
    async fn list_all(&self) -> Result<Vec<ReminderRecord>>;
}

/// HTTP implementation of [`ReminderBackend`]
pub struct HttpReminderBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReminderBackend {
    /// Build a backend client for the given base URL (no trailing
    /// slash) with the given per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(HttpReminderBackend {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ReminderBackend for HttpReminderBackend {
    async fn fetch_due(&self) -> Result<Vec<Reminder>> {
        let payload: serde_json::Value = self
            .client
            .get(self.url("/reminders-due"))
            .send()
            .await
            .context("Due-reminders request failed")?
            .error_for_status()
            .context("Due-reminders request was rejected")?
            .json()
            .await
            .context("Due-reminders response was not JSON")?;

        Ok(parse_due_payload(payload))
    }

    async fn ack(&self, request: AckRequest) -> Result<()> {
        self.client
            .post(self.url("/reminders-ack"))
            .json(&request)
            .send()
            .await
            .context("Reminder ack request failed")?
            .error_for_status()
            .context("Reminder ack was rejected")?;

        // Response body is {"ok": true} on current backends; ignored.
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ReminderRecord>> {
        let payload: serde_json::Value = self
            .client
            .get(self.url("/dashboard"))
            .send()
            .await
            .context("Dashboard request failed")?
            .error_for_status()
            .context("Dashboard request was rejected")?
            .json()
            .await
            .context("Dashboard response was not JSON")?;

        let serde_json::Value::Array(items) = payload else {
            debug!("Dashboard payload was not an array; treating as empty");
            return Ok(Vec::new());
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<ReminderRecord>(item) {
                Ok(record) => records.push(record),
                Err(e) => debug!("Skipping undecodable dashboard record: {e}"),
            }
        }
        Ok(records)
    }
}
