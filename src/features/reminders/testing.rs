//! Test doubles for [`ReminderBackend`]. Compiled for tests only.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::features::reminders::backend::ReminderBackend;
use crate::features::reminders::protocol::{AckRequest, Reminder, ReminderRecord};

/// Shorthand reminder constructor for tests
pub fn reminder(id: &str, task: &str) -> Reminder {
    Reminder {
        id: id.to_string(),
        task: task.to_string(),
    }
}

/// Backend fake that records every call.
///
/// `fetch_due` pops queued batches (empty once the queue drains), and
/// acks are appended to an inspectable log. Set `fail_acks` to make
/// every ack return an error while still recording the attempt.
#[derive(Default)]
pub struct RecordingBackend {
    due_batches: Mutex<VecDeque<Result<Vec<Reminder>>>>,
    records: Mutex<Vec<ReminderRecord>>,
    acks: Mutex<Vec<AckRequest>>,
    fetch_count: AtomicUsize,
    fail_acks: AtomicBool,
}

impl RecordingBackend {
    pub fn push_due(&self, batch: Vec<Reminder>) {
        self.due_batches
            .lock()
            .unwrap()
            .push_back(Ok(batch));
    }

    pub fn push_fetch_error(&self) {
        self.due_batches
            .lock()
            .unwrap()
            .push_back(Err(anyhow!("connection refused")));
    }

    pub fn set_records(&self, records: Vec<ReminderRecord>) {
        *self.records.lock().unwrap() = records;
    }

    pub fn set_fail_acks(&self, fail: bool) {
        self.fail_acks.store(fail, Ordering::SeqCst);
    }

    pub fn acks(&self) -> Vec<AckRequest> {
        self.acks.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReminderBackend for RecordingBackend {
    async fn fetch_due(&self) -> Result<Vec<Reminder>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.due_batches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn ack(&self, request: AckRequest) -> Result<()> {
        self.acks.lock().unwrap().push(request);
        if self.fail_acks.load(Ordering::SeqCst) {
            Err(anyhow!("ack endpoint unavailable"))
        } else {
            Ok(())
        }
    }

    async fn list_all(&self) -> Result<Vec<ReminderRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }
}

/// Backend fake where every call fails
pub struct FailingBackend;

#[async_trait]
impl ReminderBackend for FailingBackend {
    async fn fetch_due(&self) -> Result<Vec<Reminder>> {
        Err(anyhow!("network down"))
    }

    async fn ack(&self, _request: AckRequest) -> Result<()> {
        Err(anyhow!("network down"))
    }

    async fn list_all(&self) -> Result<Vec<ReminderRecord>> {
        Err(anyhow!("network down"))
    }
}

/// Backend fake with a fixed fetch latency that timestamps the start
/// of every fetch, for asserting poll-loop scheduling.
pub struct TimingBackend {
    fetch_delay: Duration,
    fetch_starts: Mutex<Vec<Instant>>,
}

impl TimingBackend {
    pub fn new(fetch_delay: Duration) -> Self {
        TimingBackend {
            fetch_delay,
            fetch_starts: Mutex::new(Vec::new()),
        }
    }

    pub fn fetch_starts(&self) -> Vec<Instant> {
        self.fetch_starts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReminderBackend for TimingBackend {
    async fn fetch_due(&self) -> Result<Vec<Reminder>> {
        self.fetch_starts.lock().unwrap().push(Instant::now());
        tokio::time::sleep(self.fetch_delay).await;
        Ok(Vec::new())
    }

    async fn ack(&self, _request: AckRequest) -> Result<()> {
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ReminderRecord>> {
        Ok(Vec::new())
    }
}

/// Backend fake whose acks never complete, for asserting that local
/// state changes are not gated on ack round-trips.
pub struct PendingAckBackend;

#[async_trait]
impl ReminderBackend for PendingAckBackend {
    async fn fetch_due(&self) -> Result<Vec<Reminder>> {
        Ok(Vec::new())
    }

    async fn ack(&self, _request: AckRequest) -> Result<()> {
        std::future::pending().await
    }

    async fn list_all(&self) -> Result<Vec<ReminderRecord>> {
        Ok(Vec::new())
    }
}
