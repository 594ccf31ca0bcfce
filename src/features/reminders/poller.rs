//! # Reminder Poller
//!
//! The control loop of the reminder subsystem. Every cycle fetches the
//! due list, mounts a card per reminder, and confirms delivery, then
//! sleeps a fixed interval measured from the end of the cycle. Cycles
//! therefore never overlap, and a slow backend stretches the period
//! instead of stacking requests.
//!
//! Failure handling is deliberately trivial: a missed cycle is
//! invisible and self-heals on the next tick, so fetch errors are
//! logged at debug and otherwise dropped. Nothing from this loop ever
//! reaches the chat UI.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::features::reminders::ack::AckClient;
use crate::features::reminders::backend::ReminderBackend;
use crate::features::reminders::notifications::NotificationHost;

/// Fixed delay between the end of one poll cycle and the start of the
/// next.
pub const POLL_INTERVAL: Duration = Duration::from_secs(15);

/// What a single poll cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Mounted and delivery-acked this many reminders
    Delivered(usize),
    /// Backend reported nothing due
    Empty,
    /// Fetch failed (network or decode); retried next tick
    FetchFailed,
}

/// The due-reminder discovery loop
pub struct ReminderPoller {
    backend: Arc<dyn ReminderBackend>,
    host: Arc<NotificationHost>,
    acks: AckClient,
    interval: Duration,
}

impl ReminderPoller {
    pub fn new(
        backend: Arc<dyn ReminderBackend>,
        host: Arc<NotificationHost>,
        acks: AckClient,
    ) -> Self {
        ReminderPoller {
            backend,
            host,
            acks,
            interval: POLL_INTERVAL,
        }
    }

    /// Override the inter-poll delay (tests shrink it).
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// One poll cycle: fetch the due list, mount a card and send a
    /// delivery ack for each reminder in received order. Delivery acks
    /// are best-effort; a failed ack neither removes the card already
    /// shown nor skips the rest of the batch.
    pub async fn run_once(&self) -> CycleOutcome {
        let due = match self.backend.fetch_due().await {
            Ok(due) => due,
            Err(e) => {
                debug!("Due-reminder poll failed, retrying next tick: {e:#}");
                return CycleOutcome::FetchFailed;
            }
        };

        if due.is_empty() {
            debug!("No reminders due");
            return CycleOutcome::Empty;
        }

        let count = due.len();
        info!("{count} reminder(s) due");
        for reminder in &due {
            self.host.show(reminder);
            self.acks.ack_delivered(&reminder.id).await;
        }
        CycleOutcome::Delivered(count)
    }

    /// Start the loop on a background task. It runs for the life of
    /// the process unless [`PollerHandle::shutdown`] is called; merely
    /// dropping the handle leaves it polling.
    pub fn spawn(self) -> PollerHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let task = tokio::spawn(async move {
            info!(
                "Reminder poll loop started (interval: {}s)",
                self.interval.as_secs()
            );
            loop {
                let _ = self.run_once().await;

                tokio::select! {
                    _ = tokio::time::sleep(self.interval) => {}
                    _ = recv_shutdown(&mut shutdown_rx) => {
                        info!("Reminder poll loop stopped");
                        break;
                    }
                }
            }
        });

        PollerHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Resolves when a shutdown is requested. A dropped handle closes the
/// channel, which means "run for the whole session", so that case
/// never resolves.
async fn recv_shutdown(rx: &mut mpsc::Receiver<()>) {
    match rx.recv().await {
        Some(()) => {}
        None => std::future::pending().await,
    }
}

/// Handle to a spawned poll loop
pub struct PollerHandle {
    shutdown: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Cancel the pending inter-poll sleep and stop the loop. Waits
    /// for the current cycle, if any, to settle.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(()).await;
        let _ = self.task.await;
    }
}
