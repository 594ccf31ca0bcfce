//! # Notification Host
//!
//! Owns the stack of active reminder cards and captures the user's
//! resolution intent (done / snooze). Presentation is deliberately
//! minimal: the host keeps ordered in-memory card state and emits
//! lifecycle events to an optional listener channel, and a frontend
//! renders from those. Nothing survives a restart.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Replace-in-place policy for re-delivered ids, listener events
//! - 1.0.0: Initial release with done/snooze capture

use chrono::{DateTime, Utc};
use log::{debug, info};
use regex::Regex;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tokio::sync::mpsc;

use crate::features::reminders::ack::AckClient;
use crate::features::reminders::protocol::Reminder;

/// Fixed snooze offset applied by the Snooze action
pub const SNOOZE_MINUTES: u32 = 5;

static REMIND_PREFIX: OnceLock<Regex> = OnceLock::new();

fn remind_prefix() -> &'static Regex {
    REMIND_PREFIX.get_or_init(|| {
        Regex::new(r"(?i)^remind( me)?").expect("remind prefix pattern is valid")
    })
}

/// Strip the leading "remind me" phrase from a task for display.
///
/// Display-only normalization: the stored task text is never touched.
/// Falls back to the raw task when stripping would leave nothing.
pub fn display_text(task: &str) -> String {
    let stripped = remind_prefix().replace(task, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        task.to_string()
    } else {
        stripped.to_string()
    }
}

/// How the user dismissed a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Done,
    Snooze,
}

/// One mounted reminder card
#[derive(Debug, Clone)]
pub struct NotificationCard {
    /// Backend reminder id; card key while mounted
    pub id: String,
    /// Raw task text as stored by the backend
    pub task: String,
    /// Normalized text shown on the card
    pub display_text: String,
    /// When this card was mounted client-side
    pub mounted_at: DateTime<Utc>,
}

impl NotificationCard {
    fn from_reminder(reminder: &Reminder) -> Self {
        NotificationCard {
            id: reminder.id.clone(),
            task: reminder.task.clone(),
            display_text: display_text(&reminder.task),
            mounted_at: Utc::now(),
        }
    }
}

/// Card lifecycle events for frontends
#[derive(Debug, Clone)]
pub enum CardEvent {
    /// A new card was mounted
    Mounted(NotificationCard),
    /// A re-delivered id replaced its mounted card in place
    Replaced(NotificationCard),
    /// The user dismissed a card
    Dismissed { id: String, resolution: Resolution },
}

/// The active-card collection. Construct one per client session and
/// share it (Arc) between the poller and whatever captures clicks.
pub struct NotificationHost {
    cards: Mutex<Vec<NotificationCard>>,
    acks: AckClient,
    listener: Option<mpsc::UnboundedSender<CardEvent>>,
}

impl NotificationHost {
    pub fn new(acks: AckClient) -> Self {
        NotificationHost {
            cards: Mutex::new(Vec::new()),
            acks,
            listener: None,
        }
    }

    /// Attach a lifecycle-event listener (for a frontend render loop).
    pub fn with_listener(mut self, listener: mpsc::UnboundedSender<CardEvent>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Lock the card stack. Every mutation below is a single
    /// last-write-wins step, so a poisoned lock still guards
    /// consistent state and is simply recovered.
    fn lock_cards(&self) -> MutexGuard<'_, Vec<NotificationCard>> {
        self.cards.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mount a card for a due reminder. A card already mounted for the
    /// same id is replaced in place, keeping its stack position.
    pub fn show(&self, reminder: &Reminder) {
        let card = NotificationCard::from_reminder(reminder);
        let replaced = {
            let mut cards = self.lock_cards();
            match cards.iter().position(|c| c.id == card.id) {
                Some(idx) => {
                    cards[idx] = card.clone();
                    true
                }
                None => {
                    cards.push(card.clone());
                    false
                }
            }
        };

        if replaced {
            debug!("Replaced mounted card for reminder {}", card.id);
            self.emit(CardEvent::Replaced(card));
        } else {
            info!("Reminder due: {}", card.display_text);
            self.emit(CardEvent::Mounted(card));
        }
    }

    /// Done click: drop the card and report permanent resolution.
    pub fn done(&self, id: &str) {
        self.resolve(id, Resolution::Done);
    }

    /// Snooze click: drop the card and reschedule the reminder
    /// [`SNOOZE_MINUTES`] out.
    pub fn snooze(&self, id: &str) {
        self.resolve(id, Resolution::Snooze);
    }

    /// Ordered snapshot of the mounted cards (arrival order).
    pub fn cards(&self) -> Vec<NotificationCard> {
        self.lock_cards().clone()
    }

    pub fn is_mounted(&self, id: &str) -> bool {
        self.lock_cards().iter().any(|c| c.id == id)
    }

    /// Remove the card, then send the resolution ack in the
    /// background. Local dismissal is never gated on the network: the
    /// card is gone before the ack is even issued, and a lost ack just
    /// means the reminder may come due again later.
    fn resolve(&self, id: &str, resolution: Resolution) {
        let removed = {
            let mut cards = self.lock_cards();
            match cards.iter().position(|c| c.id == id) {
                Some(idx) => Some(cards.remove(idx)),
                None => None,
            }
        };

        let Some(card) = removed else {
            debug!("Ignoring {resolution:?} for unmounted reminder {id}");
            return;
        };

        info!("Reminder {} dismissed ({resolution:?})", card.id);
        self.emit(CardEvent::Dismissed {
            id: card.id.clone(),
            resolution,
        });

        let acks = self.acks.clone();
        let snooze_minutes = match resolution {
            Resolution::Done => None,
            Resolution::Snooze => Some(SNOOZE_MINUTES),
        };
        tokio::spawn(async move {
            acks.ack_resolved(&card.id, snooze_minutes).await;
        });
    }

    fn emit(&self, event: CardEvent) {
        if let Some(listener) = &self.listener {
            // A hung-up frontend is not our problem; drop the event.
            let _ = listener.send(event);
        }
    }
}
