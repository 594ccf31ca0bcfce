//! Terminal frontend for the reminder subsystem. Polls the assistant
//! backend, prints due reminders as they arrive, and accepts
//! `done <id>` / `snooze <id>` commands on stdin.

use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use echoline::features::dashboard;
use echoline::features::get_client_version;
use echoline::features::reminders::{CardEvent, Resolution};
use echoline::{
    AckClient, Config, HttpReminderBackend, NotificationHost, ReminderBackend, ReminderPoller,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!(
        "Starting echoline notifier v{} against {}",
        get_client_version(),
        config.api_url
    );

    let backend: Arc<dyn ReminderBackend> =
        Arc::new(HttpReminderBackend::new(&config.api_url, config.http_timeout)?);
    let acks = AckClient::new(backend.clone());

    let (events_tx, mut events_rx) = tokio::sync::mpsc::unbounded_channel();
    let host = Arc::new(NotificationHost::new(acks.clone()).with_listener(events_tx));

    // Render card lifecycle events as terminal lines
    tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            match event {
                CardEvent::Mounted(card) => {
                    println!("⏰ [{}] {}", card.id, card.display_text);
                }
                CardEvent::Replaced(card) => {
                    println!("⏰ [{}] (updated) {}", card.id, card.display_text);
                }
                CardEvent::Dismissed { id, resolution } => match resolution {
                    Resolution::Done => println!("✔ [{id}] done"),
                    Resolution::Snooze => println!("💤 [{id}] snoozed 5 min"),
                },
            }
        }
    });

    let poller = ReminderPoller::new(backend.clone(), host.clone(), acks);
    let handle = poller.spawn();

    println!("Commands: done <id> | snooze <id> | list | all | quit");
    run_command_loop(backend, host).await;

    info!("Shutting down");
    handle.shutdown().await;
    Ok(())
}

/// Read user commands until EOF, `quit`, or ctrl-c.
async fn run_command_loop(backend: Arc<dyn ReminderBackend>, host: Arc<NotificationHost>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) => line,
                // EOF or unreadable stdin ends the session
                _ => break,
            },
        };

        match line.trim().split_once(' ') {
            Some(("done", id)) => host.done(id.trim()),
            Some(("snooze", id)) => host.snooze(id.trim()),
            _ => match line.trim() {
                "" => {}
                "quit" => break,
                "list" => {
                    let cards = host.cards();
                    if cards.is_empty() {
                        println!("No active reminder cards");
                    }
                    for card in cards {
                        println!("⏰ [{}] {}", card.id, card.display_text);
                    }
                }
                "all" => match dashboard::fetch_overview(&backend).await {
                    Ok(overview) => println!("{overview}"),
                    Err(e) => error!("Could not load the reminder dashboard: {e:#}"),
                },
                other => println!("Unknown command: {other}"),
            },
        }
    }
}
