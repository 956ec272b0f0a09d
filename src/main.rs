//! # Natalie News Bot
//!
//! A scheduled notification bot that scrapes the latest music news headlines
//! from [natalie.mu](https://natalie.mu/music/news) and posts them to a Slack
//! channel. Each invocation performs one run: one outbound HTML fetch, one
//! outbound message post, then exit.
//!
//! ## Usage
//!
//! ```sh
//! SLACK_TOKEN=xoxb-... CHANNEL_ID=C012345 natalie_news_bot
//! ```
//!
//! ## Pipeline
//!
//! 1. **Extract**: fetch the listing page and extract up to 15 headline
//!    entries (title + absolute link), in document order
//! 2. **Format**: render the entries as a numbered list of Slack links
//! 3. **Deliver**: post the message to the configured channel
//!
//! A fetch failure does not abort the run; the bot posts a failure notice to
//! the channel instead, so the channel sees exactly one message per run
//! either way.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod error;
mod models;
mod notify;
mod scrapers;

use cli::Cli;
use config::BotConfig;
use notify::SlackNotifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("natalie_news_bot starting up");

    // Parse CLI; a missing token or channel id is a fatal exit here, before
    // any network call.
    let args = Cli::parse();
    let config = BotConfig::from_cli(args);
    debug!(
        source_url = %config.source_url,
        channel = %config.channel_id,
        max_items = config.max_items,
        "Configuration loaded"
    );

    let client = reqwest::Client::new();

    // ---- Fetch and format ----
    let text = match scrapers::natalie::fetch_news(&client, &config).await {
        Ok(items) => {
            info!(count = items.len(), "Fetched news items");
            notify::format_news(&items)
        }
        Err(e) => {
            warn!(error = %e, "News fetch failed; posting failure notice instead");
            notify::failure_message(&e)
        }
    };

    // ---- Deliver ----
    let notifier = SlackNotifier::new(client, &config);
    if let Err(e) = notifier.post_message(&text).await {
        error!(error = %e, "Failed to deliver Slack message");
        return Err(e.into());
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Posted news to Slack; run complete");
    Ok(())
}
