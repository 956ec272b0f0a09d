//! Command-line interface definitions for the news bot.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The credential and channel can be provided via flags or environment
//! variables; both are required and a missing value is a fatal exit before
//! any network call is made.

use clap::Parser;

use crate::config;

/// Command-line arguments for the news bot.
///
/// # Examples
///
/// ```sh
/// # Credential and channel from the environment
/// SLACK_TOKEN=xoxb-... CHANNEL_ID=C012345 natalie_news_bot
///
/// # Point the scraper at a different listing and cap
/// natalie_news_bot --source-url https://natalie.mu/music/news --max-items 10
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Slack bearer token used to post the message
    #[arg(long, env = "SLACK_TOKEN", hide_env_values = true)]
    pub slack_token: String,

    /// Destination Slack channel identifier
    #[arg(long, env = "CHANNEL_ID")]
    pub channel_id: String,

    /// URL of the news listing page to scrape
    #[arg(long, default_value = config::DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// Origin prepended to relative article links
    #[arg(long, default_value = config::DEFAULT_SITE_ORIGIN)]
    pub site_origin: String,

    /// Slack post-message endpoint
    #[arg(long, default_value = config::DEFAULT_SLACK_API_URL)]
    pub slack_api_url: String,

    /// Maximum number of news items to post
    #[arg(long, default_value_t = config::DEFAULT_MAX_ITEMS)]
    pub max_items: usize,
}
