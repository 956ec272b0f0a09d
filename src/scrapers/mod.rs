//! News source scrapers.
//!
//! One source is supported today: the natalie.mu music news listing. Each
//! scraper module exports a `fetch_news(client, config)` operation returning
//! extracted [`crate::models::NewsItem`]s in document order.

pub mod natalie;
