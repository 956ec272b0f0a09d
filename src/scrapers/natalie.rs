//! natalie.mu music news scraper.
//!
//! Extracts headline entries from the music news listing at
//! [natalie.mu/music/news](https://natalie.mu/music/news).
//!
//! # Markup coupling
//!
//! The extraction rules are coupled to the page markup and deliberately kept
//! as literal, documented rules so behavior stays reproducible if the markup
//! shifts:
//!
//! - article cards are `.NA_card` elements, scanned in document order
//! - the article link is the *last* `a[href]` inside a card; cards put a
//!   decorative tag link before the article link
//! - tag links are recognized by the literal substring `/music/tag/` in the
//!   href, nothing smarter
//! - the headline lives in `.NA_card_title`, with the first `h3` or `p`
//!   descendant as fallback

use crate::config::BotConfig;
use crate::error::FetchError;
use crate::models::NewsItem;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};

/// Literal substring identifying a decorative tag link inside a card.
const TAG_LINK_MARKER: &str = "/music/tag/";

/// Fetch the listing page and extract up to `config.max_items` entries.
///
/// One GET, no retry. Returns [`FetchError::Status`] on a non-2xx response
/// and [`FetchError::Empty`] when the page yields no accepted entries.
#[instrument(level = "info", skip_all, fields(url = %config.source_url))]
pub async fn fetch_news(client: &Client, config: &BotConfig) -> Result<Vec<NewsItem>, FetchError> {
    let response = client.get(&config.source_url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: config.source_url.clone(),
        });
    }

    let html = response.text().await?;
    let items = extract_items(&html, config)?;
    info!(count = items.len(), "Extracted news items");
    Ok(items)
}

/// Extract news entries from listing-page markup.
///
/// Pure function over the HTML so the extraction rules can be tested on
/// fixtures without a server. Scanning stops once `config.max_items` entries
/// have been accepted; cards without a usable article link are skipped
/// silently and do not consume a rank slot.
pub fn extract_items(html: &str, config: &BotConfig) -> Result<Vec<NewsItem>, FetchError> {
    let document = Html::parse_document(html);
    let card_selector = selector(".NA_card")?;
    let anchor_selector = selector("a[href]")?;
    let title_selector = selector(".NA_card_title")?;
    let h3_selector = selector("h3")?;
    let p_selector = selector("p")?;

    let mut items: Vec<NewsItem> = Vec::new();
    for card in document.select(&card_selector) {
        if items.len() >= config.max_items {
            break;
        }

        // Cards carry a tag link before the article link; the last anchor
        // is the article link.
        let Some(anchor) = card.select(&anchor_selector).last() else {
            debug!("Card has no linked anchor; skipping");
            continue;
        };
        let href = anchor.value().attr("href").unwrap_or_default();
        if href.contains(TAG_LINK_MARKER) {
            debug!(%href, "Card links only to a tag page; skipping");
            continue;
        }

        let title = card_title(card, &title_selector, &h3_selector, &p_selector);
        let url = absolutize(href, &config.site_origin);

        items.push(NewsItem {
            rank: items.len() as u32 + 1,
            title,
            url,
        });
    }

    if items.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(items)
}

/// Headline text of a card: `.NA_card_title`, else the first `h3` or `p`
/// descendant. Trimmed; may be empty.
fn card_title(
    card: ElementRef<'_>,
    title_selector: &Selector,
    h3_selector: &Selector,
    p_selector: &Selector,
) -> String {
    let title = card
        .select(title_selector)
        .next()
        .map(element_text)
        .unwrap_or_default();
    if !title.is_empty() {
        return title;
    }

    for fallback in [h3_selector, p_selector] {
        if let Some(element) = card.select(fallback).next() {
            let text = element_text(element);
            if !text.is_empty() {
                return text;
            }
        }
    }
    String::new()
}

/// Prefix the site origin when the href is not already absolute.
fn absolutize(href: &str, site_origin: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{site_origin}{href}")
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Parse(e.to_string()))
}
