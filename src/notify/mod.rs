//! Message formatting and Slack delivery.
//!
//! The formatter renders the extracted items as a numbered list of Slack
//! `<url|title>` links bounded by a fixed header and footer. On fetch
//! failure the run still posts exactly one message, built by
//! [`failure_message`] instead.

mod slack;

pub use slack::SlackNotifier;

use crate::error::FetchError;
use crate::models::NewsItem;

const HEADER: &str = "🎵 最新ニュースはこちらです 🎵";
const FOOTER: &str = "以上が本日のニュースです！📢";

/// Render news items as a single Slack message.
///
/// Each item becomes `"{rank}. <{url}|{title}>"`; items are joined by a
/// blank line between the header and footer lines.
pub fn format_news(items: &[NewsItem]) -> String {
    let lines: Vec<String> = items
        .iter()
        .map(|item| format!("{}. <{}|{}>", item.rank, item.url, item.title))
        .collect();
    format!("{HEADER}\n{}\n\n{FOOTER}", lines.join("\n\n"))
}

/// Fixed failure notice posted when the news fetch fails.
pub fn failure_message(err: &FetchError) -> String {
    format!("ニュースの取得に失敗しました: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(rank: u32, title: &str, url: &str) -> NewsItem {
        NewsItem {
            rank,
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_format_news_ordering() {
        let items = vec![item(1, "A", "https://x/1"), item(2, "B", "https://x/2")];

        let message = format_news(&items);

        let header_pos = message.find(HEADER).unwrap();
        let first_pos = message.find("1. <https://x/1|A>").unwrap();
        let second_pos = message.find("2. <https://x/2|B>").unwrap();
        let footer_pos = message.find(FOOTER).unwrap();
        assert!(header_pos < first_pos);
        assert!(first_pos < second_pos);
        assert!(second_pos < footer_pos);
        // Items are separated by a blank line.
        assert!(message.contains("1. <https://x/1|A>\n\n2. <https://x/2|B>"));
    }

    #[test]
    fn test_format_news_single_item() {
        let message = format_news(&[item(1, "Solo", "https://x/9")]);
        assert!(message.starts_with(HEADER));
        assert!(message.contains("1. <https://x/9|Solo>"));
        assert!(message.ends_with(FOOTER));
    }

    #[test]
    fn test_format_news_empty_title() {
        let message = format_news(&[item(1, "", "https://x/1")]);
        assert!(message.contains("1. <https://x/1|>"));
    }

    #[test]
    fn test_failure_message_carries_error_detail() {
        let err = FetchError::Status {
            status: 404,
            url: "https://natalie.mu/music/news".to_string(),
        };
        let message = failure_message(&err);
        assert!(message.contains("ニュースの取得に失敗しました"));
        assert!(message.contains("404"));
    }
}
