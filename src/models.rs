//! Data model for extracted news entries.

use serde::{Deserialize, Serialize};

/// A single news entry extracted from the listing page.
///
/// Items are produced by the extractor, consumed by the message formatter,
/// and never mutated after creation. They live for a single run.
///
/// # Fields
///
/// * `rank` - 1-based position among the accepted items of this run. Skipped
///   candidates (cards without a usable article link) do not consume a rank
///   slot, so ranks are always contiguous.
/// * `title` - The headline text. May be empty when the card carries no
///   recognizable title; an empty title is not an error.
/// * `url` - The absolute article URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsItem {
    /// 1-based position among accepted items in this run.
    pub rank: u32,
    /// The headline text, possibly empty.
    pub title: String,
    /// The absolute article URL.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_item_creation() {
        let item = NewsItem {
            rank: 1,
            title: "New single announced".to_string(),
            url: "https://natalie.mu/music/news/123456".to_string(),
        };
        assert_eq!(item.rank, 1);
        assert_eq!(item.title, "New single announced");
        assert_eq!(item.url, "https://natalie.mu/music/news/123456");
    }

    #[test]
    fn test_news_item_serialization() {
        let item = NewsItem {
            rank: 3,
            title: "Tour dates".to_string(),
            url: "https://natalie.mu/music/news/654321".to_string(),
        };

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: NewsItem = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, item);
    }

    #[test]
    fn test_news_item_empty_title_allowed() {
        let item = NewsItem {
            rank: 2,
            title: String::new(),
            url: "https://natalie.mu/music/news/1".to_string(),
        };
        assert!(item.title.is_empty());
    }
}
