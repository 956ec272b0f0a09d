//! Error types for the fetch and delivery stages.
//!
//! The two stages fail independently: a [`FetchError`] is recovered in `main`
//! by substituting a failure notice for the formatted news list, while a
//! [`DeliveryError`] ends the run. Neither is ever retried.

use thiserror::Error;

/// Failures while fetching the listing page or extracting entries from it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent, the connection failed, or the response
    /// body could not be read.
    #[error("request to news source failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The news source answered with a non-success status code.
    #[error("news source returned status {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response markup could not be queried.
    #[error("could not query news page markup: {0}")]
    Parse(String),

    /// The page was scanned but zero entries were accepted.
    #[error("no news entries found on the page")]
    Empty,
}

/// Failures while delivering the message to Slack.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The Slack API call failed at the HTTP level.
    #[error("Slack request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Slack answered the call but rejected the message (bad credential,
    /// unknown channel, rate limit, and so on).
    #[error("Slack rejected the message: {error}")]
    Api {
        /// The error string from Slack's response envelope.
        error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_carries_diagnostics() {
        let err = FetchError::Status {
            status: 503,
            url: "https://natalie.mu/music/news".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("https://natalie.mu/music/news"));
    }

    #[test]
    fn test_api_error_display_carries_slack_error() {
        let err = DeliveryError::Api {
            error: "channel_not_found".to_string(),
        };
        assert!(err.to_string().contains("channel_not_found"));
    }
}
