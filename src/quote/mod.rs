//! Quote-of-the-day proxy.
//!
//! An upstream failure is a real error here - a 502 with an error body -
//! never a placeholder quote dressed up as content, so callers can branch
//! on failure versus success.

mod http_source;

use async_trait::async_trait;
pub use http_source::HttpQuoteSource;
use serde::{Deserialize, Serialize};

use crate::MoodlogError;

/// A quote and its author, in the upstream API's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyQuote {
    /// Quote text.
    pub q: String,
    /// Author.
    pub a: String,
}

/// Fetches the daily quote.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_daily(&self) -> Result<DailyQuote, MoodlogError>;
}

/// Canned quote source for tests: either a fixed quote or a fixed failure.
#[derive(Clone)]
pub struct MockQuoteSource {
    result: Result<DailyQuote, String>,
}

impl MockQuoteSource {
    pub fn ok(q: &str, a: &str) -> Self {
        Self {
            result: Ok(DailyQuote {
                q: q.to_owned(),
                a: a.to_owned(),
            }),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(reason.to_owned()),
        }
    }
}

#[async_trait]
impl QuoteSource for MockQuoteSource {
    async fn fetch_daily(&self) -> Result<DailyQuote, MoodlogError> {
        self.result
            .clone()
            .map_err(MoodlogError::UpstreamFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_source_ok() {
        let source = MockQuoteSource::ok("Stay curious.", "Anonymous");
        let quote = source.fetch_daily().await.unwrap();
        assert_eq!(quote.q, "Stay curious.");
        assert_eq!(quote.a, "Anonymous");
    }

    #[tokio::test]
    async fn test_mock_source_failing() {
        let source = MockQuoteSource::failing("upstream down");
        let err = source.fetch_daily().await.unwrap_err();
        assert_eq!(err, MoodlogError::UpstreamFailure("upstream down".to_owned()));
    }

    #[test]
    fn test_quote_wire_shape() {
        let quote = DailyQuote {
            q: "Stay curious.".to_owned(),
            a: "Anonymous".to_owned(),
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["q"], "Stay curious.");
        assert_eq!(json["a"], "Anonymous");
    }
}
