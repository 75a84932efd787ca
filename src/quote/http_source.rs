//! Reqwest-backed quote source.

use std::time::Duration;

use async_trait::async_trait;

use super::{DailyQuote, QuoteSource};
use crate::MoodlogError;

/// Fetches the daily quote from an upstream HTTP API.
///
/// The upstream returns a JSON array of quotes; the first element is the
/// quote of the day. Every request carries a bounded timeout so a stalled
/// upstream cannot pin a handler.
#[derive(Clone)]
pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, MoodlogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MoodlogError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_owned(),
        })
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch_daily(&self) -> Result<DailyQuote, MoodlogError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            log::warn!(target: "moodlog::quote", "msg=\"upstream request failed\", error=\"{e}\"");
            MoodlogError::UpstreamFailure(format!("request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!(target: "moodlog::quote", "msg=\"upstream returned non-success\", status=\"{status}\"");
            return Err(MoodlogError::UpstreamFailure(format!(
                "upstream returned status {status}"
            )));
        }

        let quotes: Vec<DailyQuote> = response.json().await.map_err(|e| {
            log::warn!(target: "moodlog::quote", "msg=\"upstream payload unparsable\", error=\"{e}\"");
            MoodlogError::UpstreamFailure(format!("unparsable payload: {e}"))
        })?;

        quotes
            .into_iter()
            .next()
            .ok_or_else(|| MoodlogError::UpstreamFailure("empty payload".to_owned()))
    }
}
