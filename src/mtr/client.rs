//! HTTP client for the MTR real-time schedule API

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Default endpoint of the public realtime schedule API
pub const DEFAULT_API_URL: &str = "https://rt.data.gov.hk/v1/transport/mtr/getSchedule.php";

/// Default bound on one upstream fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure categories for one schedule fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered with a non-200 status
    #[error("API request failed with status {status}")]
    Http { status: u16, body: String },
    /// The request did not complete within the fetch timeout
    #[error("Request timed out")]
    Timeout,
    /// Any other transport or decoding failure
    #[error("{0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Client for the MTR next-train schedule endpoint
#[derive(Clone, Debug)]
pub struct MtrClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl MtrClient {
    /// Create a client against the given endpoint with the default timeout
    pub fn new(base_url: String) -> Self {
        Self::with_timeout(base_url, DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a client with an explicit per-request timeout
    pub fn with_timeout(base_url: String, timeout: Duration) -> Self {
        Self {
            base_url,
            timeout,
            client: Client::new(),
        }
    }

    /// Fetch the schedule payload for one line/station pair.
    ///
    /// One attempt, no retries. `line` and `sta` must already be canonical
    /// codes; `lang` is `EN` or `TC`.
    pub async fn get_schedule(&self, line: &str, sta: &str, lang: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("line", line), ("sta", sta), ("lang", lang)])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

impl Default for MtrClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL.to_string())
    }
}
