// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cross-platform JSON client for the cohort statistics service.
//!
//! Works on WASM (browser) and native targets via [`reqwest`]. Every call is a
//! single best-effort GET: no retries, no timeout, no caching.
//!
//! # Example
//!
//! ```no_run
//! use cohortdash_client::StatsApiClient;
//!
//! # async fn example() -> Result<(), cohortdash_client::FetchError> {
//! let client = StatsApiClient::new("http://localhost:5000");
//! let summary: cohortdash_client::cohortdash_types::SummaryResponse =
//!     client.fetch(cohortdash_client::cohortdash_types::paths::SUMMARY).await?;
//! println!("{} patients", summary.total);
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use cohortdash_types;
pub use error::FetchError;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// A JSON-over-HTTP client bound to one statistics service base URL.
///
/// Requests need an absolute URL. A browser dashboard that talks to its own
/// origin resolves an empty base against `window.location` before building
/// the client; a relative URL here fails with [`FetchError::Config`].
#[derive(Debug, Clone)]
pub struct StatsApiClient {
    base_url: String,
    http: Client,
}

impl StatsApiClient {
    /// Create a new client pointing at the given base URL, e.g.
    /// `"http://localhost:5000"`. A trailing slash is ignored.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL joined with `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path`, check the status, and parse the body as JSON.
    ///
    /// A transport failure, a non-2xx status, or a body that is not JSON all
    /// fail with a [`FetchError`] naming the full URL.
    pub async fn fetch_json(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        let url = self.url(path);
        log::debug!("GET {url}");
        let target = reqwest::Url::parse(&url)
            .map_err(|e| FetchError::Config(format!("cannot request {url:?}: {e}")))?;

        let response = self
            .http
            .get(target)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        if !(200..=299).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            log::debug!("GET {url} -> {status}");
            return Err(FetchError::Status { url, status, body });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|source| FetchError::Decode { url, source })
    }

    /// Like [`fetch_json`](Self::fetch_json), then deserialize into `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let value = self.fetch_json(path).await?;
        serde_json::from_value(value).map_err(|e| FetchError::Payload {
            url: self.url(path),
            detail: e.to_string(),
        })
    }
}
