// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the statistics client.

use thiserror::Error;

/// Errors returned by [`StatsApiClient`](crate::StatsApiClient) methods.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service answered with a non-2xx status.
    #[error("GET {url} failed with status {status}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// A network or transport error before any status was received.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not valid JSON.
    #[error("GET {url} returned a body that is not JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was JSON but not the requested type.
    #[error("GET {url} returned an unexpected payload: {detail}")]
    Payload { url: String, detail: String },

    /// A configuration error (e.g. no base URL available).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FetchError {
    /// The URL this error refers to, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Status { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::Payload { url, .. } => Some(url),
            FetchError::Config(_) => None,
        }
    }

    /// HTTP status for [`FetchError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
