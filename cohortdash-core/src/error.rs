// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for the load pipeline.

use cohortdash_client::FetchError;
use thiserror::Error;

use crate::section::SectionId;

/// Text shown to the viewer when a mandatory section fails.
pub const DASHBOARD_FAILED_MESSAGE: &str = "Failed to load dashboard data. Check that the \
     statistics service is running and open the browser network log for details.";

/// A payload did not have the shape its adapter expects.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unexpected payload from {endpoint}: expected {expected} ({detail})")]
pub struct ShapeError {
    pub endpoint: String,
    pub expected: &'static str,
    pub detail: String,
}

impl ShapeError {
    pub fn new(endpoint: &str, expected: &'static str, detail: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            expected,
            detail: detail.into(),
        }
    }
}

/// The rendering collaborator refused a spec or markup fragment.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

/// Why a single section did not render.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// The single aggregate error raised when a mandatory section fails.
#[derive(Debug, Error)]
#[error("mandatory section `{section}` failed: {source}")]
pub struct DashboardError {
    pub section: SectionId,
    #[source]
    pub source: SectionError,
}

impl DashboardError {
    /// Human-readable banner text. The technical cause is logged, not shown.
    pub fn user_message(&self) -> &'static str {
        DASHBOARD_FAILED_MESSAGE
    }
}
