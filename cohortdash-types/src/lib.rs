// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared JSON contract for the cohort statistics service.
//!
//! This crate defines the payloads served by the statistics backend and
//! consumed by the dashboard. It is intentionally framework-agnostic: no HTTP
//! client, no rendering types.

pub mod paths;
pub mod responses;

pub use responses::{
    CorrelationResponse, DirectSeriesResponse, EducationResponse, RadarDatasetResponse,
    RadarResponse, SummaryResponse,
};
