// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response payloads for the statistics service.
//!
//! Endpoints whose body is a mapping keyed by diagnosis code
//! (`/api/bmi_stats`, `/api/smoking_by_diag`, `/api/alcohol_stats`,
//! `/api/activity_by_diag`, `/api/cognitive_stats`) have no fixed struct: their
//! records carry a variable set of statistics and are read as
//! [`serde_json::Map`] by the consumer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response payload for `GET /api/summary`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SummaryResponse {
    pub total: u64,
    /// Percentage of patients with diagnosis code `1`. `null` when the service
    /// could not compute it (non-numeric diagnosis column).
    #[serde(default)]
    pub percent_alzheimer: Option<f64>,
    pub mean_age: f64,
    pub gender_male: f64,
    pub gender_female: f64,
    /// Patient count per diagnosis code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis_counts: Option<BTreeMap<String, u64>>,
}

/// Response payload for `GET /api/diagnosis_counts` and
/// `GET /api/age_distribution`.
///
/// The age endpoint names its value column `counts`; both spellings are
/// accepted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DirectSeriesResponse {
    pub labels: Vec<String>,
    #[serde(alias = "counts")]
    pub values: Vec<f64>,
}

/// Response payload for `GET /api/education_vs_diagnosis`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EducationResponse {
    pub labels: Vec<String>,
    pub no_dementia: Vec<f64>,
    pub dementia: Vec<f64>,
}

/// Response payload for `GET /api/radar_data`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RadarResponse {
    pub labels: Vec<String>,
    pub datasets: Vec<RadarDatasetResponse>,
}

/// Single dataset inside [`RadarResponse`]; `label` is a diagnosis code.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RadarDatasetResponse {
    pub label: String,
    pub data: Vec<f64>,
}

/// Response payload for `GET /api/correlation_diagnosis`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CorrelationResponse {
    pub features: Vec<String>,
    pub values: Vec<f64>,
}
