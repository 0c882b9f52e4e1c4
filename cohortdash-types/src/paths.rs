// SPDX-License-Identifier: MIT OR Apache-2.0

//! Endpoint paths exposed by the statistics service.

pub const SUMMARY: &str = "/api/summary";
pub const DIAGNOSIS_COUNTS: &str = "/api/diagnosis_counts";
pub const AGE_DISTRIBUTION: &str = "/api/age_distribution";
pub const BMI_STATS: &str = "/api/bmi_stats";
pub const EDUCATION_VS_DIAGNOSIS: &str = "/api/education_vs_diagnosis";
pub const SMOKING_BY_DIAG: &str = "/api/smoking_by_diag";
pub const ALCOHOL_STATS: &str = "/api/alcohol_stats";
pub const ACTIVITY_BY_DIAG: &str = "/api/activity_by_diag";
pub const COGNITIVE_STATS: &str = "/api/cognitive_stats";
pub const RADAR_DATA: &str = "/api/radar_data";

/// Default location of the feature/diagnosis correlation endpoint.
///
/// Some deployments serve it outside the `/api` prefix
/// ([`CORRELATION_DIAGNOSIS_LEGACY`]), so consumers treat it as configuration.
pub const CORRELATION_DIAGNOSIS: &str = "/api/correlation_diagnosis";
pub const CORRELATION_DIAGNOSIS_LEGACY: &str = "/correlation_diagnosis";
