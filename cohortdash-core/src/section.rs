// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative section descriptors.
//!
//! A section is one fetch → adapt → render unit. The dashboard is the ordered
//! list returned by [`default_sections`]; whether a section may fail on its
//! own is a [`Requirement`] carried in its descriptor, not control flow.

use std::fmt;
use std::str::FromStr;

use cohortdash_types::paths;
use serde_json::Value;
use thiserror::Error;

use crate::adapters;
use crate::chart::{bar_spec, radar_spec, stacked_bar_spec, ChartSpec};
use crate::config::DashboardConfig;
use crate::error::ShapeError;
use crate::labels::DiagnosisLabelMap;
use crate::markup;
use crate::ranker::rank_correlations;
use crate::series::CategorySeries;
use crate::theme::ChartTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Summary,
    DiagnosisCounts,
    Age,
    Bmi,
    Education,
    Smoking,
    Alcohol,
    Activity,
    Cognitive,
    Radar,
    Correlation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dashboard section `{0}`")]
pub struct UnknownSection(pub String);

impl SectionId {
    /// Every section, in load order.
    pub const ALL: [SectionId; 11] = [
        SectionId::Summary,
        SectionId::DiagnosisCounts,
        SectionId::Age,
        SectionId::Bmi,
        SectionId::Education,
        SectionId::Smoking,
        SectionId::Alcohol,
        SectionId::Activity,
        SectionId::Cognitive,
        SectionId::Radar,
        SectionId::Correlation,
    ];

    /// Stable snake-case name used in configuration and logs.
    pub fn key(&self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::DiagnosisCounts => "diagnosis_counts",
            SectionId::Age => "age",
            SectionId::Bmi => "bmi",
            SectionId::Education => "education",
            SectionId::Smoking => "smoking",
            SectionId::Alcohol => "alcohol",
            SectionId::Activity => "activity",
            SectionId::Cognitive => "cognitive",
            SectionId::Radar => "radar",
            SectionId::Correlation => "correlation",
        }
    }

    /// Id of the page element this section renders into.
    pub fn slot(&self) -> &'static str {
        match self {
            SectionId::Summary => "summary-cards",
            SectionId::DiagnosisCounts => "diagnosisChart",
            SectionId::Age => "ageChart",
            SectionId::Bmi => "bmiChart",
            SectionId::Education => "eduChart",
            SectionId::Smoking => "smokeChart",
            SectionId::Alcohol => "alcoholChart",
            SectionId::Activity => "activityChart",
            SectionId::Cognitive => "mmseChart",
            SectionId::Radar => "radarChart",
            SectionId::Correlation => "corrTable",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Failure aborts the remaining load.
    Mandatory,
    /// Failure leaves this section empty and the load continues.
    Optional,
}

/// Title and gradient of a single-series bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub title: &'static str,
    pub color_start: &'static str,
    pub color_end: &'static str,
}

const fn bar(title: &'static str, color_start: &'static str, color_end: &'static str) -> BarStyle {
    BarStyle {
        title,
        color_start,
        color_end,
    }
}

/// Which adapter and which builder a section runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    Summary,
    Direct {
        relabel: bool,
        style: BarStyle,
    },
    Grouped {
        statistic: &'static str,
        style: BarStyle,
    },
    Nested {
        metric: &'static str,
        statistic: &'static str,
        style: BarStyle,
    },
    Stacked,
    Radar,
    Correlation {
        top_n: usize,
    },
}

/// What a section hands to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionOutput {
    Chart(ChartSpec),
    Markup(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub path: String,
    pub requirement: Requirement,
    pub transform: Transform,
}

impl SectionDescriptor {
    pub fn slot(&self) -> &'static str {
        self.id.slot()
    }

    pub fn is_mandatory(&self) -> bool {
        self.requirement == Requirement::Mandatory
    }

    /// Adapt `payload` and build this section's output. Pure.
    pub fn build(
        &self,
        payload: &Value,
        theme: &ChartTheme,
        labels: &DiagnosisLabelMap,
    ) -> Result<SectionOutput, ShapeError> {
        let endpoint = self.path.as_str();
        let bar_chart = |series: CategorySeries, style: &BarStyle| {
            SectionOutput::Chart(bar_spec(
                theme,
                &series,
                style.title,
                style.color_start,
                style.color_end,
            ))
        };

        let output = match &self.transform {
            Transform::Summary => {
                let stats = adapters::summary(endpoint, payload)?;
                SectionOutput::Markup(markup::summary_cards(&stats))
            }
            Transform::Direct { relabel, style } => {
                let series =
                    adapters::direct_series(endpoint, payload, relabel.then_some(labels))?;
                bar_chart(series, style)
            }
            Transform::Grouped { statistic, style } => {
                let series = adapters::grouped_by_diagnosis(endpoint, payload, statistic, labels)?;
                bar_chart(series, style)
            }
            Transform::Nested {
                metric,
                statistic,
                style,
            } => {
                let series =
                    adapters::nested_statistic(endpoint, payload, metric, statistic, labels)?;
                bar_chart(series, style)
            }
            Transform::Stacked => {
                let series = adapters::stacked_series(endpoint, payload, labels)?;
                SectionOutput::Chart(stacked_bar_spec(theme, &series))
            }
            Transform::Radar => {
                let series = adapters::radar_series(endpoint, payload, labels)?;
                SectionOutput::Chart(radar_spec(theme, &series))
            }
            Transform::Correlation { top_n } => {
                let set = adapters::correlation_set(endpoint, payload)?;
                let ranked = rank_correlations(&set, *top_n);
                SectionOutput::Markup(markup::correlation_table(&ranked, &theme.correlation))
            }
        };
        Ok(output)
    }
}

/// The reference dashboard: eleven sections in load order, with each
/// section's requirement taken from `config`.
pub fn default_sections(config: &DashboardConfig) -> Vec<SectionDescriptor> {
    let section = |id: SectionId, path: &str, transform: Transform| SectionDescriptor {
        id,
        path: path.to_string(),
        requirement: config.requirement_of(id),
        transform,
    };

    vec![
        section(SectionId::Summary, paths::SUMMARY, Transform::Summary),
        section(
            SectionId::DiagnosisCounts,
            paths::DIAGNOSIS_COUNTS,
            Transform::Direct {
                // Codes are shown as "No Dementia"/"Dementia", not raw "0"/"1".
                relabel: true,
                style: bar("Diagnosis Distribution", "#4CC9F0", "#4895EF"),
            },
        ),
        section(
            SectionId::Age,
            paths::AGE_DISTRIBUTION,
            Transform::Direct {
                relabel: false,
                style: bar("Age Distribution", "#80ED99", "#38A3A5"),
            },
        ),
        section(
            SectionId::Bmi,
            paths::BMI_STATS,
            Transform::Grouped {
                statistic: "mean",
                style: bar("Mean BMI", "#FFB703", "#FB8500"),
            },
        ),
        section(
            SectionId::Education,
            paths::EDUCATION_VS_DIAGNOSIS,
            Transform::Stacked,
        ),
        section(
            SectionId::Smoking,
            paths::SMOKING_BY_DIAG,
            Transform::Grouped {
                statistic: "mean",
                style: bar("Smoking (mean)", "#72EFDD", "#56CFE1"),
            },
        ),
        section(
            SectionId::Alcohol,
            paths::ALCOHOL_STATS,
            Transform::Grouped {
                statistic: "median",
                style: bar("Alcohol (median)", "#FFAFCC", "#FF8FA3"),
            },
        ),
        section(
            SectionId::Activity,
            paths::ACTIVITY_BY_DIAG,
            Transform::Grouped {
                statistic: "mean",
                style: bar("Physical Activity", "#B5E48C", "#76C893"),
            },
        ),
        section(
            SectionId::Cognitive,
            paths::COGNITIVE_STATS,
            Transform::Nested {
                metric: "MMSE",
                statistic: "mean",
                style: bar("MMSE Mean", "#3A86FF", "#8338EC"),
            },
        ),
        section(SectionId::Radar, paths::RADAR_DATA, Transform::Radar),
        section(
            SectionId::Correlation,
            &config.correlation_path,
            Transform::Correlation {
                top_n: config.top_n,
            },
        ),
    ]
}
