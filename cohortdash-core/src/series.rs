// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request-scoped value objects produced by the adapters.
//!
//! Every constructor validates its invariants, so a value that exists is
//! safe to hand to a chart builder.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("{what} has {actual} values for {expected} labels")]
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate label `{0}`")]
    DuplicateLabel(String),
    #[error("{what} is not a finite number ({value})")]
    NotFinite { what: String, value: f64 },
    #[error("{what} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        what: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("expected at least {expected} series, found {actual}")]
    TooFewSeries { expected: usize, actual: usize },
}

fn check_finite(what: &str, value: f64) -> Result<(), SeriesError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SeriesError::NotFinite {
            what: what.to_string(),
            value,
        })
    }
}

fn check_range(what: &str, value: f64, min: f64, max: f64) -> Result<(), SeriesError> {
    check_finite(what, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SeriesError::OutOfRange {
            what: what.to_string(),
            value,
            min,
            max,
        })
    }
}

fn check_lengths(what: &str, expected: usize, values: &[f64]) -> Result<(), SeriesError> {
    if values.len() != expected {
        return Err(SeriesError::LengthMismatch {
            what: what.to_string(),
            expected,
            actual: values.len(),
        });
    }
    values
        .iter()
        .enumerate()
        .try_for_each(|(i, v)| check_finite(&format!("{what}[{i}]"), *v))
}

/// Headline numbers for the summary cards. Values are shown as received.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub total: u64,
    pub percent_alzheimer: Option<f64>,
    pub mean_age: f64,
    pub gender_male: f64,
    pub gender_female: f64,
    pub diagnosis_counts: Option<BTreeMap<String, u64>>,
}

impl SummaryStats {
    pub fn new(
        total: u64,
        percent_alzheimer: Option<f64>,
        mean_age: f64,
        gender_male: f64,
        gender_female: f64,
    ) -> Result<Self, SeriesError> {
        if let Some(percent) = percent_alzheimer {
            check_range("percent_alzheimer", percent, 0.0, 100.0)?;
        }
        check_range("mean_age", mean_age, 0.0, f64::MAX)?;
        // The two percentages are rounded independently and need not sum to 100.
        check_range("gender_male", gender_male, 0.0, 100.0)?;
        check_range("gender_female", gender_female, 0.0, 100.0)?;
        Ok(Self {
            total,
            percent_alzheimer,
            mean_age,
            gender_male,
            gender_female,
            diagnosis_counts: None,
        })
    }

    pub fn with_diagnosis_counts(mut self, counts: Option<BTreeMap<String, u64>>) -> Self {
        self.diagnosis_counts = counts;
        self
    }
}

/// Ordered `(label, value)` pairs; order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl CategorySeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self, SeriesError> {
        check_lengths("values", labels.len(), &values)?;
        let mut seen = HashSet::with_capacity(labels.len());
        if let Some(dup) = labels.iter().find(|l| !seen.insert(l.as_str())) {
            return Err(SeriesError::DuplicateLabel(dup.clone()));
        }
        Ok(Self { labels, values })
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let (labels, values) = pairs.into_iter().unzip();
        Self::new(labels, values)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One named numeric sequence parallel to a label axis.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

fn check_parallel(labels: &[String], series: &[NamedSeries]) -> Result<(), SeriesError> {
    series
        .iter()
        .try_for_each(|s| check_lengths(&format!("series `{}`", s.name), labels.len(), &s.values))
}

/// Labels plus two or more parallel sequences, drawn stacked.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedSeries {
    labels: Vec<String>,
    series: Vec<NamedSeries>,
}

impl StackedSeries {
    pub fn new(labels: Vec<String>, series: Vec<NamedSeries>) -> Result<Self, SeriesError> {
        if series.len() < 2 {
            return Err(SeriesError::TooFewSeries {
                expected: 2,
                actual: series.len(),
            });
        }
        check_parallel(&labels, &series)?;
        Ok(Self { labels, series })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn series(&self) -> &[NamedSeries] {
        &self.series
    }
}

/// Axis labels plus named datasets holding one value per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    labels: Vec<String>,
    datasets: Vec<NamedSeries>,
}

impl RadarSeries {
    pub fn new(labels: Vec<String>, datasets: Vec<NamedSeries>) -> Result<Self, SeriesError> {
        check_parallel(&labels, &datasets)?;
        Ok(Self { labels, datasets })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn datasets(&self) -> &[NamedSeries] {
        &self.datasets
    }
}

/// Parallel `features[i]` / `values[i]` correlation coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationSet {
    features: Vec<String>,
    values: Vec<f64>,
}

impl CorrelationSet {
    pub fn new(features: Vec<String>, values: Vec<f64>) -> Result<Self, SeriesError> {
        check_lengths("values", features.len(), &values)?;
        Ok(Self { features, values })
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.features
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
