// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-metric adapters from raw JSON payloads to validated series.
//!
//! Every adapter is total: it either returns a value object whose invariants
//! hold or a [`ShapeError`] naming the endpoint and the shape it expected.
//! Diagnosis codes used as keys are relabelled through a
//! [`DiagnosisLabelMap`]; codes missing from the map keep their raw key.

use cohortdash_types::{
    CorrelationResponse, DirectSeriesResponse, EducationResponse, RadarResponse, SummaryResponse,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ShapeError;
use crate::labels::DiagnosisLabelMap;
use crate::series::{
    CategorySeries, CorrelationSet, NamedSeries, RadarSeries, SeriesError, StackedSeries,
    SummaryStats,
};

const SUMMARY_SHAPE: &str =
    "{total, percent_alzheimer, mean_age, gender_male, gender_female}";
const DIRECT_SHAPE: &str = "{labels: [string], values|counts: [number]}";
const GROUPED_SHAPE: &str = "a map of diagnosis code to a number or {statistic: number}";
const NESTED_SHAPE: &str = "a map of diagnosis code to {metric: {statistic: number}}";
const EDUCATION_SHAPE: &str = "{labels: [string], no_dementia: [number], dementia: [number]}";
const RADAR_SHAPE: &str = "{labels: [string], datasets: [{label, data: [number]}]}";
const CORRELATION_SHAPE: &str = "{features: [string], values: [number]}";

fn decode<'v, T: Deserialize<'v>>(
    endpoint: &str,
    expected: &'static str,
    value: &'v Value,
) -> Result<T, ShapeError> {
    T::deserialize(value).map_err(|e| ShapeError::new(endpoint, expected, e.to_string()))
}

fn invalid<'a>(
    endpoint: &'a str,
    expected: &'static str,
) -> impl Fn(SeriesError) -> ShapeError + 'a {
    move |e| ShapeError::new(endpoint, expected, e.to_string())
}

fn as_map<'v>(
    endpoint: &str,
    expected: &'static str,
    value: &'v Value,
) -> Result<&'v Map<String, Value>, ShapeError> {
    value
        .as_object()
        .ok_or_else(|| ShapeError::new(endpoint, expected, format!("got {}", kind(value))))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Keys that are canonical array indices (`"0"`, `"17"`, not `"01"`).
fn array_index(key: &str) -> Option<u32> {
    key.parse::<u32>()
        .ok()
        .filter(|n| *n != u32::MAX && n.to_string() == key)
}

/// Iterate a mapping in JavaScript property order: integer-like keys ascending,
/// then every other key in payload order.
pub fn ordered_entries(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let (mut indices, others): (Vec<_>, Vec<_>) =
        map.iter().partition(|(key, _)| array_index(key).is_some());
    indices.sort_by_key(|(key, _)| array_index(key));
    indices.extend(others);
    indices
}

fn number(
    endpoint: &str,
    expected: &'static str,
    path: &str,
    value: Option<&Value>,
) -> Result<f64, ShapeError> {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| ShapeError::new(endpoint, expected, format!("{path} is not an f64"))),
        Some(other) => Err(ShapeError::new(
            endpoint,
            expected,
            format!("{path} is {}", kind(other)),
        )),
        None => Err(ShapeError::new(
            endpoint,
            expected,
            format!("{path} is missing"),
        )),
    }
}

/// `/api/summary` → [`SummaryStats`].
pub fn summary(endpoint: &str, value: &Value) -> Result<SummaryStats, ShapeError> {
    let raw: SummaryResponse = decode(endpoint, SUMMARY_SHAPE, value)?;
    SummaryStats::new(
        raw.total,
        raw.percent_alzheimer,
        raw.mean_age,
        raw.gender_male,
        raw.gender_female,
    )
    .map(|stats| stats.with_diagnosis_counts(raw.diagnosis_counts))
    .map_err(invalid(endpoint, SUMMARY_SHAPE))
}

/// `{labels, values}` or `{labels, counts}` passed through as a series.
///
/// With `relabel`, each label is treated as a diagnosis code.
pub fn direct_series(
    endpoint: &str,
    value: &Value,
    relabel: Option<&DiagnosisLabelMap>,
) -> Result<CategorySeries, ShapeError> {
    let raw: DirectSeriesResponse = decode(endpoint, DIRECT_SHAPE, value)?;
    let labels = match relabel {
        Some(map) => raw
            .labels
            .iter()
            .map(|code| map.label_for(code).to_string())
            .collect(),
        None => raw.labels,
    };
    CategorySeries::new(labels, raw.values).map_err(invalid(endpoint, DIRECT_SHAPE))
}

/// Mapping of diagnosis code to a scalar or a `{statistic: value}` record.
///
/// Scalar entries are taken as the requested statistic; record entries must
/// carry `statistic` as a number.
pub fn grouped_by_diagnosis(
    endpoint: &str,
    value: &Value,
    statistic: &str,
    labels: &DiagnosisLabelMap,
) -> Result<CategorySeries, ShapeError> {
    let map = as_map(endpoint, GROUPED_SHAPE, value)?;
    let pairs = ordered_entries(map)
        .into_iter()
        .map(|(code, entry)| -> Result<(String, f64), ShapeError> {
            let v = match entry {
                Value::Object(record) => number(
                    endpoint,
                    GROUPED_SHAPE,
                    &format!("{code}.{statistic}"),
                    record.get(statistic),
                )?,
                scalar => number(endpoint, GROUPED_SHAPE, code, Some(scalar))?,
            };
            Ok((labels.label_for(code).to_string(), v))
        })
        .collect::<Result<Vec<_>, _>>()?;
    CategorySeries::from_pairs(pairs).map_err(invalid(endpoint, GROUPED_SHAPE))
}

/// Mapping of diagnosis code to `{metric: {statistic: value}}`, e.g. the
/// `MMSE` mean out of the cognitive stats.
pub fn nested_statistic(
    endpoint: &str,
    value: &Value,
    metric: &str,
    statistic: &str,
    labels: &DiagnosisLabelMap,
) -> Result<CategorySeries, ShapeError> {
    let map = as_map(endpoint, NESTED_SHAPE, value)?;
    let pairs = ordered_entries(map)
        .into_iter()
        .map(|(code, entry)| -> Result<(String, f64), ShapeError> {
            let metrics = as_map(endpoint, NESTED_SHAPE, entry)?;
            let record = metrics.get(metric).ok_or_else(|| {
                ShapeError::new(endpoint, NESTED_SHAPE, format!("{code}.{metric} is missing"))
            })?;
            let record = as_map(endpoint, NESTED_SHAPE, record)?;
            let v = number(
                endpoint,
                NESTED_SHAPE,
                &format!("{code}.{metric}.{statistic}"),
                record.get(statistic),
            )?;
            Ok((labels.label_for(code).to_string(), v))
        })
        .collect::<Result<Vec<_>, _>>()?;
    CategorySeries::from_pairs(pairs).map_err(invalid(endpoint, NESTED_SHAPE))
}

/// Education level against diagnosis, as two stacked series named through
/// the label map (`no_dementia` is code `0`, `dementia` is code `1`).
pub fn stacked_series(
    endpoint: &str,
    value: &Value,
    labels: &DiagnosisLabelMap,
) -> Result<StackedSeries, ShapeError> {
    let raw: EducationResponse = decode(endpoint, EDUCATION_SHAPE, value)?;
    StackedSeries::new(
        raw.labels,
        vec![
            NamedSeries::new(labels.label_for("0"), raw.no_dementia),
            NamedSeries::new(labels.label_for("1"), raw.dementia),
        ],
    )
    .map_err(invalid(endpoint, EDUCATION_SHAPE))
}

/// Radar axes and one dataset per diagnosis code.
pub fn radar_series(
    endpoint: &str,
    value: &Value,
    labels: &DiagnosisLabelMap,
) -> Result<RadarSeries, ShapeError> {
    let raw: RadarResponse = decode(endpoint, RADAR_SHAPE, value)?;
    let datasets = raw
        .datasets
        .into_iter()
        .map(|ds| NamedSeries::new(labels.label_for(&ds.label), ds.data))
        .collect();
    RadarSeries::new(raw.labels, datasets).map_err(invalid(endpoint, RADAR_SHAPE))
}

/// Parallel feature names and correlation coefficients.
pub fn correlation_set(endpoint: &str, value: &Value) -> Result<CorrelationSet, ShapeError> {
    let raw: CorrelationResponse = decode(endpoint, CORRELATION_SHAPE, value)?;
    CorrelationSet::new(raw.features, raw.values).map_err(invalid(endpoint, CORRELATION_SHAPE))
}
