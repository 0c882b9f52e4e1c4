// SPDX-License-Identifier: MIT OR Apache-2.0

//! Top-N ranking of feature correlations by magnitude.

use crate::series::CorrelationSet;

/// How many features the correlation table shows by default.
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    /// Zero counts as negative.
    Negative,
}

impl Polarity {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCorrelation {
    pub feature: String,
    pub value: f64,
    pub polarity: Polarity,
    /// `|value|` clamped to `[0, 1]`; used as the colour alpha.
    pub intensity: f64,
}

/// Sort by descending `|value|` and keep the first `top_n`.
///
/// The sort is stable, so features with equal magnitude keep their input
/// order. Output length is `min(top_n, set.len())`.
pub fn rank_correlations(set: &CorrelationSet, top_n: usize) -> Vec<RankedCorrelation> {
    let mut pairs: Vec<(&str, f64)> = set.pairs().collect();
    pairs.sort_by(|(_, a), (_, b)| b.abs().total_cmp(&a.abs()));
    pairs
        .into_iter()
        .take(top_n)
        .map(|(feature, value)| RankedCorrelation {
            feature: feature.to_string(),
            value,
            polarity: Polarity::of(value),
            intensity: value.abs().clamp(0.0, 1.0),
        })
        .collect()
}
