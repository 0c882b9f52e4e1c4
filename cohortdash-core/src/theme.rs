// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immutable styling passed into every chart builder.

use crate::ranker::Polarity;

/// An opaque RGB colour, rendered as `rgba(...)` with a caller-chosen alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub duration_ms: u32,
    pub easing: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipStyle {
    pub background: String,
    pub border_color: String,
    pub border_width: u32,
    pub padding: u32,
}

/// Border and translucent fill for one radar dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesColor {
    pub border: String,
    pub fill: String,
}

impl SeriesColor {
    pub fn new(border: &str, fill: &str) -> Self {
        Self {
            border: border.to_string(),
            fill: fill.to_string(),
        }
    }
}

/// Cell colours of the correlation table.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationColors {
    pub positive: Rgb,
    pub negative: Rgb,
}

impl CorrelationColors {
    /// Background for a ranked value: the polarity picks the hue, the
    /// intensity is the alpha channel.
    pub fn fill(&self, polarity: Polarity, intensity: f64) -> String {
        match polarity {
            Polarity::Positive => self.positive.rgba(intensity),
            Polarity::Negative => self.negative.rgba(intensity),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub font_family: String,
    pub text_color: String,
    pub animation: Animation,
    pub tooltip: TooltipStyle,
    /// Used where a palette runs out.
    pub accent: String,
    pub value_grid_color: String,
    pub radar_grid_color: String,
    pub bar_radius: u32,
    /// Height in pixels over which a bar gradient runs from start to end colour.
    pub gradient_extent: f64,
    pub radar_palette: Vec<SeriesColor>,
    pub radar_fallback: SeriesColor,
    pub stacked_palette: Vec<String>,
    pub correlation: CorrelationColors,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            font_family: "'Poppins', 'Inter', sans-serif".to_string(),
            text_color: "#666".to_string(),
            animation: Animation {
                duration_ms: 1000,
                easing: "easeOutQuart".to_string(),
            },
            tooltip: TooltipStyle {
                background: "#1e3a5f".to_string(),
                border_color: "#00bcd4".to_string(),
                border_width: 1,
                padding: 12,
            },
            accent: "#64b5f6".to_string(),
            value_grid_color: "rgba(0,0,0,0.05)".to_string(),
            radar_grid_color: "rgba(0,0,0,0.08)".to_string(),
            bar_radius: 12,
            gradient_extent: 300.0,
            radar_palette: vec![
                SeriesColor::new("#00bcd4", "rgba(0, 188, 212, 0.1)"),
                SeriesColor::new("#1e3a5f", "rgba(30, 58, 95, 0.1)"),
            ],
            radar_fallback: SeriesColor::new("#64b5f6", "rgba(100, 181, 246, 0.1)"),
            stacked_palette: vec!["#4CC9F0".to_string(), "#F72585".to_string()],
            correlation: CorrelationColors {
                positive: Rgb(255, 99, 132),
                negative: Rgb(54, 162, 235),
            },
        }
    }
}

impl ChartTheme {
    pub fn radar_color(&self, index: usize) -> &SeriesColor {
        self.radar_palette.get(index).unwrap_or(&self.radar_fallback)
    }

    pub fn stacked_color(&self, index: usize) -> &str {
        self.stacked_palette
            .get(index)
            .map(String::as_str)
            .unwrap_or(&self.accent)
    }
}
