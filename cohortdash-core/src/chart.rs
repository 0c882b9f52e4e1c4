// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative chart specs and the builders that produce them.
//!
//! A [`ChartSpec`] serializes to a Chart.js configuration object. Builders
//! are pure: they borrow their inputs, read styling from an explicit
//! [`ChartTheme`], and return a fresh spec. Bar gradients are described
//! as data ([`Fill::Gradient`]) and only turned into a canvas gradient by the
//! renderer, so identical inputs always give identical specs.

use serde::Serialize;

use crate::series::{CategorySeries, RadarSeries, StackedSeries};
use crate::theme::ChartTheme;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Radar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_skipped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
}

/// A dataset fill: a CSS colour, or a vertical gradient that the renderer
/// resolves against its drawing surface.
///
/// Gradients serialize as `{"linearGradient": {"from", "to", "extent"}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(String),
    Gradient {
        #[serde(rename = "linearGradient")]
        linear_gradient: LinearGradient,
    },
}

/// Top-to-bottom gradient from `from` at y = 0 to `to` at y = `extent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    pub from: String,
    pub to: String,
    pub extent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub color: String,
    pub animation: AnimationSpec,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationSpec {
    pub duration: u32,
    pub easing: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FontSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: LegendSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSpec {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabels {
    pub font: FontSpec,
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipSpec {
    pub background_color: String,
    pub padding: u32,
    pub title_font: FontSpec,
    pub body_font: FontSpec,
    pub border_color: String,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<Scale>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TicksSpec>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_border: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicksSpec {
    pub font: FontSpec,
}

fn font(theme: &ChartTheme, size: u32, weight: Option<u32>) -> FontSpec {
    FontSpec {
        family: Some(theme.font_family.clone()),
        size: Some(size),
        weight,
    }
}

fn tooltip(theme: &ChartTheme, title_size: u32, body_size: u32) -> TooltipSpec {
    TooltipSpec {
        background_color: theme.tooltip.background.clone(),
        padding: theme.tooltip.padding,
        title_font: font(theme, title_size, Some(600)),
        body_font: font(theme, body_size, None),
        border_color: theme.tooltip.border_color.clone(),
        border_width: theme.tooltip.border_width,
    }
}

fn options(theme: &ChartTheme, plugins: Plugins, scales: Scales) -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        color: theme.text_color.clone(),
        animation: AnimationSpec {
            duration: theme.animation.duration_ms,
            easing: theme.animation.easing.clone(),
        },
        plugins,
        scales,
    }
}

/// Single-series bar chart with a vertical gradient fill, hidden legend, no
/// category-axis grid and a faint value-axis grid.
pub fn bar_spec(
    theme: &ChartTheme,
    series: &CategorySeries,
    title: &str,
    color_start: &str,
    color_end: &str,
) -> ChartSpec {
    let dataset = Dataset {
        label: title.to_string(),
        data: series.values().to_vec(),
        background_color: Some(Fill::Gradient {
            linear_gradient: LinearGradient {
                from: color_start.to_string(),
                to: color_end.to_string(),
                extent: theme.gradient_extent,
            },
        }),
        border_radius: Some(theme.bar_radius),
        border_skipped: Some(false),
        border_width: Some(0),
        ..Default::default()
    };

    let plugins = Plugins {
        legend: LegendSpec {
            display: false,
            position: None,
            labels: None,
        },
        tooltip: Some(tooltip(theme, 14, 13)),
    };
    let scales = Scales {
        x: Some(Scale {
            grid: Some(GridSpec {
                display: Some(false),
                ..Default::default()
            }),
            ticks: Some(TicksSpec {
                font: font(theme, 12, Some(500)),
            }),
            ..Default::default()
        }),
        y: Some(Scale {
            grid: Some(GridSpec {
                color: Some(theme.value_grid_color.clone()),
                draw_border: Some(false),
                ..Default::default()
            }),
            ticks: Some(TicksSpec {
                font: font(theme, 12, None),
            }),
            ..Default::default()
        }),
        r: None,
    };

    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: series.labels().to_vec(),
            datasets: vec![dataset],
        },
        options: options(theme, plugins, scales),
    }
}

/// Multi-series radar chart. Dataset `i` takes palette entry `i`, or the
/// theme fallback once the palette is exhausted.
pub fn radar_spec(theme: &ChartTheme, series: &RadarSeries) -> ChartSpec {
    let datasets = series
        .datasets()
        .iter()
        .enumerate()
        .map(|(i, ds)| {
            let color = theme.radar_color(i);
            Dataset {
                label: ds.name.clone(),
                data: ds.values.clone(),
                background_color: Some(Fill::Solid(color.fill.clone())),
                border_color: Some(color.border.clone()),
                border_width: Some(2),
                point_background_color: Some(color.border.clone()),
                point_border_color: Some("#fff".to_string()),
                point_border_width: Some(2),
                point_radius: Some(5),
                point_hover_radius: Some(7),
                ..Default::default()
            }
        })
        .collect();

    let plugins = Plugins {
        legend: LegendSpec {
            display: true,
            position: Some(LegendPosition::Bottom),
            labels: Some(LegendLabels {
                font: font(theme, 12, Some(500)),
                padding: 15,
            }),
        },
        tooltip: Some(tooltip(theme, 13, 12)),
    };
    let scales = Scales {
        r: Some(Scale {
            begin_at_zero: Some(true),
            grid: Some(GridSpec {
                color: Some(theme.radar_grid_color.clone()),
                ..Default::default()
            }),
            ticks: Some(TicksSpec {
                font: font(theme, 11, None),
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    ChartSpec {
        kind: ChartKind::Radar,
        data: ChartData {
            labels: series.labels().to_vec(),
            datasets,
        },
        options: options(theme, plugins, scales),
    }
}

/// Bar chart with every series stacked on both axes.
pub fn stacked_bar_spec(theme: &ChartTheme, series: &StackedSeries) -> ChartSpec {
    let datasets = series
        .series()
        .iter()
        .enumerate()
        .map(|(i, s)| Dataset {
            label: s.name.clone(),
            data: s.values.clone(),
            background_color: Some(Fill::Solid(theme.stacked_color(i).to_string())),
            ..Default::default()
        })
        .collect();

    let stacked = || {
        Some(Scale {
            stacked: Some(true),
            ..Default::default()
        })
    };
    let plugins = Plugins {
        legend: LegendSpec {
            display: true,
            position: Some(LegendPosition::Top),
            labels: None,
        },
        tooltip: None,
    };
    let scales = Scales {
        x: stacked(),
        y: stacked(),
        r: None,
    };

    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: series.labels().to_vec(),
            datasets,
        },
        options: options(theme, plugins, scales),
    }
}
