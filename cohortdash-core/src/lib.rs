// SPDX-License-Identifier: MIT OR Apache-2.0

//! Load pipeline for the cohort statistics dashboard.
//!
//! The dashboard is a fixed sequence of *sections*. Each section fetches one
//! endpoint, reshapes the payload into a series, builds a declarative chart
//! spec (or an HTML fragment) and hands it to a [`Renderer`]. Optional
//! sections fail in isolation; a mandatory failure stops the load and yields a
//! single [`DashboardError`].
//!
//! Nothing here touches the DOM: the browser crate supplies a `Renderer` that
//! writes into the page, the CLI supplies one that writes files.

pub mod adapters;
pub mod chart;
pub mod config;
pub mod error;
pub mod labels;
pub mod markup;
pub mod orchestrator;
pub mod ranker;
pub mod section;
pub mod series;
pub mod theme;

pub use chart::ChartSpec;
pub use config::{parse_section_list, DashboardConfig};
pub use error::{DashboardError, RenderError, SectionError, ShapeError};
pub use labels::{DiagnosisLabelMap, DIAGNOSIS_LABELS};
pub use orchestrator::{
    DashboardState, LoadReport, Orchestrator, Renderer, SkippedSection, StatsSource,
};
pub use section::{
    default_sections, Requirement, SectionDescriptor, SectionId, SectionOutput, UnknownSection,
};
pub use theme::ChartTheme;
