// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sequential load of every section: fetch, adapt, build, render.

use cohortdash_client::{FetchError, StatsApiClient};
use futures::future::{FutureExt, LocalBoxFuture};
use log::{error, info, warn};
use serde_json::Value;

use crate::error::{DashboardError, RenderError, SectionError};
use crate::labels::DiagnosisLabelMap;
use crate::section::{SectionDescriptor, SectionId, SectionOutput};
use crate::theme::ChartTheme;

/// Where section payloads come from.
pub trait StatsSource {
    fn fetch_json<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<Value, FetchError>>;
}

impl<S: StatsSource + ?Sized> StatsSource for &S {
    fn fetch_json<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<Value, FetchError>> {
        (**self).fetch_json(path)
    }
}

impl StatsSource for StatsApiClient {
    fn fetch_json<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<Value, FetchError>> {
        StatsApiClient::fetch_json(self, path).boxed_local()
    }
}

/// Where built sections go.
pub trait Renderer {
    fn render(
        &mut self,
        section: &SectionDescriptor,
        output: SectionOutput,
    ) -> Result<(), RenderError>;

    /// Called when an optional section is skipped. The slot stays empty by
    /// default.
    fn section_skipped(&mut self, _section: &SectionDescriptor, _error: &SectionError) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(
        &mut self,
        section: &SectionDescriptor,
        output: SectionOutput,
    ) -> Result<(), RenderError> {
        (**self).render(section, output)
    }

    fn section_skipped(&mut self, section: &SectionDescriptor, error: &SectionError) {
        (**self).section_skipped(section, error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSection {
    pub id: SectionId,
    pub reason: String,
}

/// Outcome of a load in which no mandatory section failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rendered: Vec<SectionId>,
    pub skipped: Vec<SkippedSection>,
}

#[derive(Debug)]
pub enum DashboardState {
    Loading,
    Ready(LoadReport),
    Failed(DashboardError),
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn failure(&self) -> Option<&DashboardError> {
        match self {
            DashboardState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Drives one dashboard load. Consumed by [`Orchestrator::run`], so a load
/// cannot be started twice.
pub struct Orchestrator<S, R> {
    source: S,
    renderer: R,
    sections: Vec<SectionDescriptor>,
    theme: ChartTheme,
    labels: DiagnosisLabelMap,
}

impl<S: StatsSource, R: Renderer> Orchestrator<S, R> {
    pub fn new(source: S, renderer: R, sections: Vec<SectionDescriptor>, theme: ChartTheme) -> Self {
        Self {
            source,
            renderer,
            sections,
            theme,
            labels: DiagnosisLabelMap::default(),
        }
    }

    pub fn with_labels(mut self, labels: DiagnosisLabelMap) -> Self {
        self.labels = labels;
        self
    }

    /// Load every section in order.
    ///
    /// Optional failures are logged and recorded in the report. The first
    /// mandatory failure stops the load; sections after it are never fetched.
    pub async fn run(self) -> DashboardState {
        let Orchestrator {
            source,
            mut renderer,
            sections,
            theme,
            labels,
        } = self;

        info!("loading {} dashboard sections", sections.len());
        let mut report = LoadReport::default();
        for section in &sections {
            match load_section(&source, &mut renderer, section, &theme, &labels).await {
                Ok(()) => {
                    info!("rendered section {}", section.id);
                    report.rendered.push(section.id);
                }
                Err(err) if section.is_mandatory() => {
                    error!("section {} failed, aborting load: {err}", section.id);
                    return DashboardState::Failed(DashboardError {
                        section: section.id,
                        source: err,
                    });
                }
                Err(err) => {
                    warn!("optional section {} skipped: {err}", section.id);
                    renderer.section_skipped(section, &err);
                    report.skipped.push(SkippedSection {
                        id: section.id,
                        reason: err.to_string(),
                    });
                }
            }
        }
        info!(
            "dashboard loaded: {} rendered, {} skipped",
            report.rendered.len(),
            report.skipped.len()
        );
        DashboardState::Ready(report)
    }
}

async fn load_section<S: StatsSource, R: Renderer>(
    source: &S,
    renderer: &mut R,
    section: &SectionDescriptor,
    theme: &ChartTheme,
    labels: &DiagnosisLabelMap,
) -> Result<(), SectionError> {
    let payload = source.fetch_json(&section.path).await?;
    let output = section.build(&payload, theme, labels)?;
    renderer.render(section, output)?;
    Ok(())
}
