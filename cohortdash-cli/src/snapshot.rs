// SPDX-License-Identifier: MIT OR Apache-2.0

//! `snapshot` mode: the dashboard load with files or stdout as the page.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cohortdash_client::StatsApiClient;
use cohortdash_core::{
    default_sections, ChartTheme, DashboardState, LoadReport, Orchestrator, RenderError, Renderer,
    SectionDescriptor, SectionError, SectionOutput,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli_args::Snapshot;

/// Name of the summary file written next to the section files.
pub const REPORT_FILE: &str = "report.json";

/// Writes `<slot>.json` for charts and `<slot>.html` for markup.
pub struct FileRenderer {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write(&mut self, file_name: String, contents: &str) -> Result<(), RenderError> {
        let path = self.out_dir.join(file_name);
        fs::write(&path, contents)
            .map_err(|e| RenderError(format!("writing {}: {e}", path.display())))?;
        self.written.push(path);
        Ok(())
    }
}

impl Renderer for FileRenderer {
    fn render(
        &mut self,
        section: &SectionDescriptor,
        output: SectionOutput,
    ) -> Result<(), RenderError> {
        match output {
            SectionOutput::Chart(spec) => {
                let json = serde_json::to_string_pretty(&spec)
                    .map_err(|e| RenderError(format!("serializing {}: {e}", section.id)))?;
                self.write(format!("{}.json", section.slot()), &json)
            }
            SectionOutput::Markup(html) => self.write(format!("{}.html", section.slot()), &html),
        }
    }
}

/// Collects one line per section for printing.
#[derive(Debug, Default)]
pub struct SummaryRenderer {
    pub lines: Vec<String>,
}

impl Renderer for SummaryRenderer {
    fn render(
        &mut self,
        section: &SectionDescriptor,
        output: SectionOutput,
    ) -> Result<(), RenderError> {
        let line = match output {
            SectionOutput::Chart(spec) => format!(
                "{:<18} chart   {} labels, {} datasets",
                section.id.key(),
                spec.data.labels.len(),
                spec.data.datasets.len()
            ),
            SectionOutput::Markup(html) => {
                format!("{:<18} markup  {} bytes", section.id.key(), html.len())
            }
        };
        self.lines.push(line);
        Ok(())
    }

    fn section_skipped(&mut self, section: &SectionDescriptor, error: &SectionError) {
        self.lines
            .push(format!("{:<18} skipped {error}", section.id.key()));
    }
}

#[derive(Debug, Serialize)]
struct ReportFile<'a> {
    rendered: Vec<&'a str>,
    skipped: Vec<SkippedEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct SkippedEntry<'a> {
    section: &'a str,
    reason: &'a str,
}

/// Write `report.json` for a finished load.
pub fn write_report(out_dir: &Path, report: &LoadReport) -> anyhow::Result<PathBuf> {
    let file = ReportFile {
        rendered: report.rendered.iter().map(|id| id.key()).collect(),
        skipped: report
            .skipped
            .iter()
            .map(|s| SkippedEntry {
                section: s.id.key(),
                reason: &s.reason,
            })
            .collect(),
    };
    let path = out_dir.join(REPORT_FILE);
    fs::write(&path, serde_json::to_string_pretty(&file)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn finish(state: DashboardState) -> anyhow::Result<LoadReport> {
    match state {
        DashboardState::Ready(report) => {
            for skipped in &report.skipped {
                warn!(section = %skipped.id, reason = %skipped.reason, "section skipped");
            }
            Ok(report)
        }
        DashboardState::Failed(err) => {
            let message = err.user_message();
            Err(anyhow::Error::new(err).context(message))
        }
        DashboardState::Loading => anyhow::bail!("dashboard load did not finish"),
    }
}

/// Run one load as described by `args`.
pub async fn snapshot(args: &Snapshot) -> anyhow::Result<LoadReport> {
    let config = args.dashboard_config()?;
    let client = StatsApiClient::new(&config.base_url);
    let sections = default_sections(&config);
    info!(base_url = %client.base_url(), sections = sections.len(), "starting snapshot");

    match &args.out_dir {
        Some(out_dir) => {
            fs::create_dir_all(out_dir)
                .with_context(|| format!("creating {}", out_dir.display()))?;
            let mut renderer = FileRenderer::new(out_dir);
            let state = Orchestrator::new(&client, &mut renderer, sections, ChartTheme::default())
                .run()
                .await;
            let report = finish(state)?;
            let report_path = write_report(out_dir, &report)?;
            info!(
                files = renderer.written().len(),
                report = %report_path.display(),
                "snapshot written"
            );
            Ok(report)
        }
        None => {
            let mut renderer = SummaryRenderer::default();
            let state = Orchestrator::new(&client, &mut renderer, sections, ChartTheme::default())
                .run()
                .await;
            for line in &renderer.lines {
                println!("{line}");
            }
            finish(state)
        }
    }
}
