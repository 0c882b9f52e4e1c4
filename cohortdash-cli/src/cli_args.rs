// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cohortdash_core::ranker::DEFAULT_TOP_N;
use cohortdash_core::{parse_section_list, DashboardConfig, UnknownSection};
use cohortdash_types::paths;

/// Cohort dashboard CLI
///
/// Runs the dashboard load against a live statistics service without a
/// browser and writes what each section would have drawn.
#[derive(Parser, Debug)]
#[clap(name = "cohortdash")]
pub struct Opt {
    #[clap(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Load every section and write chart specs and markup.
    Snapshot(Snapshot),

    /// Fetch the cohort summary and print it.
    Probe(Probe),
}

#[derive(Args, Debug, Clone)]
pub struct Connection {
    /// Base URL of the statistics service.
    #[clap(
        long = "api-base-url",
        env = "COHORTDASH_API_BASE_URL",
        default_value = "http://127.0.0.1:5000"
    )]
    pub api_base_url: String,
}

#[derive(Args, Debug, Clone)]
pub struct Snapshot {
    #[clap(flatten)]
    pub connection: Connection,

    /// Path of the correlation endpoint.
    #[clap(
        long = "correlation-path",
        env = "COHORTDASH_CORRELATION_PATH",
        default_value = paths::CORRELATION_DIAGNOSIS
    )]
    pub correlation_path: String,

    /// Number of correlation rows to keep.
    #[clap(long = "top-n", env = "COHORTDASH_TOP_N", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Comma separated sections allowed to fail on their own.
    ///
    /// Pass an empty string to make every section mandatory.
    #[clap(
        long = "optional-sections",
        env = "COHORTDASH_OPTIONAL_SECTIONS",
        default_value = "smoking,alcohol,activity"
    )]
    pub optional_sections: String,

    /// Directory for `<slot>.json`, `<slot>.html` and `report.json`.
    ///
    /// Without it a one-line summary per section is printed.
    #[clap(long = "out-dir", short = 'o')]
    pub out_dir: Option<PathBuf>,
}

impl Snapshot {
    pub fn dashboard_config(&self) -> Result<DashboardConfig, UnknownSection> {
        Ok(DashboardConfig {
            base_url: self.connection.api_base_url.clone(),
            correlation_path: self.correlation_path.clone(),
            top_n: self.top_n,
            optional_sections: parse_section_list(&self.optional_sections)?,
        })
    }
}

#[derive(Args, Debug, Clone)]
pub struct Probe {
    #[clap(flatten)]
    pub connection: Connection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohortdash_core::SectionId;

    #[test]
    fn snapshot_defaults() {
        let opt = Opt::parse_from(["cohortdash", "snapshot"]);
        let Mode::Snapshot(snapshot) = opt.mode else {
            panic!("expected snapshot mode");
        };
        let config = snapshot.dashboard_config().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.correlation_path, "/api/correlation_diagnosis");
        assert_eq!(config.top_n, 5);
        assert_eq!(
            config.optional_sections,
            [SectionId::Smoking, SectionId::Alcohol, SectionId::Activity]
        );
        assert!(snapshot.out_dir.is_none());
    }

    #[test]
    fn empty_optional_list_is_strict_mode() {
        let opt = Opt::parse_from(["cohortdash", "snapshot", "--optional-sections", ""]);
        let Mode::Snapshot(snapshot) = opt.mode else {
            panic!("expected snapshot mode");
        };
        assert!(snapshot
            .dashboard_config()
            .unwrap()
            .optional_sections
            .is_empty());
    }

    #[test]
    fn unknown_section_is_rejected() {
        let opt = Opt::parse_from([
            "cohortdash",
            "snapshot",
            "--optional-sections",
            "smoking,naps",
        ]);
        let Mode::Snapshot(snapshot) = opt.mode else {
            panic!("expected snapshot mode");
        };
        assert!(snapshot.dashboard_config().is_err());
    }
}
