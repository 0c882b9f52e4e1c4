// SPDX-License-Identifier: MIT OR Apache-2.0

//! `probe` mode: is the statistics service up, and what does it hold?

use cohortdash_client::StatsApiClient;
use cohortdash_types::{paths, SummaryResponse};
use tracing::debug;

use crate::cli_args::Probe;

pub async fn probe(args: &Probe) -> anyhow::Result<SummaryResponse> {
    let client = StatsApiClient::new(&args.connection.api_base_url);
    debug!(url = %client.url(paths::SUMMARY), "probing");
    let summary = client.fetch::<SummaryResponse>(paths::SUMMARY).await?;
    Ok(summary)
}

pub fn describe(summary: &SummaryResponse) -> String {
    let percent = summary
        .percent_alzheimer
        .map(|p| format!("{p}%"))
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "patients: {}  alzheimer: {percent}  mean age: {}  male/female: {}%/{}%",
        summary.total, summary.mean_age, summary.gender_male, summary.gender_female
    )
}
