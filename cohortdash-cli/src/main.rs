// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use cohortdash_cli::cli_args::{Mode, Opt};
use cohortdash_cli::probe::{describe, probe};
use cohortdash_cli::snapshot::snapshot;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .finish()
        .try_init()?;

    let opt = Opt::parse();

    match opt.mode {
        Mode::Snapshot(s) => {
            let report = snapshot(&s).await?;
            println!(
                "{} sections rendered, {} skipped",
                report.rendered.len(),
                report.skipped.len()
            );
        }
        Mode::Probe(p) => {
            let summary = probe(&p).await?;
            println!("{}", describe(&summary));
        }
    };

    Ok(())
}
