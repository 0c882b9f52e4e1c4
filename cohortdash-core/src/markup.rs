// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML fragments for the summary cards and the correlation table.
//!
//! Both are written verbatim into their target element, so every string that
//! came from the service is escaped.

use html_escape::encode_text;

use crate::ranker::RankedCorrelation;
use crate::series::SummaryStats;
use crate::theme::CorrelationColors;

fn card(out: &mut String, icon: &str, value: &str, caption: &str) {
    out.push_str(&format!(
        r#"<div class="summ-card"><div>{icon}</div><div>{value}</div><span>{caption}</span></div>"#
    ));
}

/// The four headline cards. Numbers are printed as received.
pub fn summary_cards(stats: &SummaryStats) -> String {
    let mut out = String::new();
    card(&mut out, "👥", &stats.total.to_string(), "Total Patients");
    let percent = stats
        .percent_alzheimer
        .map(|p| format!("{p}%"))
        .unwrap_or_else(|| "n/a".to_string());
    card(&mut out, "🏥", &percent, "Alzheimer %");
    card(&mut out, "📅", &stats.mean_age.to_string(), "Mean Age");
    out.push_str(&format!(
        r#"<div class="summ-card"><div>⚖️</div><div style="font-size: 1.2rem;"><div class="gender-row male">M: {}%</div><div class="gender-row female">F: {}%</div></div><span>Gender Ratio</span></div>"#,
        stats.gender_male, stats.gender_female
    ));
    out
}

/// Feature/correlation table, one row per ranked entry.
pub fn correlation_table(ranked: &[RankedCorrelation], colors: &CorrelationColors) -> String {
    let mut out =
        String::from(r#"<table class="corr"><tr><th>Feature</th><th>Correlation</th></tr>"#);
    for entry in ranked {
        out.push_str(&format!(
            r#"<tr><td>{}</td><td style="background:{}; color:white; font-weight:600;">{}</td></tr>"#,
            encode_text(&entry.feature),
            colors.fill(entry.polarity, entry.intensity),
            entry.value
        ));
    }
    out.push_str("</table>");
    out
}
