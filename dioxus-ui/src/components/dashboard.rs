/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use cohortdash_core::{
    default_sections, ChartTheme, DashboardConfig, DashboardState, Orchestrator, SectionId,
};
use dioxus::prelude::*;

use crate::constants::stats_api_client;
use crate::renderer::DomRenderer;

/// Chart panels in page order, with their card headings.
pub const CHART_PANELS: [(SectionId, &str); 9] = [
    (SectionId::DiagnosisCounts, "Diagnosis Distribution"),
    (SectionId::Age, "Age Distribution"),
    (SectionId::Bmi, "BMI by Diagnosis"),
    (SectionId::Education, "Education vs Diagnosis"),
    (SectionId::Smoking, "Smoking"),
    (SectionId::Alcohol, "Alcohol Consumption"),
    (SectionId::Activity, "Physical Activity"),
    (SectionId::Cognitive, "MMSE by Diagnosis"),
    (SectionId::Radar, "Lifestyle Profile"),
];

/// Static page skeleton. Every section slot exists before the load starts.
#[component]
pub fn DashboardLayout(loading: bool, banner: Option<String>) -> Element {
    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                h1 { "Alzheimer's Cohort Dashboard" }
            }
            if loading {
                div { class: "loading", "Loading statistics..." }
            }
            {banner.map(|message| rsx! {
                div { class: "error-banner", "{message}" }
            })}
            div { id: SectionId::Summary.slot(), class: "summary-cards" }
            div { class: "chart-grid",
                for (id , heading) in CHART_PANELS {
                    div { key: "{id}", class: "chart-card",
                        h3 { "{heading}" }
                        canvas { id: id.slot() }
                    }
                }
            }
            div { class: "chart-card corr-card",
                h3 { "Top Correlations with Diagnosis" }
                div { id: SectionId::Correlation.slot() }
            }
        }
    }
}

/// Loads every section once, after the layout is mounted.
#[component]
pub fn Dashboard(config: DashboardConfig) -> Element {
    let mut state = use_signal(|| DashboardState::Loading);

    use_effect(move || {
        let config = config.clone();
        spawn(async move {
            let orchestrator = Orchestrator::new(
                stats_api_client(&config),
                DomRenderer::new(),
                default_sections(&config),
                ChartTheme::default(),
            );
            state.set(orchestrator.run().await);
        });
    });

    let (loading, banner) = match &*state.read() {
        DashboardState::Loading => (true, None),
        DashboardState::Ready(_) => (false, None),
        DashboardState::Failed(err) => (false, Some(err.user_message().to_string())),
    };

    rsx! {
        DashboardLayout { loading, banner }
    }
}
