// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end load tests against an in-memory source.

use std::cell::RefCell;
use std::collections::HashMap;

use cohortdash_client::FetchError;
use cohortdash_core::chart::Fill;
use cohortdash_core::{
    default_sections, ChartTheme, DashboardConfig, DashboardState, Orchestrator, RenderError,
    Renderer, SectionDescriptor, SectionError, SectionId, SectionOutput, StatsSource,
};
use cohortdash_types::paths;
use futures::future::{FutureExt, LocalBoxFuture};
use serde_json::{json, Value};

#[derive(Default)]
struct FakeSource {
    payloads: HashMap<String, Value>,
    failing: HashMap<String, u16>,
    requested: RefCell<Vec<String>>,
}

impl FakeSource {
    fn healthy() -> Self {
        let mut source = FakeSource::default();
        let fixtures = [
            (
                paths::SUMMARY,
                json!({"total": 2149, "percent_alzheimer": 35.4, "mean_age": 74.9,
                       "gender_male": 49.4, "gender_female": 50.6}),
            ),
            (
                paths::DIAGNOSIS_COUNTS,
                json!({"labels": ["0", "1"], "values": [1389, 760]}),
            ),
            (
                paths::AGE_DISTRIBUTION,
                json!({"labels": ["60-69", "70-79", "80-89"], "values": [600, 900, 649]}),
            ),
            (paths::BMI_STATS, json!({"0": {"mean": 27.6}, "1": {"mean": 27.7}})),
            (
                paths::EDUCATION_VS_DIAGNOSIS,
                json!({"labels": ["None", "High School"], "no_dementia": [200, 500],
                       "dementia": [120, 260]}),
            ),
            (paths::SMOKING_BY_DIAG, json!({"0": {"mean": 0.29}, "1": {"mean": 0.28}})),
            (paths::ALCOHOL_STATS, json!({"0": {"median": 9.9}, "1": {"median": 10.1}})),
            (paths::ACTIVITY_BY_DIAG, json!({"0": 4.9, "1": 4.9})),
            (
                paths::COGNITIVE_STATS,
                json!({"0": {"MMSE": {"mean": 16.3}}, "1": {"MMSE": {"mean": 11.9}}}),
            ),
            (
                paths::RADAR_DATA,
                json!({"labels": ["BMI", "Sleep"], "datasets": [
                    {"label": "0", "data": [0.5, 0.6]},
                    {"label": "1", "data": [0.4, 0.7]}
                ]}),
            ),
            (
                paths::CORRELATION_DIAGNOSIS,
                json!({"features": ["age", "bmi", "mmse", "sleep"],
                       "values": [0.1, -0.9, 0.85, 0.05]}),
            ),
        ];
        for (path, payload) in fixtures {
            source.payloads.insert(path.to_string(), payload);
        }
        source
    }

    fn failing(mut self, path: &str, status: u16) -> Self {
        self.failing.insert(path.to_string(), status);
        self
    }

    fn replace(mut self, path: &str, payload: Value) -> Self {
        self.payloads.insert(path.to_string(), payload);
        self
    }

    fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl StatsSource for FakeSource {
    fn fetch_json<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<Value, FetchError>> {
        self.requested.borrow_mut().push(path.to_string());
        let result = match (self.failing.get(path), self.payloads.get(path)) {
            (Some(status), _) => Err(FetchError::Status {
                url: path.to_string(),
                status: *status,
                body: String::new(),
            }),
            (None, Some(payload)) => Ok(payload.clone()),
            (None, None) => Err(FetchError::Status {
                url: path.to_string(),
                status: 404,
                body: String::new(),
            }),
        };
        async move { result }.boxed_local()
    }
}

#[derive(Default)]
struct RecordingRenderer {
    rendered: Vec<(SectionId, SectionOutput)>,
    skipped: Vec<SectionId>,
    refuse: Option<SectionId>,
}

impl RecordingRenderer {
    fn output(&self, id: SectionId) -> Option<&SectionOutput> {
        self.rendered
            .iter()
            .find(|(rendered, _)| *rendered == id)
            .map(|(_, output)| output)
    }
}

impl Renderer for RecordingRenderer {
    fn render(
        &mut self,
        section: &SectionDescriptor,
        output: SectionOutput,
    ) -> Result<(), RenderError> {
        if self.refuse == Some(section.id) {
            return Err(RenderError(format!("no element #{}", section.slot())));
        }
        self.rendered.push((section.id, output));
        Ok(())
    }

    fn section_skipped(&mut self, section: &SectionDescriptor, _error: &SectionError) {
        self.skipped.push(section.id);
    }
}

async fn load(
    source: &FakeSource,
    renderer: &mut RecordingRenderer,
    config: &DashboardConfig,
) -> DashboardState {
    Orchestrator::new(
        source,
        renderer,
        default_sections(config),
        ChartTheme::default(),
    )
    .run()
    .await
}

#[tokio::test]
async fn healthy_service_renders_every_section_in_order() {
    let source = FakeSource::healthy();
    let mut renderer = RecordingRenderer::default();

    let state = load(&source, &mut renderer, &DashboardConfig::default()).await;

    let DashboardState::Ready(report) = state else {
        panic!("expected a ready dashboard");
    };
    assert_eq!(report.rendered, SectionId::ALL);
    assert!(report.skipped.is_empty());
    let order: Vec<SectionId> = renderer.rendered.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, SectionId::ALL);
    assert_eq!(source.requested().len(), 11);
}

#[tokio::test]
async fn diagnosis_counts_are_relabelled_with_gradient_fill() {
    let source = FakeSource::healthy();
    let mut renderer = RecordingRenderer::default();

    load(&source, &mut renderer, &DashboardConfig::default()).await;

    let Some(SectionOutput::Chart(spec)) = renderer.output(SectionId::DiagnosisCounts) else {
        panic!("diagnosis counts did not render a chart");
    };
    assert_eq!(spec.data.labels, ["No Dementia", "Dementia"]);
    assert_eq!(spec.data.datasets[0].data, [1389.0, 760.0]);
    assert!(matches!(
        spec.data.datasets[0].background_color,
        Some(Fill::Gradient { .. })
    ));
}

#[tokio::test]
async fn optional_failure_leaves_its_slot_empty() {
    let source = FakeSource::healthy().failing(paths::SMOKING_BY_DIAG, 500);
    let mut renderer = RecordingRenderer::default();

    let state = load(&source, &mut renderer, &DashboardConfig::default()).await;

    let DashboardState::Ready(report) = state else {
        panic!("optional failure must not fail the dashboard");
    };
    assert_eq!(report.rendered.len(), 10);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].id, SectionId::Smoking);
    assert!(report.skipped[0].reason.contains("500"));
    assert_eq!(renderer.skipped, [SectionId::Smoking]);
    assert!(renderer.output(SectionId::Smoking).is_none());
    assert!(renderer.output(SectionId::Correlation).is_some());
}

#[tokio::test]
async fn optional_shape_error_is_isolated_too() {
    let source = FakeSource::healthy().replace(paths::ALCOHOL_STATS, json!([1, 2, 3]));
    let mut renderer = RecordingRenderer::default();

    let state = load(&source, &mut renderer, &DashboardConfig::default()).await;

    let DashboardState::Ready(report) = state else {
        panic!("expected a ready dashboard");
    };
    assert_eq!(report.skipped[0].id, SectionId::Alcohol);
    assert!(renderer.output(SectionId::Activity).is_some());
}

#[tokio::test]
async fn mandatory_failure_stops_the_load_with_one_error() {
    let source = FakeSource::healthy().failing(paths::BMI_STATS, 503);
    let mut renderer = RecordingRenderer::default();

    let state = load(&source, &mut renderer, &DashboardConfig::default()).await;

    let err = state.failure().expect("dashboard should fail");
    assert_eq!(err.section, SectionId::Bmi);
    assert!(matches!(
        err.source,
        SectionError::Fetch(FetchError::Status { status: 503, .. })
    ));
    assert!(err.user_message().starts_with("Failed to load dashboard data"));

    let order: Vec<SectionId> = renderer.rendered.iter().map(|(id, _)| *id).collect();
    assert_eq!(
        order,
        [SectionId::Summary, SectionId::DiagnosisCounts, SectionId::Age]
    );
    assert_eq!(source.requested().last().map(String::as_str), Some(paths::BMI_STATS));
}

#[tokio::test]
async fn mandatory_shape_error_fails_the_dashboard() {
    let source = FakeSource::healthy().replace(paths::RADAR_DATA, json!({"labels": ["a"]}));
    let mut renderer = RecordingRenderer::default();

    let state = load(&source, &mut renderer, &DashboardConfig::default()).await;

    let err = state.failure().expect("dashboard should fail");
    assert_eq!(err.section, SectionId::Radar);
    assert!(matches!(err.source, SectionError::Shape(_)));
    assert!(renderer.output(SectionId::Correlation).is_none());
}

#[tokio::test]
async fn render_error_on_mandatory_section_fails_the_dashboard() {
    let source = FakeSource::healthy();
    let mut renderer = RecordingRenderer {
        refuse: Some(SectionId::Education),
        ..RecordingRenderer::default()
    };

    let state = load(&source, &mut renderer, &DashboardConfig::default()).await;

    let err = state.failure().expect("dashboard should fail");
    assert_eq!(err.section, SectionId::Education);
    assert!(matches!(err.source, SectionError::Render(_)));
}

#[tokio::test]
async fn strict_mode_fails_on_any_section() {
    let source = FakeSource::healthy().failing(paths::ACTIVITY_BY_DIAG, 500);
    let mut renderer = RecordingRenderer::default();
    let config = DashboardConfig {
        optional_sections: Vec::new(),
        ..DashboardConfig::default()
    };

    let state = load(&source, &mut renderer, &config).await;

    assert_eq!(
        state.failure().map(|err| err.section),
        Some(SectionId::Activity)
    );
}

#[tokio::test]
async fn correlation_table_keeps_the_strongest_features() {
    let source = FakeSource::healthy();
    let mut renderer = RecordingRenderer::default();
    let config = DashboardConfig {
        top_n: 2,
        ..DashboardConfig::default()
    };

    load(&source, &mut renderer, &config).await;

    let Some(SectionOutput::Markup(html)) = renderer.output(SectionId::Correlation) else {
        panic!("correlation did not render markup");
    };
    assert_eq!(html.matches("<tr><td>").count(), 2);
    let bmi = html.find("<td>bmi</td>").expect("bmi row");
    let mmse = html.find("<td>mmse</td>").expect("mmse row");
    assert!(bmi < mmse);
    assert!(!html.contains("<td>age</td>"));
}

#[tokio::test]
async fn legacy_correlation_path_is_configurable() {
    let correlation = FakeSource::healthy()
        .payloads
        .remove(paths::CORRELATION_DIAGNOSIS)
        .expect("fixture");
    let source = FakeSource::healthy().replace(paths::CORRELATION_DIAGNOSIS_LEGACY, correlation);
    let mut renderer = RecordingRenderer::default();
    let config = DashboardConfig {
        correlation_path: paths::CORRELATION_DIAGNOSIS_LEGACY.to_string(),
        ..DashboardConfig::default()
    };

    let state = load(&source, &mut renderer, &config).await;

    assert!(matches!(state, DashboardState::Ready(_)));
    assert!(source
        .requested()
        .iter()
        .any(|path| path == paths::CORRELATION_DIAGNOSIS_LEGACY));
}
