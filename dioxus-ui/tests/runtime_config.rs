// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// window.__APP_CONFIG parsing.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use cohortdash_client::FetchError;
use cohortdash_core::{DashboardConfig, SectionId};
use cohortdash_ui::constants::{app_config, dashboard_config, resolve_base_url, stats_api_client};
use support::{inject_app_config, remove_app_config};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn missing_config_is_reported() {
    remove_app_config();
    let err = app_config().unwrap_err();
    assert!(err.contains("__APP_CONFIG missing"));
}

#[wasm_bindgen_test]
fn base_url_only_uses_defaults() {
    inject_app_config(&[("statsApiBaseUrl", JsValue::from_str("http://stats:5000"))]);

    let config = dashboard_config().unwrap();
    assert_eq!(config.base_url, "http://stats:5000");
    assert_eq!(config.correlation_path, "/api/correlation_diagnosis");
    assert_eq!(config.top_n, 5);
    assert_eq!(
        config.optional_sections,
        [SectionId::Smoking, SectionId::Alcohol, SectionId::Activity]
    );
    remove_app_config();
}

#[wasm_bindgen_test]
fn overrides_are_applied() {
    inject_app_config(&[
        ("statsApiBaseUrl", JsValue::from_str("")),
        ("correlationPath", JsValue::from_str("/correlation_diagnosis")),
        ("topN", JsValue::from(3)),
        ("optionalSections", JsValue::from_str("")),
    ]);

    let config = dashboard_config().unwrap();
    assert_eq!(config.base_url, "");
    assert_eq!(config.correlation_path, "/correlation_diagnosis");
    assert_eq!(config.top_n, 3);
    assert!(config.optional_sections.is_empty());
    remove_app_config();
}

#[wasm_bindgen_test]
fn unknown_optional_section_is_rejected() {
    inject_app_config(&[
        ("statsApiBaseUrl", JsValue::from_str("")),
        ("optionalSections", JsValue::from_str("smoking,sleep")),
    ]);

    let err = dashboard_config().unwrap_err();
    assert!(err.contains("sleep"));
    remove_app_config();
}

#[wasm_bindgen_test]
fn empty_base_url_resolves_to_the_page_origin() {
    let origin = gloo_utils::window().location().origin().unwrap();
    assert!(origin.starts_with("http"), "unexpected origin {origin}");

    let client = stats_api_client(&DashboardConfig::default());
    assert_eq!(client.base_url(), origin);
    assert_eq!(client.url("/api/summary"), format!("{origin}/api/summary"));
}

#[wasm_bindgen_test]
fn configured_base_url_wins_over_the_origin() {
    assert_eq!(
        resolve_base_url("http://stats:5000", Some("http://page:8080".to_string())),
        "http://stats:5000"
    );
    assert_eq!(
        resolve_base_url("", Some("http://page:8080".to_string())),
        "http://page:8080"
    );
    assert_eq!(resolve_base_url("", None), "");
}

#[wasm_bindgen_test]
async fn same_origin_request_reaches_the_page_server() {
    let client = stats_api_client(&DashboardConfig::default());
    let result = client.fetch_json("/api/summary").await;
    // The test page server has no such route; any HTTP answer proves the
    // request left the browser.
    assert!(
        !matches!(
            result,
            Err(FetchError::Config(_)) | Err(FetchError::Transport { .. })
        ),
        "request was not sent: {result:?}"
    );
}
