// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// The dashboard skeleton exposes every section slot before loading.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use cohortdash_core::SectionId;
use cohortdash_ui::components::config_error::ConfigError;
use cohortdash_ui::components::dashboard::DashboardLayout;
use dioxus::prelude::*;
use support::{cleanup, create_mount_point, render_into, yield_now};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn loading_layout() -> Element {
    rsx! {
        DashboardLayout { loading: true }
    }
}

fn failed_layout() -> Element {
    rsx! {
        DashboardLayout { loading: false, banner: "Failed to load dashboard data.".to_string() }
    }
}

fn config_error() -> Element {
    rsx! {
        ConfigError { message: "Runtime configuration not found".to_string() }
    }
}

#[wasm_bindgen_test]
async fn every_section_has_a_slot() {
    let mount = create_mount_point();
    render_into(&mount, loading_layout);
    yield_now().await;

    for id in SectionId::ALL {
        assert!(
            mount.query_selector(&format!("#{}", id.slot())).unwrap().is_some(),
            "missing slot for {id}"
        );
    }
    assert_eq!(mount.query_selector_all("canvas").unwrap().length(), 9);
    assert!(mount.query_selector(".loading").unwrap().is_some());
    assert!(mount.query_selector(".error-banner").unwrap().is_none());
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn failure_shows_a_single_banner() {
    let mount = create_mount_point();
    render_into(&mount, failed_layout);
    yield_now().await;

    let banners = mount.query_selector_all(".error-banner").unwrap();
    assert_eq!(banners.length(), 1);
    assert!(mount.query_selector(".loading").unwrap().is_none());
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn config_error_panel_shows_the_message() {
    let mount = create_mount_point();
    render_into(&mount, config_error);
    yield_now().await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Runtime configuration not found"));
    cleanup(&mount);
}
