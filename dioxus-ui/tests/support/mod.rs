// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for cohortdash-ui browser tests.
//
// Provides mount/cleanup helpers, runtime config injection and a stand-in
// for the Chart.js global so that individual test files stay focused on
// assertions rather than boilerplate.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Attach an element with the given tag and id to `mount`.
pub fn add_slot(mount: &web_sys::Element, tag: &str, id: &str) -> web_sys::Element {
    let el = gloo_utils::document().create_element(tag).unwrap();
    el.set_id(id);
    mount.append_child(&el).unwrap();
    el
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Dioxus rendering helper
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element.
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Yield two animation frames so Dioxus can flush its initial mutations.
pub async fn yield_now() {
    for _ in 0..2 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` object built from `entries`.
pub fn inject_app_config(entries: &[(&str, JsValue)]) {
    let config = js_sys::Object::new();
    for (key, val) in entries {
        js_sys::Reflect::set(&config, &(*key).into(), val).unwrap();
    }
    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Chart.js stand-in
// ---------------------------------------------------------------------------

/// Install a `window.Chart` constructor that records its arguments on
/// `window.__lastChart` instead of drawing.
pub fn mock_chart_js() {
    js_sys::eval(
        r#"
        window.__original_chart = window.__original_chart || window.Chart;
        window.Chart = function(ctx, config) {
            window.__lastChart = { ctx: ctx, config: config };
        };
        "#,
    )
    .expect("failed to mock Chart.js");
}

pub fn remove_chart_js() {
    js_sys::eval(
        r#"
        window.Chart = window.__original_chart;
        delete window.__original_chart;
        delete window.__lastChart;
        "#,
    )
    .expect("failed to remove Chart.js mock");
}

/// Evaluate a JS expression against the recorded chart.
pub fn last_chart(expr: &str) -> JsValue {
    js_sys::eval(&format!("(function(c) {{ return {expr}; }})(window.__lastChart)"))
        .expect("failed to inspect recorded chart")
}
