// SPDX-License-Identifier: MIT OR Apache-2.0

use cohortdash_ui::components::config_error::ConfigError;
use cohortdash_ui::components::dashboard::Dashboard;
use cohortdash_ui::constants::dashboard_config;
use dioxus::prelude::*;

/// App root component
#[component]
fn App() -> Element {
    match dashboard_config() {
        Ok(config) => rsx! {
            Dashboard { config }
        },
        Err(message) => rsx! {
            ConfigError { message }
        },
    }
}

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger already set: {e}").into());
    }

    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
