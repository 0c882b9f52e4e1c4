/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

#[component]
pub fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "error-container",
            p { class: "error-message", "{message}" }
            p {
                "Define "
                code { "window.__APP_CONFIG" }
                " with at least "
                code { "statsApiBaseUrl" }
                " (an empty string means same origin) before loading the dashboard."
            }
        }
    }
}
