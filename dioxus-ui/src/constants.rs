// SPDX-License-Identifier: MIT OR Apache-2.0

use cohortdash_client::StatsApiClient;
use cohortdash_core::{parse_section_list, DashboardConfig};
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "statsApiBaseUrl")]
    pub stats_api_base_url: String,
    #[serde(rename = "correlationPath")]
    #[serde(default)]
    pub correlation_path: Option<String>,
    #[serde(rename = "topN")]
    #[serde(default)]
    pub top_n: Option<usize>,
    /// Comma separated section keys. Empty makes every section mandatory.
    #[serde(rename = "optionalSections")]
    #[serde(default)]
    pub optional_sections: Option<String>,
}

impl RuntimeConfig {
    pub fn dashboard_config(&self) -> Result<DashboardConfig, String> {
        let mut config = DashboardConfig {
            base_url: self.stats_api_base_url.clone(),
            ..DashboardConfig::default()
        };
        if let Some(path) = self.correlation_path.as_deref().filter(|p| !p.is_empty()) {
            config.correlation_path = path.to_string();
        }
        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        if let Some(list) = &self.optional_sections {
            config.optional_sections = parse_section_list(list).map_err(|e| e.to_string())?;
        }
        Ok(config)
    }
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No browser window available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn dashboard_config() -> Result<DashboardConfig, String> {
    app_config()?.dashboard_config()
}

/// Base URL for requests. An empty configured base means the page's own
/// origin.
pub fn resolve_base_url(configured: &str, origin: Option<String>) -> String {
    match (configured.is_empty(), origin) {
        (true, Some(origin)) => origin,
        _ => configured.to_string(),
    }
}

fn page_origin() -> Option<String> {
    window().and_then(|w| w.location().origin().ok())
}

pub fn stats_api_client(config: &DashboardConfig) -> StatsApiClient {
    StatsApiClient::new(&resolve_base_url(&config.base_url, page_origin()))
}
