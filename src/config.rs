//! Runtime Configuration
//!
//! Read once at startup from an optional `window.__STUDY_TRACKER_CONFIG__`
//! object; every key is optional. The page may also embed the study or
//! assay type being edited.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;
use crate::store::{AssayTypeDraft, StudyDraft};

/// Global the hosting page may define before the bundle loads
const CONFIG_GLOBAL: &str = "__STUDY_TRACKER_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Backend origin; empty means the page's own origin
    pub api_base_url: String,
    pub user_search_path: String,
    pub studies_path: String,
    pub assay_types_path: String,
    /// Shorter queries show no suggestions
    pub user_search_min_chars: usize,
    pub user_search_debounce_ms: u32,
    pub log_level: String,
    /// Study to edit instead of a blank one
    pub study: Option<StudyDraft>,
    /// Assay type to edit instead of a blank one
    pub assay_type: Option<AssayTypeDraft>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            user_search_path: "/api/user/search".to_string(),
            studies_path: "/api/study".to_string(),
            assay_types_path: "/api/assaytype".to_string(),
            user_search_min_chars: 2,
            user_search_debounce_ms: 300,
            log_level: "info".to_string(),
            study: None,
            assay_type: None,
        }
    }
}

impl AppConfig {
    /// Load from the page, falling back to defaults.
    /// Problems are returned alongside so they can be logged once logging is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        let (mut config, problem) = match read_global() {
            Ok(Some(config)) => (config, None),
            Ok(None) => (Self::default(), None),
            Err(err) => (Self::default(), Some(err)),
        };
        if config.api_base_url.is_empty() {
            config.api_base_url = page_origin();
        }
        (config, problem)
    }

    /// Absolute URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim()).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

fn read_global() -> Result<Option<AppConfig>, ConfigError> {
    let Some(win) = web_sys::window() else { return Ok(None) };
    let value = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "apiBaseUrl": "https://lims.example.org", "userSearchMinChars": 3 }"#).unwrap();
        assert_eq!(config.api_base_url, "https://lims.example.org");
        assert_eq!(config.user_search_min_chars, 3);
        assert_eq!(config.studies_path, "/api/study");
        assert_eq!(config.user_search_debounce_ms, 300);
    }

    #[test]
    fn test_embedded_drafts() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "study": { "name": "Tox", "tasks": [{ "label": "Dose", "order": 4 }] } }"#,
        )
        .unwrap();
        let study = config.study.unwrap();
        assert_eq!(study.name, "Tox");
        assert_eq!(study.tasks[0].label, "Dose");
        assert_eq!(config.assay_type, None);
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = AppConfig { api_base_url: "https://lims.example.org/".to_string(), ..Default::default() };
        assert_eq!(config.endpoint("/api/study"), "https://lims.example.org/api/study");
        assert_eq!(config.endpoint("api/study"), "https://lims.example.org/api/study");
    }

    #[test]
    fn test_log_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level().unwrap(), LevelFilter::Info);
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level().unwrap(), LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert!(matches!(config.log_level(), Err(ConfigError::LogLevel(_))));
    }
}
