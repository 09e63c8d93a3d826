use std::time::Duration;

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "client-config";

/// Client settings. Every field has a default, so the page works without any
/// config block at all.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub api_base: String,
    pub list_skeleton_rows: usize,
    pub detail_skeleton_rows: usize,
    pub transition_ms: u64,
    pub toast_dwell_ms: u64,
    pub initial_load_delay_ms: u64,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            list_skeleton_rows: 6,
            detail_skeleton_rows: 4,
            transition_ms: 200,
            toast_dwell_ms: 3200,
            initial_load_delay_ms: 150,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        config.log_level()?;
        Ok(config)
    }

    /// Read overrides from the page, falling back to defaults when the block is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn toast_dwell(&self) -> Duration {
        Duration::from_millis(self.toast_dwell_ms)
    }

    pub fn initial_load_delay(&self) -> Duration {
        Duration::from_millis(self.initial_load_delay_ms)
    }
}
