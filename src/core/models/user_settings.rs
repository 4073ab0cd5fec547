use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::global_constants;

fn default_request_timeout_secs() -> u64 {
    global_constants::DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_fallback_delay_ms() -> u64 {
    global_constants::DEFAULT_FALLBACK_DELAY_MS
}

fn default_summary_length() -> usize {
    global_constants::DEFAULT_SUMMARY_LENGTH
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub backend_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_fallback_delay_ms")]
    pub fallback_delay_ms: u64,
    #[serde(default = "default_summary_length")]
    pub summary_length: usize,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            backend_url: global_constants::DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: default_request_timeout_secs(),
            fallback_delay_ms: default_fallback_delay_ms(),
            summary_length: default_summary_length(),
        }
    }
}

impl UserSettings {
    /// Reads the settings file, creating it with defaults when `persist_defaults` is set.
    pub fn load(persist_defaults: bool) -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path, persist_defaults)
    }

    pub fn load_from(settings_path: &Path, persist_defaults: bool) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            if persist_defaults {
                default_settings.save_to(settings_path)?;
            }
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Unable to read settings from {}", settings_path.display()))?;
        let mut settings: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid settings file {}", settings_path.display()))?;
        settings.backend_url = normalize_backend_url(&settings.backend_url);

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Backend URL: {}", settings.backend_url);

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    /// Applies an endpoint taken from the command line or the environment.
    pub fn with_backend_url_override(mut self, backend_url: Option<&str>) -> Self {
        if let Some(url) = backend_url.filter(|url| !url.trim().is_empty()) {
            log::info!("[SETTINGS] Backend URL overridden: {}", url);
            self.backend_url = normalize_backend_url(url);
        }
        self
    }

    pub fn search_endpoint(&self) -> String {
        format!("{}{}", self.backend_url, global_constants::SEARCH_PATH)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

fn normalize_backend_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
