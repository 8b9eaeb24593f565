use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Speech
    pub tts_engine: String,
    pub vosk_model_path: String,
    pub audio_device: Option<usize>,
    pub capture_timeout_secs: u64,

    // Lookup & search
    pub summary_endpoint: String,
    pub search_url: String,
    pub lookup_timeout_secs: u64,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tts_engine: "system".to_string(),
            vosk_model_path: dirs::data_dir()
                .unwrap_or_default()
                .join("friday/models/vosk-model-small-en-us")
                .to_string_lossy()
                .to_string(),
            audio_device: None,
            capture_timeout_secs: 8,
            summary_endpoint: "https://en.wikipedia.org/api/rest_v1/page/summary".to_string(),
            search_url: "https://www.google.com/search".to_string(),
            lookup_timeout_secs: 10,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the user config dir, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_or_create(&config_path())
    }

    /// Load from `path`; when no file exists yet, write the defaults there
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Self::default();
        match config.save_to(path) {
            Ok(()) => tracing::info!("📝 Wrote default config to {}", path.display()),
            Err(e) => tracing::warn!("⚠️ Could not write default config: {}", e),
        }
        Ok(config)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Keep the broken file around for inspection
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn capture_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.capture_timeout_secs)
    }

    pub fn lookup_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.lookup_timeout_secs)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("friday")
        .join("config.json")
}
