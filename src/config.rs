//! Runtime configuration loaded from fashion_mate.toml and environment
//! variables. Env values win over the file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const MIN_TIMEOUT_MS: u64 = 1_000;
const MAX_SANE_TIMEOUT_MS: u64 = 120_000;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// Usually supplied via GEMINI_API_KEY rather than the file.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Explicit request timeout; the remote call is the pipeline's only
    /// suspension point, so it must not hang forever.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StorageConfig {
    /// Directory holding the saved-outfit collection. Defaults to the
    /// platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Config {
    /// Load configuration from the TOML file and environment variables.
    /// Uses FASHION_MATE_CONFIG or defaults to "fashion_mate.toml".
    pub fn load() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let config_path = std::env::var("FASHION_MATE_CONFIG")
            .unwrap_or_else(|_| "fashion_mate.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        // Env overrides (env-first)
        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            config.gemini.api_key = Some(api_key);
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.gemini.model = model;
        }
        if let Some(timeout_ms) = std::env::var("FASHION_MATE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.gemini.timeout_ms = timeout_ms;
        }
        if let Ok(data_dir) = std::env::var("FASHION_MATE_DATA_DIR") {
            config.storage.data_dir = Some(PathBuf::from(data_dir));
        }

        if config.gemini.timeout_ms < MIN_TIMEOUT_MS {
            tracing::warn!(
                "timeout_ms {} below minimum {}, clamping",
                config.gemini.timeout_ms,
                MIN_TIMEOUT_MS
            );
            config.gemini.timeout_ms = MIN_TIMEOUT_MS;
        } else if config.gemini.timeout_ms > MAX_SANE_TIMEOUT_MS {
            tracing::warn!(
                "timeout_ms {} is unusually high, requests may appear hung",
                config.gemini.timeout_ms
            );
        }

        Ok(config)
    }

    /// Resolved directory for the saved-outfit store.
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("fashion-mate")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.gemini.model, DEFAULT_MODEL);
        assert_eq!(config.gemini.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.gemini.api_key.is_none());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[gemini]\nmodel = \"gemini-2.0-flash\"\n").unwrap();
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn data_dir_prefers_configured_value() {
        let config: Config =
            toml::from_str("[storage]\ndata_dir = \"/tmp/fm-test\"\n").unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/fm-test"));
    }
}
