//! # Application Configuration
//!
//! Persisted settings: palette, ticker tuning, scene tuning and an optional RNG
//! seed. Stored as pretty JSON at `./aetheris-config.json` unless
//! `AETHERIS_CONFIG` points elsewhere.
//!
//! `AETHERIS_SEED` and `AETHERIS_TICK_MS` override the file at load time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};
use crate::market::TickerConfig;
use crate::scene::SceneConfig;
use crate::ui::theme::ThemeConfig;

pub const DEFAULT_CONFIG_PATH: &str = "./aetheris-config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeConfig,
    pub ticker: TickerConfig,
    pub scene: SceneConfig,
    /// Fixed seed for the ticker and particle RNGs. `None` uses OS entropy.
    pub seed: Option<u64>,
}

/// Config file location, honoring `AETHERIS_CONFIG`
pub fn config_path() -> PathBuf {
    std::env::var("AETHERIS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

impl AppConfig {
    /// Read a config file. A missing file yields defaults; a malformed one is an error.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `AETHERIS_SEED` / `AETHERIS_TICK_MS`. Unparseable values are ignored with a warning.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var("AETHERIS_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring AETHERIS_SEED"),
            }
        }
        if let Ok(raw) = std::env::var("AETHERIS_TICK_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => self.ticker.interval_ms = ms,
                Ok(_) => tracing::warn!("Ignoring AETHERIS_TICK_MS=0"),
                Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring AETHERIS_TICK_MS"),
            }
        }
        self
    }
}

/// Load settings from the configured path, falling back to defaults.
pub fn load_config() -> AppConfig {
    let path = config_path();
    let config = match AppConfig::load_from_file(&path) {
        Ok(config) => {
            tracing::info!("Loaded configuration from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config from {:?}: {}. Using defaults.", path, e);
            AppConfig::default()
        }
    };
    config.with_env_overrides()
}

/// Save settings to the configured path
pub fn save_config(config: &AppConfig) -> Result<()> {
    let path = config_path();
    config.save_to_file(&path)?;
    tracing::info!("Saved configuration to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("aetheris-config-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_round_trip() {
        let path = temp_path("round_trip.json");
        let mut config = AppConfig::default();
        config.seed = Some(42);
        config.ticker.interval_ms = 1500;
        config.scene.landing_particles = 64;

        config.save_to_file(&path).expect("save should succeed");
        let loaded = AppConfig::load_from_file(&path).expect("load should succeed");
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = temp_path("does_not_exist.json");
        let loaded = AppConfig::load_from_file(&path).expect("missing file is not an error");
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let path = temp_path("malformed.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.ticker, TickerConfig::default());
        assert_eq!(config.scene, SceneConfig::default());
    }
}
