//! Debug configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "aetheris=info,warn";

/// Debug system configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log file name prefix inside `log_dir`
    pub log_file_name: String,
    /// Log level filter (e.g., "aetheris=debug,info")
    pub log_level: String,
    /// Enable in-UI debug overlay
    pub show_debug_ui: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_name: "aetheris.log".to_string(),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            show_debug_ui: super::is_debug_mode(),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            log_dir: std::env::var("AETHERIS_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            show_debug_ui: std::env::var("AETHERIS_DEBUG_UI")
                .map(|v| v == "1")
                .unwrap_or(defaults.show_debug_ui),
            log_file_name: defaults.log_file_name,
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DebugConfig::default();
        assert_eq!(config.log_file(), PathBuf::from("logs").join("aetheris.log"));
        assert_eq!(config.log_level, "aetheris=info,warn");
        assert!(!config.is_debug_enabled());
        assert_eq!(config.show_debug_ui, crate::debug::is_debug_mode());
    }

    #[test]
    fn test_debug_detection() {
        let config = DebugConfig {
            log_level: "aetheris=debug".to_string(),
            ..DebugConfig::default()
        };
        assert!(config.is_debug_enabled());
    }
}
