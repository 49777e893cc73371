//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::tasks::ReaperConfig;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Language used for validation messages when the request names none
    pub default_language: String,
    /// Directory holding temporary upload artifacts
    pub temp_dir: PathBuf,
    /// Age in seconds after which a temp file is considered stale
    pub temp_max_age: u64,
    /// Interval in seconds between temp cleanup runs
    pub cleanup_interval: u64,
    /// Run a cleanup pass immediately at startup instead of after one interval
    pub cleanup_on_start: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_LANGUAGE` - Fallback message language (default: en)
    /// - `UPLOADS_TEMP_DIR` - Temp upload directory (default: `<install-root>/uploads/temp`)
    /// - `TEMP_MAX_AGE_SECS` - Stale threshold in seconds (default: 3600)
    /// - `TEMP_CLEANUP_INTERVAL_SECS` - Cleanup frequency in seconds (default: 3600)
    /// - `TEMP_CLEANUP_ON_START` - Run cleanup at startup (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            default_language: env::var("DEFAULT_LANGUAGE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.default_language),
            temp_dir: env::var_os("UPLOADS_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.temp_dir),
            temp_max_age: parse_var("TEMP_MAX_AGE_SECS").unwrap_or(defaults.temp_max_age),
            cleanup_interval: parse_var("TEMP_CLEANUP_INTERVAL_SECS")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
            cleanup_on_start: parse_var("TEMP_CLEANUP_ON_START")
                .unwrap_or(defaults.cleanup_on_start),
        }
    }

    /// Builds the reaper settings from this configuration.
    pub fn reaper_config(&self) -> ReaperConfig {
        ReaperConfig {
            dir: self.temp_dir.clone(),
            max_age: Duration::from_secs(self.temp_max_age),
            interval: Duration::from_secs(self.cleanup_interval),
            run_on_start: self.cleanup_on_start,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_language: "en".to_string(),
            temp_dir: default_temp_dir(),
            temp_max_age: 3600,
            cleanup_interval: 3600,
            cleanup_on_start: false,
        }
    }
}

/// `<install-root>/uploads/temp`, where the install root is the directory
/// holding the running executable rather than the working directory.
pub fn default_temp_dir() -> PathBuf {
    install_root().join("uploads").join("temp")
}

fn install_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
