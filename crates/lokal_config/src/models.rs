// --- File: crates/lokal_config/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log level directive for the `lokal` targets.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Deployment profile ---
/// Selects the built-in defaults, most importantly the backend base URL.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Production,
    Development,
}

impl Profile {
    /// Maps a `RUN_ENV` value to a profile. Anything unrecognised is production.
    pub fn from_run_env(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "debug" | "local" => Profile::Development,
            _ => Profile::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Production => "production",
            Profile::Development => "development",
        }
    }

    /// Base URL used when neither a config file nor the environment sets one.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Profile::Production => "https://api.lokal.co.za",
            Profile::Development => "http://localhost:8000",
        }
    }
}

// --- Backend API Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String, // Loaded via LOKAL__API__BASE_URL
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

// --- Session Config ---
// Where the access and refresh tokens survive a restart.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    pub token_file: PathBuf, // Loaded via LOKAL__SESSION__TOKEN_FILE
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; stderr only when absent.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: Profile,
    pub api: ApiConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
