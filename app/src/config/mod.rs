//! Configuration management for the Gym Planner app
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: GYM__)

use anyhow::Result;
use directories::ProjectDirs;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable conventionally holding the Gemini key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Per-user data directory, e.g. `~/.local/share/gym-planner` on Linux.
///
/// Falls back to `.gym-planner` under the working directory only when the
/// platform reports no home directory.
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("app", "gymplanner", "gym-planner")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".gym-planner"))
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// On-device persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per key
    pub dir: PathBuf,
    /// Key under which the whole snapshot is stored
    pub key: String,
}

/// Plan generation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Locale override; when unset the device locale is detected
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocaleConfig {
    #[serde(rename = "override")]
    pub override_tag: Option<String>,
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of the pretty formatter
    pub json: bool,
    /// Default filter when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            filter: "gym_planner_app=info".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                dir: default_data_dir(),
                key: "gym-storage".to_string(),
            },
            ai: AiConfig::default(),
            locale: LocaleConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with GYM__ prefix
    ///
    /// `GEMINI_API_KEY` fills `ai.api_key` when nothing else set it.
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (GYM__ prefix)
            // e.g., GYM__AI__MODEL=gemini-1.5-pro sets ai.model
            .add_source(config::Environment::with_prefix("GYM").separator("__"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;
        if app_config.ai.api_key.is_none() {
            app_config.ai.api_key = env::var(GEMINI_API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::new);
        }
        Ok(app_config)
    }
}
