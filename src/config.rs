/// Startup configuration
///
/// Read once in `main` before the window opens:
/// 1. `.env` in the current directory (or `<config_dir>/plant-identifier/.env`)
/// 2. Process environment (already-set variables win over the file)
/// 3. Defaults for everything except the API key

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::analysis::prompt::MAX_OUTPUT_TOKENS;
use crate::error::ConfigError;

/// Environment variable carrying the OpenAI API key
pub const API_KEY_VAR: &str = "VITE_OPENAI_API_KEY";

/// Value shipped in the sample `.env`; treated the same as a missing key
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Optional override of the API root (no trailing `/chat/completions`)
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Optional override of the vision model name
pub const MODEL_VAR: &str = "PLANT_ID_MODEL";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4-vision-preview";

/// A validated, non-placeholder API key
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate a raw credential value
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim) {
            Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY => {
                Ok(ApiKey(key.to_string()))
            }
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the key itself
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let skip = self.0.chars().count().saturating_sub(4);
        let tail: String = self.0.chars().skip(skip).collect();
        write!(f, "ApiKey(***{})", tail)
    }
}

/// Everything the application reads from its environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Result<ApiKey, ConfigError>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Settings {
    /// Load `.env` and read settings from the process environment
    pub fn load() -> Self {
        load_dotenv();
        let settings = Self::from_lookup(|name| std::env::var(name).ok());

        match &settings.api_key {
            Ok(key) => info!("🔑 API key loaded: {:?}", key),
            Err(_) => warn!("⚠️  {} is not set, analysis is disabled", API_KEY_VAR),
        }
        info!("🤖 Model: {} via {}", settings.model, settings.base_url);

        settings
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = non_empty(BASE_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Settings {
            api_key: ApiKey::parse(lookup(API_KEY_VAR).as_deref()),
            base_url,
            model: non_empty(MODEL_VAR)
                .map(|m| m.trim().to_string())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

/// Load a .env file if one exists
fn load_dotenv() {
    // Current directory first
    if Path::new(".env").exists() {
        match dotenv::from_filename(".env") {
            Ok(_) => info!("📋 Loaded .env from current directory"),
            Err(e) => warn!("Failed to load .env file: {}", e),
        }
        return;
    }

    // Then the per-user config directory
    if let Some(path) = user_env_path() {
        if path.exists() {
            match dotenv::from_path(&path) {
                Ok(_) => info!("📋 Loaded {}", path.display()),
                Err(e) => warn!("Failed to load {}: {}", path.display(), e),
            }
        }
    }
}

/// `<config_dir>/plant-identifier/.env`
/// - Linux: ~/.config/plant-identifier/.env
/// - macOS: ~/Library/Application Support/plant-identifier/.env
/// - Windows: %APPDATA%\plant-identifier\.env
fn user_env_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
    path.push("plant-identifier");
    path.push(".env");
    Some(path)
}
