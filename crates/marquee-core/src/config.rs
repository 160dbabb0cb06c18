use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::MarqueeError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Environment variable that overrides `api.api_key`.
pub const API_KEY_ENV: &str = "MARQUEE_API_KEY";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Query submitted once at startup.
    pub default_query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    pub mode: ThemeMode,
}

/// Light/dark preference. `System` follows the OS setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Dark,
    Light,
}

impl AppConfig {
    /// Load config: the user file at [`config_path`](Self::config_path),
    /// if there is one, merged over built-in defaults, then environment
    /// overrides.
    pub fn load() -> Result<Self, MarqueeError> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            tracing::debug!(path = %path.display(), "no user config, using defaults");
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Load a specific file merged over built-in defaults. The file must
    /// exist.
    pub fn load_from(path: &Path) -> Result<Self, MarqueeError> {
        if !path.exists() {
            return Err(MarqueeError::MissingConfig(path.to_path_buf()));
        }
        let mut table = parse_table(DEFAULT_CONFIG)?;
        let user_str = std::fs::read_to_string(path)?;
        let user = parse_table(&user_str)?;
        merge_tables(&mut table, user);
        tracing::debug!(path = %path.display(), "loaded user config");

        toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| MarqueeError::Config(e.to_string()))
    }

    /// Apply `MARQUEE_API_KEY` when it is set and non-empty.
    pub fn apply_env(&mut self) {
        self.override_api_key(std::env::var(API_KEY_ENV).ok().as_deref());
    }

    /// Replace `api.api_key` with `key`, trimmed. Absent or blank keys are
    /// ignored.
    pub fn override_api_key(&mut self, key: Option<&str>) {
        if let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) {
            self.api.api_key = key.to_string();
        }
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "marquee")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

fn parse_table(source: &str) -> Result<toml::Table, MarqueeError> {
    source
        .parse::<toml::Table>()
        .map_err(|e| MarqueeError::Config(e.to_string()))
}

/// Recursively overlay `overlay` onto `base`. Nested tables merge key by
/// key; any other value replaces the base value.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_inner)), toml::Value::Table(over_inner)) => {
                merge_tables(base_inner, over_inner);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
