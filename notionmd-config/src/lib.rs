//! Shared configuration loader for the notionmd toolchain.
//!
//! `defaults/notionmd.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer a `notionmd.toml`, an
//! explicit file and finally environment variables on top of those defaults
//! via [`Loader`] before deserializing into [`AppConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use notionmd_babel::PageId;
use notionmd_service::{ClientSettings, ServiceSettings};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../defaults/notionmd.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "notionmd.toml";

/// Environment variables and the keys they override.
pub const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("NOTION_TOKEN", "notion.token"),
    ("NOTION_DATABASE_ID", "notion.default_parent_id"),
    ("API_KEY", "server.api_key"),
    ("PORT", "server.port"),
    ("NOTIONMD_LOG", "log.level"),
];

/// Top-level configuration consumed by notionmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub notion: NotionConfig,
    pub server: ServerConfig,
    pub log: LogConfig,
}

/// Remote store connection.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionConfig {
    #[serde(default)]
    pub token: Option<String>,
    pub api_base_url: String,
    pub api_version: String,
    #[serde(default)]
    pub default_parent_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

/// A loaded configuration that cannot be turned into runtime settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("NOTION_TOKEN environment variable is required")]
    MissingToken,

    #[error("Invalid default parent id '{value}': {reason}")]
    InvalidDefaultParent { value: String, reason: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
}

impl AppConfig {
    /// Client settings; fails when no token is configured.
    pub fn client_settings(&self) -> Result<ClientSettings, SettingsError> {
        let token = non_empty(&self.notion.token).ok_or(SettingsError::MissingToken)?;
        Ok(ClientSettings {
            token: token.to_string(),
            base_url: self.notion.api_base_url.clone(),
            api_version: self.notion.api_version.clone(),
        })
    }

    /// Service settings with the default parent normalized.
    pub fn service_settings(&self) -> Result<ServiceSettings, SettingsError> {
        let default_parent_id = non_empty(&self.notion.default_parent_id)
            .map(|raw| {
                PageId::parse(raw).map_err(|err| SettingsError::InvalidDefaultParent {
                    value: raw.to_string(),
                    reason: err.message().to_string(),
                })
            })
            .transpose()?;
        Ok(ServiceSettings { default_parent_id })
    }

    pub fn api_key(&self) -> Option<String> {
        non_empty(&self.server.api_key).map(str::to_string)
    }

    /// `host:port` the HTTP server binds to.
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply the variables listed in [`ENV_OVERRIDES`]. Empty values count as
    /// unset.
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in vars {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            if let Some((_, key)) = ENV_OVERRIDES.iter().find(|(var, _)| *var == name.as_ref()) {
                self = self.set_override(key, value)?;
            }
        }
        Ok(self)
    }

    /// [`Loader::with_env_vars`] over the process environment.
    pub fn with_process_env(self) -> Result<Self, ConfigError> {
        self.with_env_vars(std::env::vars())
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AppConfig, ConfigError> {
    Loader::new().build()
}
