// Settings shared by the demo drivers.
//
// Loaded from an optional TOML file (DESIGN_PATTERNS_CONFIG), then
// overridden by environment variables.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::creational::abstract_factory::FamilyRegistry;
use crate::creational::{expected_list, normalize_selector};
use crate::error::ConfigError;

pub const CONFIG_PATH_VAR: &str = "DESIGN_PATTERNS_CONFIG";
pub const DB_URL_VAR: &str = "DESIGN_PATTERNS_DB_URL";
pub const POOL_SIZE_VAR: &str = "DESIGN_PATTERNS_POOL_SIZE";

const DEFAULT_URL: &str = "postgres://localhost:5432/documents";
const DEFAULT_POOL_SIZE: u32 = 4;
const MAX_POOL_SIZE: u32 = 256;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub connection: ConnectionSettings,
    pub logging: LoggingSettings,
    pub factory: FactorySettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectionSettings {
    pub url: String,
    pub pool_size: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactorySettings {
    /// Family used by the abstract factory driver when the user enters none.
    pub default_family: Option<String>,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// File named by `DESIGN_PATTERNS_CONFIG` (or defaults), plus env overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::load(Path::new(&path))?,
            Err(_) => Settings::default(),
        };
        settings.connection.apply_overrides(
            env::var(DB_URL_VAR).ok().as_deref(),
            env::var(POOL_SIZE_VAR).ok().as_deref(),
        )?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.connection.validate()?;
        if log_level(&self.logging.level).is_none() {
            return Err(ConfigError::invalid_value(
                "logging.level",
                format!("'{}' is not a log level", self.logging.level),
            ));
        }
        self.factory.validate()
    }
}

impl FactorySettings {
    fn validate(&self) -> Result<(), ConfigError> {
        let Some(family) = &self.default_family else {
            return Ok(());
        };
        let normalized = normalize_selector(family);
        let tags = FamilyRegistry::global().tags();
        if !tags.iter().any(|tag| *tag == normalized) {
            return Err(ConfigError::invalid_value(
                "factory.default_family",
                format!("'{family}' is not a registered family (expected one of: {})", expected_list(tags.iter().copied())),
            ));
        }
        Ok(())
    }
}

impl ConnectionSettings {
    /// `[connection]` from the file named by `DESIGN_PATTERNS_CONFIG` (or
    /// defaults), with environment overrides applied.
    ///
    /// Used by the singleton, which cannot fail: an unreadable file or an
    /// invalid override is logged and skipped.
    pub fn from_env() -> Self {
        let path = env::var(CONFIG_PATH_VAR).ok();
        let url = env::var(DB_URL_VAR).ok();
        let pool_size = env::var(POOL_SIZE_VAR).ok();
        Self::resolve(path.as_deref().map(Path::new), url.as_deref(), pool_size.as_deref())
    }

    fn resolve(path: Option<&Path>, url: Option<&str>, pool_size: Option<&str>) -> Self {
        let base = match path.map(Settings::load) {
            Some(Ok(settings)) => settings.connection,
            Some(Err(err)) => {
                log::warn!("ignoring settings file: {err}");
                ConnectionSettings::default()
            }
            None => ConnectionSettings::default(),
        };

        let mut settings = base.clone();
        if let Err(err) = settings.apply_overrides(url, pool_size) {
            log::warn!("ignoring connection override: {err}");
            return base;
        }
        settings
    }

    fn apply_overrides(&mut self, url: Option<&str>, pool_size: Option<&str>) -> Result<(), ConfigError> {
        if let Some(url) = url {
            self.url = url.trim().to_string();
        }
        if let Some(raw) = pool_size {
            self.pool_size = raw
                .trim()
                .parse()
                .map_err(|err| ConfigError::invalid_value("connection.pool_size", format!("'{raw}': {err}")))?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::invalid_value("connection.url", "must not be empty"));
        }
        if self.pool_size == 0 || self.pool_size > MAX_POOL_SIZE {
            return Err(ConfigError::invalid_value(
                "connection.pool_size",
                format!("{} is outside 1..={MAX_POOL_SIZE}", self.pool_size),
            ));
        }
        Ok(())
    }
}

pub(crate) fn log_level(name: &str) -> Option<log::LevelFilter> {
    name.trim().parse().ok()
}
