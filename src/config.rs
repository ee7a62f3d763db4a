use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::core::SynonymTable;
use crate::error::AppError;
use crate::models::FieldWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    /// Replaces the built-in synonym table when present
    #[serde(default)]
    pub synonyms: Option<HashMap<String, Vec<String>>>,
}

impl SearchSettings {
    pub fn synonym_table(&self) -> SynonymTable {
        match &self.synonyms {
            Some(entries) => SynonymTable::new(entries.clone()),
            None => SynonymTable::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_name_weight")]
    pub name: f64,
    #[serde(default = "default_tag_weight")]
    pub tag: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            name: default_name_weight(),
            tag: default_tag_weight(),
            location: default_location_weight(),
        }
    }
}

impl From<&WeightsConfig> for FieldWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            name: config.name,
            tag: config.tag,
            location: config.location,
        }
    }
}

fn default_name_weight() -> f64 { 3.0 }
fn default_tag_weight() -> f64 { 2.0 }
fn default_location_weight() -> f64 { 1.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

fn default_categories() -> Vec<String> {
    [
        "Tyres",
        "Battery",
        "Oil Change",
        "Brakes",
        "Aircon",
        "Engine",
        "Bodywork",
        "Car Wash",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DISCOVERY__)
    pub fn load() -> Result<Self, AppError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DISCOVERY__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = apply_platform_overrides(settings)?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the discovery core cannot run with
    pub fn validate(&self) -> Result<(), AppError> {
        let weights = &self.search.weights;
        for (field, value) in [("name", weights.name), ("tag", weights.tag), ("location", weights.location)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::InvalidSettings(format!(
                    "search.weights.{} must be a positive number, got {}",
                    field, value
                )));
            }
        }

        if let Some(synonyms) = &self.search.synonyms {
            if synonyms.keys().any(|key| key.trim().is_empty()) {
                return Err(AppError::InvalidSettings(
                    "search.synonyms contains a blank key".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix("DISCOVERY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Honor the bare `PORT` variable set by container platforms
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("PORT").ok().and_then(|port| port.parse::<u16>().ok()) {
        Some(port) => Config::builder()
            .add_source(settings)
            .set_override("server.port", port as i64)?
            .build(),
        None => Ok(settings),
    }
}
