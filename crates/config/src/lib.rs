//! Configuration for the sales agent
//!
//! Supports loading configuration from:
//! - YAML files (config/default.yaml, config/{env}.yaml)
//! - Environment variables (SALES_AGENT_ prefix)
//!
//! Language packs live here too: localized welcome/error strings and the
//! per-stage prompt instructions, keyed by locale. Packs ship compiled-in for
//! the supported locales and can be overridden from YAML at startup.

pub mod language_pack;
pub mod settings;

pub use language_pack::{
    LanguagePack, LanguagePackRegistry, LeadNotificationStrings, SummaryPromptStrings,
};
pub use settings::{load_settings, LlmSettings, OwnerSettings, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
