//! Main settings module

use config::{Config, Environment, File};
use sales_agent_core::Language;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Text-generation backend configuration
    #[serde(default)]
    pub llm: LlmSettings,

    /// Business owner shown in prompts and notified about leads
    #[serde(default)]
    pub owner: OwnerSettings,

    /// Locale used when detection yields nothing
    #[serde(default)]
    pub default_language: Language,

    /// Trailing messages of history included in the generation prompt
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Products kept after recommendation scoring
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Products rendered into the generation prompt
    #[serde(default = "default_prompt_product_limit")]
    pub prompt_product_limit: usize,

    /// Optional path to a YAML file overriding the compiled-in language packs
    #[serde(default)]
    pub language_pack_path: Option<String>,
}

/// Text-generation backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// API base endpoint
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API key (set via SALES_AGENT__LLM__API_KEY)
    #[serde(default)]
    pub api_key: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,

    /// Maximum tokens per generated reply
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_llm_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
fn default_llm_model() -> String {
    "gemini-2.0-flash".to_string()
}
fn default_llm_timeout() -> u64 {
    30
}
fn default_max_output_tokens() -> u32 {
    1024
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            model: default_llm_model(),
            api_key: String::new(),
            timeout_secs: default_llm_timeout(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

/// The person the bot sells for. Referenced from language-pack templates via
/// `{owner_name}` / `{owner_short_name}` / `{owner_handle}` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerSettings {
    #[serde(default = "default_owner_name")]
    pub name: String,

    #[serde(default = "default_owner_short_name")]
    pub short_name: String,

    /// Messenger handle given to qualified leads
    #[serde(default = "default_owner_handle")]
    pub handle: String,

    /// Chat id lead notifications are delivered to; notifications are
    /// skipped when unset
    #[serde(default)]
    pub chat_id: Option<String>,
}

fn default_owner_name() -> String {
    "Alex Antonenko".to_string()
}
fn default_owner_short_name() -> String {
    "Alex".to_string()
}
fn default_owner_handle() -> String {
    "@aleksandr_antonenko".to_string()
}

impl Default for OwnerSettings {
    fn default() -> Self {
        Self {
            name: default_owner_name(),
            short_name: default_owner_short_name(),
            handle: default_owner_handle(),
            chat_id: None,
        }
    }
}

fn default_history_window() -> usize {
    10
}
fn default_recommendation_limit() -> usize {
    5
}
fn default_prompt_product_limit() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            llm: LlmSettings::default(),
            owner: OwnerSettings::default(),
            default_language: Language::default(),
            history_window: default_history_window(),
            recommendation_limit: default_recommendation_limit(),
            prompt_product_limit: default_prompt_product_limit(),
            language_pack_path: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.timeout_secs".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }
        if self.llm.endpoint.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "llm.endpoint".to_string(),
                message: "Endpoint cannot be empty".to_string(),
            });
        }
        if self.history_window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history_window".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }
        if self.recommendation_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "recommendation_limit".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }
        if self.prompt_product_limit > self.recommendation_limit {
            tracing::warn!(
                "prompt_product_limit ({}) is larger than recommendation_limit ({}), \
                 prompt will be limited by recommendations",
                self.prompt_product_limit,
                self.recommendation_limit
            );
        }
        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (SALES_AGENT_ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("SALES_AGENT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.llm.model, "gemini-2.0-flash");
        assert_eq!(settings.history_window, 10);
        assert_eq!(settings.recommendation_limit, 5);
        assert_eq!(settings.prompt_product_limit, 3);
        assert_eq!(settings.default_language, Language::En);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_defaults_match_empty_deserialization() {
        // Constructed and deserialized-from-nothing settings must agree
        let from_yaml: Settings = serde_yaml::from_str("{}").unwrap();
        let constructed = Settings::default();
        assert_eq!(from_yaml.history_window, constructed.history_window);
        assert_eq!(from_yaml.recommendation_limit, constructed.recommendation_limit);
        assert_eq!(from_yaml.prompt_product_limit, constructed.prompt_product_limit);
        assert_eq!(from_yaml.llm.model, constructed.llm.model);
        assert_eq!(from_yaml.owner.name, constructed.owner.name);
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::default();
        settings.llm.timeout_secs = 0;
        assert!(settings.validate().is_err());

        settings.llm.timeout_secs = 30;
        assert!(settings.validate().is_ok());

        settings.history_window = 0;
        assert!(settings.validate().is_err());
    }
}
