//! Generation backend trait and the Gemini HTTP implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sales_agent_config::LlmSettings;
use serde::{Deserialize, Serialize};

use crate::LlmError;

/// Configuration for the generation backend
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API base endpoint (for testing or proxy)
    pub endpoint: String,
    /// Model name
    pub model: String,
    /// API key
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
    /// Temperature (0.0 - 1.0)
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
            max_output_tokens: 1024,
            temperature: 0.7,
        }
    }
}

impl LlmConfig {
    /// Create config with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Build from application settings
    pub fn from_settings(settings: &LlmSettings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
            max_output_tokens: settings.max_output_tokens,
            ..Default::default()
        }
    }

    /// Set model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 1.0);
        self
    }
}

/// Generation backend abstraction
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Generate a completion for the prompt
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier, recorded alongside logged messages
    fn model_name(&self) -> &str;
}

/// Gemini generateContent backend
pub struct GeminiBackend {
    config: LlmConfig,
    client: Client,
}

impl GeminiBackend {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        if config.api_key.is_empty() {
            return Err(LlmError::Configuration(
                "API key not set. Set it via SALES_AGENT__LLM__API_KEY or config.".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl LlmBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
                temperature: self.config.temperature,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::warn!(
                        timeout_secs = self.config.timeout.as_secs(),
                        model = %self.config.model,
                        "generation request timed out"
                    );
                    LlmError::Timeout(self.config.timeout.as_secs())
                } else {
                    LlmError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, model = %self.config.model, "generation request rejected");
            return Err(LlmError::Api(format!("HTTP {}: {}", status, error_text)));
        }

        let response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::InvalidResponse(
                "no candidates in response".to_string(),
            ));
        }

        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_requires_api_key() {
        let result = GeminiBackend::new(LlmConfig::default());
        assert!(matches!(result, Err(LlmError::Configuration(_))));
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello "}, {"text": "there"}]}}
            ]
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(body).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.clone())
            .collect();
        assert_eq!(text, "Hello there");
    }

    #[test]
    fn test_config_from_settings() {
        let mut settings = LlmSettings::default();
        settings.api_key = "key".to_string();
        settings.timeout_secs = 5;
        let config = LlmConfig::from_settings(&settings);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.model, "gemini-2.0-flash");
    }
}
