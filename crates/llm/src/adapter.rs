//! Adapter bridging `LlmBackend` to the core `TextGenerator` contract
//!
//! The funnel crate depends only on `sales_agent_core::TextGenerator`; this
//! adapter is the single place where backend errors are mapped into the
//! core error taxonomy.

use std::sync::Arc;

use async_trait::async_trait;
use sales_agent_core::{GenerationError, TextGenerator};

use crate::{LlmBackend, LlmError};

/// Wraps any backend as a `TextGenerator`
pub struct GeneratorAdapter {
    backend: Arc<dyn LlmBackend>,
}

impl GeneratorAdapter {
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self { backend }
    }

    /// Model identifier of the wrapped backend
    pub fn model_name(&self) -> &str {
        self.backend.model_name()
    }
}

#[async_trait]
impl TextGenerator for GeneratorAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.backend.generate(prompt).await.map_err(|err| match err {
            LlmError::Timeout(secs) => GenerationError::Timeout(secs),
            LlmError::Api(msg) if msg.contains("429") => GenerationError::Quota(msg),
            LlmError::InvalidResponse(_) => GenerationError::EmptyResponse,
            other => GenerationError::Transport(other.to_string()),
        })
    }
}
