//! Text generation for the sales agent
//!
//! One backend trait, a Gemini-style HTTP implementation, and an adapter
//! bridging the backend to the core `TextGenerator` contract so the funnel
//! never depends on this crate directly.

pub mod adapter;
pub mod backend;

pub use adapter::GeneratorAdapter;
pub use backend::{GeminiBackend, LlmBackend, LlmConfig};

use thiserror::Error;

/// LLM errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout after {0}s")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
