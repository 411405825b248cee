//! Collaborator contracts
//!
//! Everything the engine needs from the outside world lives behind these
//! traits: text generation, conversation persistence, the product catalog and
//! outbound messaging. The engine only sees trait objects, so transports and
//! stores are swappable and tests run against scripted fakes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::product::Product;

/// Text-generation collaborator. Called twice per turn (analysis and reply);
/// implementations must not share mutable state between calls.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generation request failed: {0}")]
    Transport(String),

    #[error("Generation timed out after {0}s")]
    Timeout(u64),

    #[error("Generation quota exhausted: {0}")]
    Quota(String),

    #[error("Empty or unusable model output")]
    EmptyResponse,
}

/// Identity a transport knows the user by
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentity {
    pub external_id: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub id: i64,
    pub identity: UserIdentity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredConversation {
    pub id: i64,
    pub user_id: i64,
    pub stage: String,
    pub completed: bool,
    pub lead_generated: bool,
    pub lead_score: Option<u8>,
}

/// Who authored a logged message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredMessage {
    pub id: i64,
    pub conversation_id: i64,
    pub role: MessageRole,
    pub content: String,
    pub stage: String,
    pub model: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown conversation {0}")]
    UnknownConversation(i64),

    #[error("Unknown user {0}")]
    UnknownUser(i64),
}

/// Conversation persistence collaborator
#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn find_or_create_user(&self, identity: &UserIdentity)
        -> Result<StoredUser, PersistError>;

    async fn start_conversation(&self, user_id: i64) -> Result<StoredConversation, PersistError>;

    async fn log_message(
        &self,
        conversation_id: i64,
        role: MessageRole,
        content: &str,
        stage: &str,
        model: Option<&str>,
        metadata: Option<serde_json::Value>,
    ) -> Result<StoredMessage, PersistError>;

    async fn update_stage(&self, conversation_id: i64, stage: &str) -> Result<(), PersistError>;

    async fn complete_conversation(
        &self,
        conversation_id: i64,
        lead_generated: bool,
        score: Option<u8>,
    ) -> Result<(), PersistError>;

    /// History ordered by creation time, oldest first
    async fn conversation_history(
        &self,
        conversation_id: i64,
    ) -> Result<Vec<StoredMessage>, PersistError>;
}

/// Opaque handle to the shop whose catalog should be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopContext {
    pub shop_id: String,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog fetch failed: {0}")]
    Fetch(String),

    #[error("Unknown shop {0}")]
    UnknownShop(String),
}

/// Product catalog collaborator. Fetched once per turn that recommends; the
/// recommendation scorer itself never touches the catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn fetch_products(&self, shop: &ShopContext) -> Result<Vec<Product>, CatalogError>;
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Send failed: {0}")]
    Transport(String),
}

/// Best-effort outbound messaging (owner notifications). Callers log
/// failures and continue.
#[async_trait]
pub trait OutboundMessenger: Send + Sync {
    async fn send(&self, recipient: &str, text: &str) -> Result<(), SendError>;
}
