//! Core traits and types for the sales agent
//!
//! This crate provides foundational types used across all other crates:
//! - Funnel stage enums (SPIN and AIDA)
//! - Conversation session state
//! - Extracted message signals
//! - Product and catalog types
//! - Language definitions and detection
//! - Collaborator traits (text generation, persistence, catalog, messaging)
//!   and their error types

pub mod language;
pub mod product;
pub mod session;
pub mod signals;
pub mod stage;
pub mod traits;

pub use language::Language;
pub use product::{Product, ScoredProduct};
pub use session::{ConversationSession, PurchaseIntent, Urgency, UserProfile};
pub use signals::{ContactInfo, EmotionalTone, ExtractedSignals};
pub use stage::{AidaStage, FunnelStage, SpinStage};

pub use traits::{
    CatalogError, ConversationStore, GenerationError, MessageRole, OutboundMessenger,
    PersistError, ProductCatalog, SendError, ShopContext, StoredConversation, StoredMessage,
    StoredUser, TextGenerator, UserIdentity,
};
