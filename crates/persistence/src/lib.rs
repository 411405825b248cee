//! In-memory conversation store
//!
//! Implements the `ConversationStore` contract with dashmap-backed tables and
//! monotonic ids. Used by tests and demo wiring; a database-backed store
//! implements the same trait for production deployments.

pub mod memory;

pub use memory::MemoryStore;
