//! Active session registry
//!
//! One entry per user id. Each session sits behind its own async mutex, so
//! turns for the same user are serialized while different users proceed in
//! parallel.

use std::sync::Arc;

use dashmap::DashMap;
use sales_agent_core::ConversationSession;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<String, Arc<Mutex<ConversationSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing session handle for the user, or a new one built by `init`
    pub fn get_or_create(
        &self,
        user_id: &str,
        init: impl FnOnce() -> ConversationSession,
    ) -> Arc<Mutex<ConversationSession>> {
        self.sessions
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(init())))
            .clone()
    }

    pub fn get(&self, user_id: &str) -> Option<Arc<Mutex<ConversationSession>>> {
        self.sessions.get(user_id).map(|entry| entry.clone())
    }

    /// Drop the user's session; a later turn starts fresh
    pub fn remove(&self, user_id: &str) -> Option<Arc<Mutex<ConversationSession>>> {
        self.sessions.remove(user_id).map(|(_, session)| session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
