//! Dashmap-backed store implementation

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use sales_agent_core::traits::{
    ConversationStore, MessageRole, PersistError, StoredConversation, StoredMessage, StoredUser,
    UserIdentity,
};

/// In-memory `ConversationStore`
#[derive(Default)]
pub struct MemoryStore {
    next_id: AtomicI64,
    users: DashMap<String, StoredUser>,
    conversations: DashMap<i64, StoredConversation>,
    messages: DashMap<i64, Vec<StoredMessage>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Default::default()
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait]
impl ConversationStore for MemoryStore {
    async fn find_or_create_user(
        &self,
        identity: &UserIdentity,
    ) -> Result<StoredUser, PersistError> {
        let user = self
            .users
            .entry(identity.external_id.clone())
            .or_insert_with(|| StoredUser {
                id: self.allocate_id(),
                identity: identity.clone(),
            });
        Ok(user.clone())
    }

    async fn start_conversation(&self, user_id: i64) -> Result<StoredConversation, PersistError> {
        let conversation = StoredConversation {
            id: self.allocate_id(),
            user_id,
            stage: "greeting".to_string(),
            completed: false,
            lead_generated: false,
            lead_score: None,
        };
        self.conversations
            .insert(conversation.id, conversation.clone());
        self.messages.insert(conversation.id, Vec::new());
        Ok(conversation)
    }

    async fn log_message(
        &self,
        conversation_id: i64,
        role: MessageRole,
        content: &str,
        stage: &str,
        model: Option<&str>,
        metadata: Option<serde_json::Value>,
    ) -> Result<StoredMessage, PersistError> {
        let mut messages = self
            .messages
            .get_mut(&conversation_id)
            .ok_or(PersistError::UnknownConversation(conversation_id))?;
        let message = StoredMessage {
            id: self.allocate_id(),
            conversation_id,
            role,
            content: content.to_string(),
            stage: stage.to_string(),
            model: model.map(str::to_string),
            metadata,
            created_at: Utc::now(),
        };
        messages.push(message.clone());
        Ok(message)
    }

    async fn update_stage(&self, conversation_id: i64, stage: &str) -> Result<(), PersistError> {
        let mut conversation = self
            .conversations
            .get_mut(&conversation_id)
            .ok_or(PersistError::UnknownConversation(conversation_id))?;
        conversation.stage = stage.to_string();
        Ok(())
    }

    async fn complete_conversation(
        &self,
        conversation_id: i64,
        lead_generated: bool,
        score: Option<u8>,
    ) -> Result<(), PersistError> {
        let mut conversation = self
            .conversations
            .get_mut(&conversation_id)
            .ok_or(PersistError::UnknownConversation(conversation_id))?;
        conversation.completed = true;
        conversation.lead_generated = lead_generated;
        conversation.lead_score = score;
        Ok(())
    }

    async fn conversation_history(
        &self,
        conversation_id: i64,
    ) -> Result<Vec<StoredMessage>, PersistError> {
        let messages = self
            .messages
            .get(&conversation_id)
            .ok_or(PersistError::UnknownConversation(conversation_id))?;
        // insertion order equals creation order
        Ok(messages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(id: &str) -> UserIdentity {
        UserIdentity {
            external_id: id.to_string(),
            username: Some("tester".to_string()),
            first_name: None,
            last_name: None,
        }
    }

    #[tokio::test]
    async fn test_find_or_create_is_idempotent() {
        let store = MemoryStore::new();
        let first = store.find_or_create_user(&identity("42")).await.unwrap();
        let second = store.find_or_create_user(&identity("42")).await.unwrap();
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_history_preserves_order() {
        let store = MemoryStore::new();
        let user = store.find_or_create_user(&identity("42")).await.unwrap();
        let conversation = store.start_conversation(user.id).await.unwrap();
        for i in 0..5 {
            store
                .log_message(
                    conversation.id,
                    if i % 2 == 0 {
                        MessageRole::User
                    } else {
                        MessageRole::Bot
                    },
                    &format!("message {i}"),
                    "greeting",
                    None,
                    None,
                )
                .await
                .unwrap();
        }
        let history = store.conversation_history(conversation.id).await.unwrap();
        let contents: Vec<_> = history.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["message 0", "message 1", "message 2", "message 3", "message 4"]
        );
    }

    #[tokio::test]
    async fn test_complete_conversation_records_score() {
        let store = MemoryStore::new();
        let user = store.find_or_create_user(&identity("7")).await.unwrap();
        let conversation = store.start_conversation(user.id).await.unwrap();
        store
            .complete_conversation(conversation.id, true, Some(9))
            .await
            .unwrap();
        // completing an unknown conversation is an error
        assert!(store.complete_conversation(9999, true, None).await.is_err());
    }

    #[tokio::test]
    async fn test_unknown_conversation_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(
            store
                .log_message(77, MessageRole::User, "hi", "greeting", None, None)
                .await,
            Err(PersistError::UnknownConversation(77))
        ));
    }
}
