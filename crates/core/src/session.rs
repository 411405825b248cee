//! Conversation session state
//!
//! One `ConversationSession` per active user/channel pairing. The turn
//! pipeline owns mutation; the prompt builder only reads. Callers treat the
//! session as a snapshot: the pipeline returns an updated copy and the
//! registry swaps it in, so a failed turn leaves the stored session untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::product::ScoredProduct;
use crate::signals::{ContactInfo, ExtractedSignals};
use crate::stage::FunnelStage;

/// Urgency level reported by message analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

/// Where the customer sits on the buy axis (B2C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseIntent {
    Browsing,
    Considering,
    ReadyToBuy,
}

impl PurchaseIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseIntent::Browsing => "browsing",
            PurchaseIntent::Considering => "considering",
            PurchaseIntent::ReadyToBuy => "ready_to_buy",
        }
    }
}

/// Accumulated profile of the user, filled in opportunistically from
/// analysis results across turns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub business_type: Option<String>,
    pub current_challenges: Option<String>,
    pub preferences: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub urgency: Option<Urgency>,
    pub interests: Vec<String>,
    pub pain_points: Vec<String>,
    pub lifestyle: Option<String>,
}

/// Per-conversation state container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSession {
    /// Transport-specific stable identity (chat id, phone, ...)
    pub user_id: String,
    /// Handle/username supplied by the transport, if any
    pub user_name: Option<String>,
    /// Name the user gave during the funnel
    pub user_provided_name: Option<String>,
    pub language: Language,
    pub stage: FunnelStage,
    pub user_data: UserProfile,
    /// Append-only `category:value` tags, duplicates suppressed
    pub tags: Vec<String>,
    /// Contacts captured so far; merge-only, never cleared
    pub extracted_contacts: ContactInfo,
    /// Foreign keys into the persistence collaborator
    pub conversation_id: Option<i64>,
    pub db_user_id: Option<i64>,
    pub recommended_products: Vec<ScoredProduct>,
    pub current_product_focus: Option<String>,
    pub purchase_intent: Option<PurchaseIntent>,
    pub started_at: DateTime<Utc>,
}

impl ConversationSession {
    /// New session starting at the given funnel's entry stage
    pub fn new(user_id: impl Into<String>, language: Language, stage: FunnelStage) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: None,
            user_provided_name: None,
            language,
            stage,
            user_data: UserProfile::default(),
            tags: Vec::new(),
            extracted_contacts: ContactInfo::default(),
            conversation_id: None,
            db_user_id: None,
            recommended_products: Vec::new(),
            current_product_focus: None,
            purchase_intent: None,
            started_at: Utc::now(),
        }
    }

    /// Append a tag unless it is already present
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Fold one turn's analysis results into the accumulated profile, tags
    /// and contacts. Only non-empty signal fields take effect, so a degraded
    /// (all-default) analysis leaves the session unchanged.
    pub fn apply_signals(&mut self, signals: &ExtractedSignals) {
        if let Some(business_type) = &signals.business_type {
            self.user_data.business_type = Some(business_type.clone());
        }
        if let Some(challenges) = &signals.challenges {
            self.user_data.current_challenges = Some(challenges.clone());
        }
        if let Some(preferences) = &signals.preferences {
            self.user_data.preferences = Some(preferences.clone());
            self.add_tag(format!("pref:{}", preferences.to_lowercase()));
        }
        if let Some(budget) = &signals.budget {
            self.user_data.budget = Some(budget.clone());
            self.add_tag(format!("budget:{}", budget.to_lowercase()));
        }
        if let Some(urgency) = signals.urgency {
            self.user_data.urgency = Some(urgency);
            self.add_tag(format!("urgency:{}", urgency.as_str()));
        }
        for interest in &signals.interests {
            let lower = interest.to_lowercase();
            if !self.user_data.interests.contains(&lower) {
                self.user_data.interests.push(lower.clone());
            }
            self.add_tag(format!("interest:{lower}"));
        }
        for pain in &signals.pain_points {
            let lower = pain.to_lowercase();
            if !self.user_data.pain_points.contains(&lower) {
                self.user_data.pain_points.push(lower.clone());
            }
            self.add_tag(format!("pain:{lower}"));
        }
        if let Some(intent) = signals.purchase_intent {
            self.purchase_intent = Some(intent);
            self.add_tag(format!("intent:{}", intent.as_str()));
        }
        if let Some(contacts) = &signals.contact_info {
            self.extracted_contacts.merge_from(contacts);
        }
    }
}
