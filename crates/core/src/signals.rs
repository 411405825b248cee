//! Per-turn analysis results
//!
//! `ExtractedSignals` is the JSON shape the analysis prompt asks the model to
//! return. Every field is optional and defaults to absent: a partially filled
//! (or entirely empty) object is always a valid value, and the all-default
//! value doubles as the degraded "analysis failed" result.

use serde::{Deserialize, Serialize};

use crate::session::{PurchaseIntent, Urgency};

/// Structured contact details found in a message or accumulated on a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub telegram: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none() && self.telegram.is_none()
    }

    /// Fill missing fields from `other`. Existing values are kept: contacts
    /// are never overwritten once captured.
    pub fn merge_from(&mut self, other: &ContactInfo) {
        if self.phone.is_none() {
            self.phone = other.phone.clone();
        }
        if self.email.is_none() {
            self.email = other.email.clone();
        }
        if self.telegram.is_none() {
            self.telegram = other.telegram.clone();
        }
    }
}

/// Emotional tone classes the B2C analysis prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalTone {
    Excited,
    Neutral,
    Concerned,
    Frustrated,
}

/// Signals extracted from one inbound message.
///
/// Field names are camelCase to match the JSON the extraction prompt
/// specifies. Unknown fields in the model's output are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractedSignals {
    pub business_type: Option<String>,
    pub challenges: Option<String>,
    pub preferences: Option<String>,
    pub budget: Option<String>,
    pub urgency: Option<Urgency>,
    pub interests: Vec<String>,
    pub pain_points: Vec<String>,
    pub purchase_intent: Option<PurchaseIntent>,
    pub has_name: bool,
    pub is_positive_response: bool,
    pub gave_permission: bool,
    pub emotional_tone: Option<EmotionalTone>,
    pub contact_info: Option<ContactInfo>,
}

impl ExtractedSignals {
    /// True when analysis produced nothing usable
    pub fn is_empty(&self) -> bool {
        *self == ExtractedSignals::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_deserializes() {
        let signals: ExtractedSignals =
            serde_json::from_str(r#"{"businessType": "bakery", "hasName": true}"#).unwrap();
        assert_eq!(signals.business_type.as_deref(), Some("bakery"));
        assert!(signals.has_name);
        assert!(signals.interests.is_empty());
        assert!(signals.contact_info.is_none());
    }

    #[test]
    fn test_empty_object_is_default() {
        let signals: ExtractedSignals = serde_json::from_str("{}").unwrap();
        assert!(signals.is_empty());
    }

    #[test]
    fn test_contact_merge_keeps_existing() {
        let mut contacts = ContactInfo {
            phone: Some("+380977281466".into()),
            ..Default::default()
        };
        contacts.merge_from(&ContactInfo {
            phone: Some("+10000000000".into()),
            email: Some("a@b.com".into()),
            telegram: None,
        });
        assert_eq!(contacts.phone.as_deref(), Some("+380977281466"));
        assert_eq!(contacts.email.as_deref(), Some("a@b.com"));
        assert!(contacts.telegram.is_none());
    }

    #[test]
    fn test_tone_lowercase() {
        let tone: EmotionalTone = serde_json::from_str("\"excited\"").unwrap();
        assert_eq!(tone, EmotionalTone::Excited);
    }
}
