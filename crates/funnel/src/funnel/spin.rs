//! SPIN (B2B) stage transitions

use once_cell::sync::Lazy;
use regex::Regex;
use sales_agent_core::{ExtractedSignals, SpinStage};

use crate::contacts;

static BARE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zА-Яа-яЁёІіЇїЄєҐґÄäÖöÜüß' -]{2,20}$").expect("name pattern compiles")
});

/// Tokens that keep the permission gate closed
const REFUSALS: [&str; 4] = ["no", "нет", "не хочу", "не надо"];

/// Tokens that accept the proposal and open contact collection
const AGREEMENTS: [&str; 8] = [
    "да",
    "yes",
    "agree",
    "sure",
    "ok",
    "устраивает",
    "подходит",
    "согласен",
];

/// A short answer that is plausibly just the user's name
pub fn looks_like_name(message: &str) -> bool {
    BARE_NAME.is_match(message.trim())
}

/// One SPIN transition. Stalls in place when the gate for the next stage is
/// not met; never moves backwards.
pub fn next_stage(
    current: SpinStage,
    signals: &ExtractedSignals,
    score: u8,
    message: &str,
) -> SpinStage {
    let trimmed = message.trim();
    let length = trimmed.chars().count();
    let lower = trimmed.to_lowercase();

    match current {
        SpinStage::Greeting => SpinStage::NameCollection,
        SpinStage::NameCollection => {
            if looks_like_name(trimmed) || signals.has_name {
                SpinStage::TrustBuilding
            } else {
                SpinStage::NameCollection
            }
        }
        // Rapport established; go straight into discovery instead of asking
        // for permission first.
        SpinStage::TrustBuilding => SpinStage::SituationDiscovery,
        SpinStage::PermissionRequest => {
            if REFUSALS.iter().any(|token| lower.contains(token)) {
                SpinStage::PermissionRequest
            } else {
                SpinStage::SituationDiscovery
            }
        }
        SpinStage::SituationDiscovery => {
            if length > 3 || signals.business_type.is_some() {
                SpinStage::ProblemIdentification
            } else {
                SpinStage::SituationDiscovery
            }
        }
        SpinStage::ProblemIdentification => {
            if length > 10 || signals.challenges.is_some() {
                SpinStage::ImplicationDevelopment
            } else {
                SpinStage::ProblemIdentification
            }
        }
        SpinStage::ImplicationDevelopment => {
            if length > 5 || score >= 5 {
                SpinStage::NeedPayoff
            } else {
                SpinStage::ImplicationDevelopment
            }
        }
        SpinStage::NeedPayoff => {
            if length > 3 || score >= 5 {
                SpinStage::Proposal
            } else {
                SpinStage::NeedPayoff
            }
        }
        SpinStage::Proposal => {
            if length > 2 || score >= 4 {
                SpinStage::Closing
            } else {
                SpinStage::Proposal
            }
        }
        SpinStage::Closing => {
            if AGREEMENTS.iter().any(|token| lower.contains(token)) {
                SpinStage::ContactCollection
            } else {
                SpinStage::Closing
            }
        }
        SpinStage::ContactCollection => {
            let shared_contact = contacts::has_contact(trimmed)
                || signals
                    .contact_info
                    .as_ref()
                    .is_some_and(|info| !info.is_empty());
            if shared_contact {
                SpinStage::ConversationCompleted
            } else {
                SpinStage::ContactCollection
            }
        }
        SpinStage::ConversationCompleted => SpinStage::ConversationCompleted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_agent_core::ContactInfo;

    fn empty() -> ExtractedSignals {
        ExtractedSignals::default()
    }

    #[test]
    fn test_bare_name_advances_to_trust_building() {
        assert_eq!(
            next_stage(SpinStage::NameCollection, &empty(), 0, "Alex"),
            SpinStage::TrustBuilding
        );
        assert_eq!(
            next_stage(SpinStage::NameCollection, &empty(), 0, "Анна-Мария"),
            SpinStage::TrustBuilding
        );
    }

    #[test]
    fn test_long_reply_without_name_stalls() {
        let message = "I run a small bakery and we keep missing customer messages.";
        assert_eq!(
            next_stage(SpinStage::NameCollection, &empty(), 0, message),
            SpinStage::NameCollection
        );
    }

    #[test]
    fn test_analysis_name_flag_advances() {
        let signals = ExtractedSignals {
            has_name: true,
            ..Default::default()
        };
        assert_eq!(
            next_stage(SpinStage::NameCollection, &signals, 0, "you can call me Mr. K."),
            SpinStage::TrustBuilding
        );
    }

    #[test]
    fn test_trust_building_skips_permission() {
        assert_eq!(
            next_stage(SpinStage::TrustBuilding, &empty(), 0, "nice to meet you too"),
            SpinStage::SituationDiscovery
        );
    }

    #[test]
    fn test_permission_refusal_stalls() {
        assert_eq!(
            next_stage(SpinStage::PermissionRequest, &empty(), 0, "не хочу об этом говорить"),
            SpinStage::PermissionRequest
        );
        assert_eq!(
            next_stage(SpinStage::PermissionRequest, &empty(), 0, "sure, go ahead"),
            SpinStage::SituationDiscovery
        );
    }

    #[test]
    fn test_agreement_opens_contact_collection() {
        assert_eq!(
            next_stage(SpinStage::Closing, &empty(), 5, "да, согласен"),
            SpinStage::ContactCollection
        );
        assert_eq!(
            next_stage(SpinStage::Closing, &empty(), 5, "hmm"),
            SpinStage::Closing
        );
    }

    #[test]
    fn test_shared_phone_completes_the_funnel() {
        assert_eq!(
            next_stage(SpinStage::ContactCollection, &empty(), 5, "+380977281466"),
            SpinStage::ConversationCompleted
        );
    }

    #[test]
    fn test_analysis_contact_completes_the_funnel() {
        let signals = ExtractedSignals {
            contact_info: Some(ContactInfo {
                email: Some("jane@example.com".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            next_stage(SpinStage::ContactCollection, &signals, 5, "sent you my mail"),
            SpinStage::ConversationCompleted
        );
    }

    #[test]
    fn test_never_moves_backwards() {
        for stage in SpinStage::ALL {
            let position = |s: SpinStage| SpinStage::ALL.iter().position(|x| *x == s);
            let next = next_stage(stage, &empty(), 10, "да yes, this is a longer answer +380977281466");
            assert!(position(next) >= position(stage));
        }
    }
}
