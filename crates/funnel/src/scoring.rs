//! Engagement scoring
//!
//! Deterministic additive score over the inbound message, the extracted
//! signals and the current stage, clamped to 0..=10. Pure: the same inputs
//! always produce the same score, which is what makes stage transitions and
//! lead qualification reproducible.

use sales_agent_core::{
    EmotionalTone, ExtractedSignals, FunnelStage, PurchaseIntent, Urgency,
};

/// Score one turn. `positive_keywords` is the locale's sentiment word list;
/// each keyword found in the message adds one point.
pub fn engagement_score(
    message: &str,
    stage: FunnelStage,
    signals: &ExtractedSignals,
    positive_keywords: &[String],
) -> u8 {
    let mut score: u32 = 0;
    let length = message.chars().count();

    match stage {
        FunnelStage::Spin(_) => {
            if length > 50 {
                score += 1;
            }
            if length > 100 {
                score += 1;
            }
        }
        FunnelStage::Aida(_) => {
            // Shoppers write shorter messages, so the length bar is lower and
            // questions count as engagement.
            if length > 20 {
                score += 1;
            }
            if length > 50 {
                score += 1;
            }
            if message.contains('?') {
                score += 1;
            }
            score += match signals.purchase_intent {
                Some(PurchaseIntent::ReadyToBuy) => 5,
                Some(PurchaseIntent::Considering) => 3,
                Some(PurchaseIntent::Browsing) => 1,
                None => 0,
            };
            score += match signals.emotional_tone {
                Some(EmotionalTone::Excited) => 2,
                Some(EmotionalTone::Concerned) => 1,
                _ => 0,
            };
        }
    }

    if signals.business_type.is_some() {
        score += 2;
    }
    if signals.preferences.is_some() {
        score += 2;
    }
    if signals.challenges.is_some() || !signals.pain_points.is_empty() {
        score += 2;
    }
    if !signals.interests.is_empty() {
        score += 2;
    }
    if signals.budget.is_some() {
        score += 3;
    }
    score += match signals.urgency {
        Some(Urgency::High) => 3,
        Some(Urgency::Medium) => 2,
        Some(Urgency::Low) => 1,
        None => 0,
    };

    score += u32::from(stage.base_score());

    let lower = message.to_lowercase();
    for keyword in positive_keywords {
        if lower.contains(&keyword.to_lowercase()) {
            score += 1;
        }
    }

    score.min(10) as u8
}
