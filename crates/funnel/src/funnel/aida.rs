//! AIDA (B2C) stage transitions

use sales_agent_core::{AidaStage, ExtractedSignals, PurchaseIntent};

/// One AIDA transition. Unlike the B2B funnel this one can fall back to
/// follow-up when the shopper disengages, and climb back out of it.
pub fn next_stage(
    current: AidaStage,
    signals: &ExtractedSignals,
    score: u8,
    message: &str,
) -> AidaStage {
    let length = message.trim().chars().count();
    let ready_to_buy = matches!(signals.purchase_intent, Some(PurchaseIntent::ReadyToBuy));

    match current {
        AidaStage::Greeting => AidaStage::Attention,
        AidaStage::Attention => {
            if length > 10 || signals.is_positive_response || message.contains('?') {
                AidaStage::Interest
            } else {
                AidaStage::Attention
            }
        }
        AidaStage::Interest => {
            let engaged = signals.preferences.is_some()
                || !signals.pain_points.is_empty()
                || !signals.interests.is_empty()
                || score >= 4;
            if engaged {
                AidaStage::Desire
            } else {
                AidaStage::Interest
            }
        }
        AidaStage::Desire => {
            if ready_to_buy || signals.budget.is_some() || score >= 6 {
                AidaStage::Action
            } else {
                AidaStage::Desire
            }
        }
        AidaStage::Action => {
            if ready_to_buy && score >= 7 {
                AidaStage::Completed
            } else if score < 4 {
                AidaStage::FollowUp
            } else {
                AidaStage::Action
            }
        }
        AidaStage::FollowUp => {
            if score >= 5 {
                AidaStage::Action
            } else {
                AidaStage::FollowUp
            }
        }
        AidaStage::Completed => AidaStage::Completed,
    }
}
