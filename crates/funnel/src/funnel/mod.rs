//! Stage transition machines
//!
//! Pure and total: every (stage, signals, score, message) combination maps to
//! exactly one next stage, terminal stages map to themselves, and no
//! transition skips more than one step forward. Nothing here touches I/O; the
//! pipeline applies the result to the session afterwards.

pub mod aida;
pub mod spin;

use sales_agent_core::{ExtractedSignals, FunnelStage};

/// Advance whichever funnel the session is running
pub fn next_stage(
    current: FunnelStage,
    signals: &ExtractedSignals,
    score: u8,
    message: &str,
) -> FunnelStage {
    match current {
        FunnelStage::Spin(stage) => {
            FunnelStage::Spin(spin::next_stage(stage, signals, score, message))
        }
        FunnelStage::Aida(stage) => {
            FunnelStage::Aida(aida::next_stage(stage, signals, score, message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_agent_core::{AidaStage, SpinStage};

    #[test]
    fn test_total_over_both_funnels() {
        // Silent empty turns still produce a defined next stage everywhere.
        let signals = ExtractedSignals::default();
        for stage in SpinStage::ALL {
            let next = next_stage(FunnelStage::Spin(stage), &signals, 0, "");
            assert!(matches!(next, FunnelStage::Spin(_)));
        }
        for stage in AidaStage::ALL {
            let next = next_stage(FunnelStage::Aida(stage), &signals, 0, "");
            assert!(matches!(next, FunnelStage::Aida(_)));
        }
    }

    #[test]
    fn test_terminal_stages_absorb() {
        let signals = ExtractedSignals::default();
        let done = FunnelStage::Spin(SpinStage::ConversationCompleted);
        assert_eq!(next_stage(done, &signals, 10, "yes, call me at +380977281466"), done);
        let done = FunnelStage::Aida(AidaStage::Completed);
        assert_eq!(next_stage(done, &signals, 10, "I want to buy everything"), done);
    }
}
