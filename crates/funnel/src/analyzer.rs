//! Model-side message analysis
//!
//! Sends an extraction prompt to the text generator and parses the JSON it
//! returns. Analysis is best-effort: any generation or parse failure degrades
//! to empty signals with a warning, it never fails the turn.

use std::sync::Arc;

use sales_agent_core::{ExtractedSignals, FunnelStage, TextGenerator};

use crate::prompt;

pub struct MessageAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl MessageAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Extract signals from one inbound message. The stage selects the B2B or
    /// B2C extraction prompt.
    pub async fn analyze(&self, message: &str, stage: FunnelStage) -> ExtractedSignals {
        let extraction_prompt = match stage {
            FunnelStage::Spin(_) => prompt::build_extraction_prompt(message),
            FunnelStage::Aida(_) => prompt::build_b2c_extraction_prompt(message),
        };

        let raw = match self.generator.generate(&extraction_prompt).await {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(%error, "message analysis failed, continuing without signals");
                return ExtractedSignals::default();
            }
        };

        parse_signals(&raw)
    }
}

/// Parse model output into signals, tolerating markdown code fences
pub fn parse_signals(raw: &str) -> ExtractedSignals {
    let cleaned = raw.replace("```json", "").replace("```", "");
    match serde_json::from_str(cleaned.trim()) {
        Ok(signals) => signals,
        Err(error) => {
            tracing::warn!(%error, "unparseable analysis output, continuing without signals");
            ExtractedSignals::default()
        }
    }
}
