//! Funnel stage definitions
//!
//! Two funnels run side by side: the B2B lead-qualification funnel based on
//! SPIN selling, and the B2C shopping funnel based on AIDA. Stages are plain
//! enums; the transition rules live in the funnel crate so the stage types
//! stay dependency-free and serializable.

use serde::{Deserialize, Serialize};

/// Stages of the B2B SPIN funnel, in funnel order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpinStage {
    #[default]
    Greeting,
    NameCollection,
    TrustBuilding,
    /// Superseded by the direct trust_building -> situation_discovery flow;
    /// still a valid state for sessions restored mid-funnel.
    PermissionRequest,
    SituationDiscovery,
    ProblemIdentification,
    ImplicationDevelopment,
    NeedPayoff,
    Proposal,
    Closing,
    ContactCollection,
    ConversationCompleted,
}

impl SpinStage {
    /// All stages in funnel order
    pub const ALL: [SpinStage; 12] = [
        SpinStage::Greeting,
        SpinStage::NameCollection,
        SpinStage::TrustBuilding,
        SpinStage::PermissionRequest,
        SpinStage::SituationDiscovery,
        SpinStage::ProblemIdentification,
        SpinStage::ImplicationDevelopment,
        SpinStage::NeedPayoff,
        SpinStage::Proposal,
        SpinStage::Closing,
        SpinStage::ContactCollection,
        SpinStage::ConversationCompleted,
    ];

    /// Snake-case identifier, matches the serialized form and the language
    /// pack instruction keys
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinStage::Greeting => "greeting",
            SpinStage::NameCollection => "name_collection",
            SpinStage::TrustBuilding => "trust_building",
            SpinStage::PermissionRequest => "permission_request",
            SpinStage::SituationDiscovery => "situation_discovery",
            SpinStage::ProblemIdentification => "problem_identification",
            SpinStage::ImplicationDevelopment => "implication_development",
            SpinStage::NeedPayoff => "need_payoff",
            SpinStage::Proposal => "proposal",
            SpinStage::Closing => "closing",
            SpinStage::ContactCollection => "contact_collection",
            SpinStage::ConversationCompleted => "conversation_completed",
        }
    }

    /// Parse a snake-case identifier
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|stage| stage.as_str() == s)
    }

    /// Terminal stages map to themselves in the state machine
    pub fn is_terminal(&self) -> bool {
        matches!(self, SpinStage::ConversationCompleted)
    }

    /// Stage-depth base bonus for the engagement scorer. Monotonically
    /// increasing with funnel depth; permission_request shares the
    /// trust_building value since it sits off the main path.
    pub fn base_score(&self) -> u8 {
        match self {
            SpinStage::Greeting => 1,
            SpinStage::NameCollection => 2,
            SpinStage::TrustBuilding => 3,
            SpinStage::PermissionRequest => 3,
            SpinStage::SituationDiscovery => 4,
            SpinStage::ProblemIdentification => 5,
            SpinStage::ImplicationDevelopment => 6,
            SpinStage::NeedPayoff => 7,
            SpinStage::Proposal => 8,
            SpinStage::Closing => 9,
            SpinStage::ContactCollection => 10,
            SpinStage::ConversationCompleted => 10,
        }
    }
}

impl std::fmt::Display for SpinStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stages of the B2C AIDA funnel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AidaStage {
    #[default]
    Greeting,
    Attention,
    Interest,
    Desire,
    Action,
    FollowUp,
    Completed,
}

impl AidaStage {
    /// All stages
    pub const ALL: [AidaStage; 7] = [
        AidaStage::Greeting,
        AidaStage::Attention,
        AidaStage::Interest,
        AidaStage::Desire,
        AidaStage::Action,
        AidaStage::FollowUp,
        AidaStage::Completed,
    ];

    /// Snake-case identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            AidaStage::Greeting => "greeting",
            AidaStage::Attention => "attention",
            AidaStage::Interest => "interest",
            AidaStage::Desire => "desire",
            AidaStage::Action => "action",
            AidaStage::FollowUp => "follow_up",
            AidaStage::Completed => "completed",
        }
    }

    /// Parse a snake-case identifier
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|stage| stage.as_str() == s)
    }

    /// Terminal stages map to themselves in the state machine
    pub fn is_terminal(&self) -> bool {
        matches!(self, AidaStage::Completed)
    }

    /// Stage-depth base bonus for the engagement scorer. Follow-up scores
    /// below action because the customer disengaged to get there.
    pub fn base_score(&self) -> u8 {
        match self {
            AidaStage::Greeting => 1,
            AidaStage::Attention => 2,
            AidaStage::Interest => 4,
            AidaStage::Desire => 6,
            AidaStage::Action => 8,
            AidaStage::FollowUp => 5,
            AidaStage::Completed => 10,
        }
    }

    /// Stages in which product recommendations are surfaced
    pub fn wants_recommendations(&self) -> bool {
        matches!(
            self,
            AidaStage::Interest | AidaStage::Desire | AidaStage::Action
        )
    }
}

impl std::fmt::Display for AidaStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stage of whichever funnel the session is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "funnel", content = "stage", rename_all = "snake_case")]
pub enum FunnelStage {
    Spin(SpinStage),
    Aida(AidaStage),
}

impl FunnelStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunnelStage::Spin(stage) => stage.as_str(),
            FunnelStage::Aida(stage) => stage.as_str(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            FunnelStage::Spin(stage) => stage.is_terminal(),
            FunnelStage::Aida(stage) => stage.is_terminal(),
        }
    }

    pub fn base_score(&self) -> u8 {
        match self {
            FunnelStage::Spin(stage) => stage.base_score(),
            FunnelStage::Aida(stage) => stage.base_score(),
        }
    }
}

impl Default for FunnelStage {
    fn default() -> Self {
        FunnelStage::Spin(SpinStage::Greeting)
    }
}

impl std::fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_roundtrip() {
        for stage in SpinStage::ALL {
            assert_eq!(SpinStage::from_str(stage.as_str()), Some(stage));
        }
    }

    #[test]
    fn test_aida_roundtrip() {
        for stage in AidaStage::ALL {
            assert_eq!(AidaStage::from_str(stage.as_str()), Some(stage));
        }
    }

    #[test]
    fn test_base_scores_monotonic_on_main_path() {
        // The main SPIN path (permission_request excluded) never scores lower
        // than the stage before it.
        let main_path: Vec<SpinStage> = SpinStage::ALL
            .iter()
            .copied()
            .filter(|s| *s != SpinStage::PermissionRequest)
            .collect();
        for pair in main_path.windows(2) {
            assert!(pair[1].base_score() >= pair[0].base_score());
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&SpinStage::NameCollection).unwrap();
        assert_eq!(json, "\"name_collection\"");
        let json = serde_json::to_string(&AidaStage::FollowUp).unwrap();
        assert_eq!(json, "\"follow_up\"");
    }

    #[test]
    fn test_recommendation_stages() {
        assert!(AidaStage::Interest.wants_recommendations());
        assert!(AidaStage::Action.wants_recommendations());
        assert!(!AidaStage::Greeting.wants_recommendations());
        assert!(!AidaStage::FollowUp.wants_recommendations());
    }
}
