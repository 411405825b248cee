//! Sales funnel engine
//!
//! Everything between an inbound customer message and the outbound reply:
//! signal extraction, engagement scoring, the SPIN and AIDA stage machines,
//! product recommendation, prompt assembly and the turn pipeline that ties
//! them together. The pipeline only talks to the outside world through the
//! collaborator traits in `sales-agent-core`.

pub mod analyzer;
pub mod contacts;
pub mod funnel;
pub mod notify;
pub mod pipeline;
pub mod prompt;
pub mod recommend;
pub mod registry;
pub mod scoring;

use sales_agent_core::PersistError;
use thiserror::Error;

pub use analyzer::MessageAnalyzer;
pub use pipeline::{NextAction, SalesEngine, TurnOutcome};
pub use registry::SessionRegistry;

/// Errors surfaced by the engine. Mid-turn failures degrade instead of
/// erroring; only session bootstrap can fail outright.
#[derive(Error, Debug)]
pub enum FunnelError {
    #[error("Session bootstrap failed: {0}")]
    Bootstrap(#[from] PersistError),
}
