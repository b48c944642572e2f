//! Signal intelligence engine.
//!
//! Turns a batch of raw external signals about a monitored organization into
//! structured strategic intelligence: per-signal assessments, cross-signal
//! patterns, stakeholder impact, strategic implications, a phased response
//! plan, and synthesis-level insights. The transformation is pure and
//! deterministic for a given reference time.

pub mod analyzer;
pub mod error;
pub mod implications;
pub mod insights;
pub mod patterns;
pub mod pipeline;
pub mod response;
pub mod scorer;
pub mod stakeholders;
pub mod types;

pub use error::EngineError;
pub use pipeline::{analyze, analyze_now};
pub use scorer::{classify_magnitude, classify_velocity, credibility_score, relevance_score};
pub use types::{
    ActionPlan, AnalysisResult, CompetitivePosition, ConcernLevel, EliteInsights, Intervention,
    Magnitude, MarketNarrative, Momentum, Pattern, PatternType, Priority, RelativeStrength,
    Reputation, ResponseStrategy, SignalAnalysis, StakeholderImpact, StakeholderMatrix,
    StrategicImplications, Trajectory, Velocity,
};
