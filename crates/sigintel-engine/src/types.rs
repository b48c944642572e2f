//! Output model of the analysis pipeline.
//!
//! Every type here is built fresh by one pipeline run and never mutated after
//! construction. Field and variant names serialize to the snake_case JSON shape
//! consumed by downstream dashboards.

use serde::{Deserialize, Serialize};

/// Severity of the event a signal describes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    Low,
    Medium,
    High,
    Critical,
}

impl Magnitude {
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Magnitude::Low => 0,
            Magnitude::Medium => 1,
            Magnitude::High => 2,
            Magnitude::Critical => 3,
        }
    }

    /// `high` or `critical`.
    #[must_use]
    pub const fn is_severe(self) -> bool {
        self.rank() >= Magnitude::High.rank()
    }
}

/// How fast a signal is spreading, slowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Velocity {
    Slow,
    Moderate,
    Fast,
    Viral,
}

impl Velocity {
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Velocity::Slow => 0,
            Velocity::Moderate => 1,
            Velocity::Fast => 2,
            Velocity::Viral => 3,
        }
    }

    /// `fast` or `viral`.
    #[must_use]
    pub const fn is_rapid(self) -> bool {
        self.rank() >= Velocity::Fast.rank()
    }
}

/// Assessment of one input signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalAnalysis {
    /// Title of the analyzed signal.
    pub signal: String,
    pub what_happened: String,
    pub so_what: String,
    pub now_what: String,
    pub magnitude: Magnitude,
    pub velocity: Velocity,
    /// Source trust score in `[0, 100]`.
    pub credibility: u8,
    /// Pertinence to the organization in `[0, 100]`.
    pub relevance: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    CompetitiveAcceleration,
    NarrativeShift,
    CascadeRisk,
}

/// A correlation detected across the analyzed batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    /// Titles of the signals that make up the pattern.
    pub signals_connected: Vec<String>,
    pub insight: String,
    /// Confidence in `[0, 100]`.
    pub confidence: u8,
    pub implications: Vec<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConcernLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Projected effect of the batch on one stakeholder group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderImpact {
    pub perception_shift: String,
    pub concern_level: ConcernLevel,
    pub likely_questions: Vec<String>,
    pub messaging_needs: Vec<String>,
    pub proof_points_required: Vec<String>,
}

/// One [`StakeholderImpact`] per fixed stakeholder group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderMatrix {
    pub customers: StakeholderImpact,
    pub investors: StakeholderImpact,
    pub media: StakeholderImpact,
    pub employees: StakeholderImpact,
    pub partners: StakeholderImpact,
    pub regulators: StakeholderImpact,
}

impl StakeholderMatrix {
    /// All six groups in declaration order.
    #[must_use]
    pub fn groups(&self) -> [(&'static str, &StakeholderImpact); 6] {
        [
            ("customers", &self.customers),
            ("investors", &self.investors),
            ("media", &self.media),
            ("employees", &self.employees),
            ("partners", &self.partners),
            ("regulators", &self.regulators),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trajectory {
    Improving,
    Stable,
    Declining,
    Crisis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intervention {
    None,
    Monitor,
    Respond,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeStrength {
    Leader,
    Challenger,
    Follower,
    AtRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Momentum {
    Gaining,
    Maintaining,
    Losing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reputation {
    pub current_state: String,
    pub trajectory: Trajectory,
    pub intervention_required: Intervention,
    pub key_vulnerabilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitivePosition {
    pub relative_strength: RelativeStrength,
    pub momentum: Momentum,
    pub defendable_advantages: Vec<String>,
    pub exposed_flanks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketNarrative {
    pub we_control: Vec<String>,
    pub they_control: Vec<String>,
    pub contested_ground: Vec<String>,
    pub narrative_opportunities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicImplications {
    pub reputation: Reputation,
    pub competitive_position: CompetitivePosition,
    pub market_narrative: MarketNarrative,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// One level lower; `low` stays `low`.
    #[must_use]
    pub const fn downgrade(self) -> Self {
        match self {
            Priority::Critical => Priority::High,
            Priority::High => Priority::Medium,
            Priority::Medium | Priority::Low => Priority::Low,
        }
    }
}

impl From<Intervention> for Priority {
    fn from(intervention: Intervention) -> Self {
        match intervention {
            Intervention::Urgent => Priority::Critical,
            Intervention::Respond => Priority::High,
            Intervention::Monitor => Priority::Medium,
            Intervention::None => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub priority: Priority,
    pub actions: Vec<String>,
    pub messaging: Vec<String>,
    pub channels: Vec<String>,
    pub success_metrics: Vec<String>,
}

/// Action plans keyed by time horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseStrategy {
    pub immediate_24h: ActionPlan,
    pub short_term_7d: ActionPlan,
    pub medium_term_30d: ActionPlan,
    pub long_term_90d: ActionPlan,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliteInsights {
    pub hidden_connections: Vec<String>,
    pub non_obvious_risks: Vec<String>,
    pub asymmetric_opportunities: Vec<String>,
    pub narrative_leverage_points: Vec<String>,
    pub strategic_blindspots: Vec<String>,
}

/// The complete report produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub signal_analysis: Vec<SignalAnalysis>,
    pub pattern_recognition: Vec<Pattern>,
    pub stakeholder_impact: StakeholderMatrix,
    pub strategic_implications: StrategicImplications,
    pub response_strategy: ResponseStrategy,
    pub elite_insights: EliteInsights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_rank_matches_ordering() {
        assert!(Magnitude::Critical > Magnitude::High);
        assert!(Magnitude::High > Magnitude::Medium);
        assert!(Magnitude::Medium > Magnitude::Low);
        assert_eq!(Magnitude::Critical.rank(), 3);
        assert!(Magnitude::High.is_severe());
        assert!(!Magnitude::Medium.is_severe());
    }

    #[test]
    fn velocity_viral_is_fastest() {
        assert!(Velocity::Viral > Velocity::Fast);
        assert!(Velocity::Fast.is_rapid());
        assert!(!Velocity::Moderate.is_rapid());
    }

    #[test]
    fn priority_downgrade_steps_one_level() {
        assert_eq!(Priority::Critical.downgrade(), Priority::High);
        assert_eq!(Priority::High.downgrade(), Priority::Medium);
        assert_eq!(Priority::Low.downgrade(), Priority::Low);
    }

    #[test]
    fn concern_and_priority_order_by_severity() {
        assert!(ConcernLevel::Critical > ConcernLevel::High);
        assert!(ConcernLevel::Medium > ConcernLevel::Low);
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::Critical.downgrade() < Priority::Critical);
        assert_eq!(Priority::Low.downgrade().cmp(&Priority::Low), std::cmp::Ordering::Equal);
    }

    #[test]
    fn priority_from_intervention() {
        assert_eq!(Priority::from(Intervention::Urgent), Priority::Critical);
        assert_eq!(Priority::from(Intervention::Respond), Priority::High);
        assert_eq!(Priority::from(Intervention::Monitor), Priority::Medium);
        assert_eq!(Priority::from(Intervention::None), Priority::Low);
    }

    #[test]
    fn enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_value(PatternType::CompetitiveAcceleration).unwrap(),
            "competitive_acceleration"
        );
        assert_eq!(
            serde_json::to_value(RelativeStrength::AtRisk).unwrap(),
            "at_risk"
        );
        assert_eq!(serde_json::to_value(Velocity::Viral).unwrap(), "viral");
    }
}
