//! Strategic implications: reputation, competitive position, narrative control.

use crate::analyzer::references_competitor;
use crate::patterns::narrative_keyword;
use crate::stakeholders::count_patterns;
use crate::types::{
    CompetitivePosition, ConcernLevel, Intervention, Magnitude, MarketNarrative, Momentum,
    Pattern, PatternType, RelativeStrength, Reputation, SignalAnalysis, StakeholderMatrix,
    StrategicImplications, Trajectory,
};

/// Narrative territory the organization holds by default.
pub(crate) const CONTROLLED_NARRATIVES: &[&str] = &[
    "Product quality",
    "Customer relationships",
    "Industry expertise",
];

const DEFENDABLE_ADVANTAGES: &[&str] = &[
    "Established customer trust",
    "Depth of domain expertise",
    "Proven delivery track record",
];

const HIGH_RELEVANCE: u8 = 90;

#[must_use]
pub fn derive_implications(
    analyses: &[SignalAnalysis],
    patterns: &[Pattern],
    stakeholders: &StakeholderMatrix,
) -> StrategicImplications {
    StrategicImplications {
        reputation: reputation(analyses, patterns, stakeholders),
        competitive_position: competitive_position(analyses),
        market_narrative: market_narrative(analyses, patterns),
    }
}

fn reputation(
    analyses: &[SignalAnalysis],
    patterns: &[Pattern],
    stakeholders: &StakeholderMatrix,
) -> Reputation {
    let high_concern = stakeholders
        .groups()
        .iter()
        .filter(|(_, impact)| impact.concern_level == ConcernLevel::High)
        .count();
    let current_state = if high_concern >= 3 {
        "under pressure"
    } else if high_concern >= 1 {
        "localized challenges"
    } else {
        "generally positive"
    };

    let any_critical = analyses.iter().any(|a| a.magnitude == Magnitude::Critical);
    let high = analyses
        .iter()
        .filter(|a| a.magnitude == Magnitude::High)
        .count();
    let rapid = analyses.iter().filter(|a| a.velocity.is_rapid()).count();
    let cascades = count_patterns(patterns, PatternType::CascadeRisk);

    let trajectory = if any_critical {
        Trajectory::Crisis
    } else if rapid > 3 || cascades > 2 {
        Trajectory::Declining
    } else {
        Trajectory::Stable
    };

    let intervention_required = if any_critical {
        Intervention::Urgent
    } else if high > 2 {
        Intervention::Respond
    } else if high >= 1 {
        Intervention::Monitor
    } else {
        Intervention::None
    };

    Reputation {
        current_state: current_state.to_string(),
        trajectory,
        intervention_required,
        key_vulnerabilities: analyses
            .iter()
            .filter(|a| a.magnitude.is_severe())
            .map(|a| a.what_happened.clone())
            .collect(),
    }
}

fn competitive_position(analyses: &[SignalAnalysis]) -> CompetitivePosition {
    let competitor = analyses.iter().filter(|a| references_competitor(a)).count();
    let ours = analyses
        .iter()
        .filter(|a| a.relevance > HIGH_RELEVANCE)
        .count();

    let relative_strength = if competitor > ours * 2 {
        RelativeStrength::AtRisk
    } else if ours > competitor * 2 {
        RelativeStrength::Leader
    } else if competitor > ours {
        RelativeStrength::Follower
    } else {
        RelativeStrength::Challenger
    };

    let momentum = match competitor.cmp(&ours) {
        std::cmp::Ordering::Greater => Momentum::Losing,
        std::cmp::Ordering::Less => Momentum::Gaining,
        std::cmp::Ordering::Equal => Momentum::Maintaining,
    };

    CompetitivePosition {
        relative_strength,
        momentum,
        defendable_advantages: DEFENDABLE_ADVANTAGES.iter().map(ToString::to_string).collect(),
        exposed_flanks: analyses
            .iter()
            .filter(|a| references_competitor(a) && a.magnitude >= Magnitude::Medium)
            .map(|a| a.what_happened.clone())
            .collect(),
    }
}

fn market_narrative(analyses: &[SignalAnalysis], patterns: &[Pattern]) -> MarketNarrative {
    let narrative_shifts = patterns
        .iter()
        .filter(|p| p.pattern_type == PatternType::NarrativeShift);

    let mut narrative_opportunities: Vec<String> = narrative_shifts
        .clone()
        .filter_map(narrative_keyword)
        .map(|keyword| format!("Lead the conversation on {keyword}"))
        .collect();
    narrative_opportunities.extend(
        patterns
            .iter()
            .filter(|p| p.pattern_type == PatternType::CascadeRisk)
            .filter_map(|p| p.signals_connected.first())
            .map(|title| format!("Reframe the story around \"{title}\" before it sets")),
    );

    MarketNarrative {
        we_control: CONTROLLED_NARRATIVES.iter().map(ToString::to_string).collect(),
        they_control: analyses
            .iter()
            .filter(|a| references_competitor(a))
            .map(|a| a.signal.clone())
            .collect(),
        contested_ground: narrative_shifts.map(|p| p.insight.clone()).collect(),
        narrative_opportunities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stakeholders::assess_stakeholders;
    use crate::types::Velocity;

    fn analysis(
        title: &str,
        magnitude: Magnitude,
        velocity: Velocity,
        relevance: u8,
        competitor: bool,
    ) -> SignalAnalysis {
        SignalAnalysis {
            signal: title.to_string(),
            what_happened: title.to_string(),
            so_what: if competitor {
                "Competitor move by Globex".to_string()
            } else {
                "Market signal".to_string()
            },
            now_what: String::new(),
            magnitude,
            velocity,
            credibility: 50,
            relevance,
        }
    }

    fn derive(analyses: &[SignalAnalysis], patterns: &[Pattern]) -> StrategicImplications {
        let stakeholders = assess_stakeholders(analyses, patterns);
        derive_implications(analyses, patterns, &stakeholders)
    }

    fn cascade(title: &str) -> Pattern {
        Pattern {
            pattern_type: PatternType::CascadeRisk,
            signals_connected: vec![title.to_string()],
            insight: String::new(),
            confidence: 70,
            implications: vec![],
        }
    }

    #[test]
    fn empty_batch_is_stable() {
        let implications = derive(&[], &[]);
        assert_eq!(implications.reputation.current_state, "generally positive");
        assert_eq!(implications.reputation.trajectory, Trajectory::Stable);
        assert_eq!(
            implications.reputation.intervention_required,
            Intervention::None
        );
        assert_eq!(
            implications.competitive_position.relative_strength,
            RelativeStrength::Challenger
        );
        assert_eq!(
            implications.competitive_position.momentum,
            Momentum::Maintaining
        );
        assert_eq!(implications.market_narrative.we_control.len(), 3);
        assert!(implications.market_narrative.narrative_opportunities.is_empty());
    }

    #[test]
    fn critical_means_crisis_and_urgent() {
        let analyses = vec![analysis("Scandal", Magnitude::Critical, Velocity::Slow, 0, false)];
        let implications = derive(&analyses, &[]);
        assert_eq!(implications.reputation.trajectory, Trajectory::Crisis);
        assert_eq!(
            implications.reputation.intervention_required,
            Intervention::Urgent
        );
        assert_eq!(implications.reputation.key_vulnerabilities, ["Scandal"]);
    }

    #[test]
    fn intervention_tracks_high_magnitude_count() {
        let high = |n| vec![analysis("Launch", Magnitude::High, Velocity::Slow, 0, false); n];
        assert_eq!(
            derive(&high(1), &[]).reputation.intervention_required,
            Intervention::Monitor
        );
        assert_eq!(
            derive(&high(2), &[]).reputation.intervention_required,
            Intervention::Monitor
        );
        assert_eq!(
            derive(&high(3), &[]).reputation.intervention_required,
            Intervention::Respond
        );
    }

    #[test]
    fn rapid_spread_means_declining() {
        let rapid = vec![analysis("Note", Magnitude::Low, Velocity::Fast, 0, false); 4];
        assert_eq!(derive(&rapid, &[]).reputation.trajectory, Trajectory::Declining);
        let three = vec![analysis("Note", Magnitude::Low, Velocity::Viral, 0, false); 3];
        assert_eq!(derive(&three, &[]).reputation.trajectory, Trajectory::Stable);
    }

    #[test]
    fn many_cascades_mean_declining() {
        let patterns = vec![cascade("a"), cascade("b"), cascade("c")];
        assert_eq!(
            derive(&[], &patterns).reputation.trajectory,
            Trajectory::Declining
        );
    }

    #[test]
    fn current_state_follows_high_concern_groups() {
        // Four severe competitor analyses push customers and employees to high.
        let analyses =
            vec![analysis("Rival launch", Magnitude::High, Velocity::Slow, 0, true); 4];
        assert_eq!(
            derive(&analyses, &[]).reputation.current_state,
            "localized challenges"
        );
    }

    #[test]
    fn competitor_heavy_batch_is_at_risk() {
        let analyses = vec![
            analysis("Rival A", Magnitude::Medium, Velocity::Slow, 30, true),
            analysis("Rival B", Magnitude::Low, Velocity::Slow, 30, true),
            analysis("Rival C", Magnitude::Medium, Velocity::Slow, 30, true),
            analysis("Us", Magnitude::Low, Velocity::Slow, 95, false),
        ];
        let position = derive(&analyses, &[]).competitive_position;
        assert_eq!(position.relative_strength, RelativeStrength::AtRisk);
        assert_eq!(position.momentum, Momentum::Losing);
        assert_eq!(position.exposed_flanks, ["Rival A", "Rival C"]);
    }

    #[test]
    fn relevance_heavy_batch_leads() {
        let analyses = vec![
            analysis("Us 1", Magnitude::Low, Velocity::Slow, 100, false),
            analysis("Us 2", Magnitude::Low, Velocity::Slow, 95, false),
            analysis("Us 3", Magnitude::Low, Velocity::Slow, 91, false),
            analysis("Rival", Magnitude::Low, Velocity::Slow, 30, true),
        ];
        let position = derive(&analyses, &[]).competitive_position;
        assert_eq!(position.relative_strength, RelativeStrength::Leader);
        assert_eq!(position.momentum, Momentum::Gaining);
    }

    #[test]
    fn relevance_of_exactly_90_is_not_high() {
        let analyses = vec![analysis("Us", Magnitude::Low, Velocity::Slow, 90, false)];
        let position = derive(&analyses, &[]).competitive_position;
        assert_eq!(position.relative_strength, RelativeStrength::Challenger);
    }

    #[test]
    fn narrative_lists_derive_from_patterns() {
        let analyses = vec![analysis("Rival move", Magnitude::Low, Velocity::Slow, 0, true)];
        let patterns = vec![
            Pattern {
                pattern_type: PatternType::NarrativeShift,
                signals_connected: vec![],
                insight: "privacy emerging as dominant narrative".to_string(),
                confidence: 85,
                implications: vec![],
            },
            cascade("Outage"),
        ];
        let narrative = derive(&analyses, &patterns).market_narrative;
        assert_eq!(narrative.they_control, ["Rival move"]);
        assert_eq!(
            narrative.contested_ground,
            ["privacy emerging as dominant narrative"]
        );
        assert_eq!(narrative.narrative_opportunities.len(), 2);
        assert_eq!(
            narrative.narrative_opportunities[0],
            "Lead the conversation on privacy"
        );
        assert!(narrative.narrative_opportunities[1].contains("Outage"));
    }
}
