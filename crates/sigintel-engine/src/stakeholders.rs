//! Stakeholder impact projections for the six fixed groups.

use crate::analyzer::references_competitor;
use crate::types::{
    ConcernLevel, Pattern, PatternType, SignalAnalysis, StakeholderImpact, StakeholderMatrix,
};

/// Derive the stakeholder matrix from the analyses and patterns of one batch.
#[must_use]
pub fn assess_stakeholders(analyses: &[SignalAnalysis], patterns: &[Pattern]) -> StakeholderMatrix {
    let severe = analyses.iter().filter(|a| a.magnitude.is_severe()).count();
    let accelerations = count_patterns(patterns, PatternType::CompetitiveAcceleration);
    let narratives = count_patterns(patterns, PatternType::NarrativeShift);
    let competitor_mentions = analyses.iter().filter(|a| references_competitor(a)).count();

    StakeholderMatrix {
        customers: customers(severe),
        investors: investors(accelerations),
        media: media(narratives),
        employees: employees(competitor_mentions),
        partners: partners(),
        regulators: regulators(),
    }
}

pub(crate) fn count_patterns(patterns: &[Pattern], pattern_type: PatternType) -> usize {
    patterns
        .iter()
        .filter(|p| p.pattern_type == pattern_type)
        .count()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn customers(severe: usize) -> StakeholderImpact {
    let concern_level = if severe > 3 {
        ConcernLevel::High
    } else if severe > 1 {
        ConcernLevel::Medium
    } else {
        ConcernLevel::Low
    };
    let perception_shift = if severe > 2 {
        "Customers are questioning stability and may evaluate alternatives"
    } else {
        "Customer confidence remains steady"
    };

    StakeholderImpact {
        perception_shift: perception_shift.to_string(),
        concern_level,
        likely_questions: strings(&[
            "Will this affect the service I rely on?",
            "Is my data and investment safe?",
        ]),
        messaging_needs: strings(&[
            "Reassurance on continuity of service",
            "Clear explanation of what is changing",
        ]),
        proof_points_required: strings(&[
            "Service level and uptime record",
            "Customer testimonials",
        ]),
    }
}

fn investors(accelerations: usize) -> StakeholderImpact {
    StakeholderImpact {
        perception_shift: if accelerations > 0 {
            "Investors are weighing competitive pressure against our growth story".to_string()
        } else {
            "Investors are focused on execution against plan".to_string()
        },
        concern_level: if accelerations > 1 {
            ConcernLevel::High
        } else {
            ConcernLevel::Medium
        },
        likely_questions: strings(&[
            "How are you responding to competitor moves?",
            "Is the growth outlook at risk?",
        ]),
        messaging_needs: strings(&[
            "Articulate differentiated strategy",
            "Reaffirm financial guidance",
        ]),
        proof_points_required: strings(&[
            "Pipeline and retention metrics",
            "Roadmap milestones delivered",
        ]),
    }
}

fn media(narratives: usize) -> StakeholderImpact {
    StakeholderImpact {
        perception_shift: if narratives > 0 {
            "Media are looking for fresh angles on emerging narratives".to_string()
        } else {
            "Media are following established narratives".to_string()
        },
        concern_level: ConcernLevel::Medium,
        likely_questions: strings(&[
            "What is your position on the trend everyone is covering?",
            "How do you compare to your competitors?",
        ]),
        messaging_needs: strings(&["Quotable executive perspective", "Data-backed point of view"]),
        proof_points_required: strings(&["Original research or data", "Named customer stories"]),
    }
}

fn employees(competitor_mentions: usize) -> StakeholderImpact {
    let high = competitor_mentions > 3;
    StakeholderImpact {
        perception_shift: if high {
            "Employees are hearing about competitor momentum and may feel uncertain".to_string()
        } else {
            "Employee sentiment is stable".to_string()
        },
        concern_level: if high {
            ConcernLevel::High
        } else {
            ConcernLevel::Low
        },
        likely_questions: strings(&[
            "Are we keeping up with competitors?",
            "Is my role secure?",
        ]),
        messaging_needs: strings(&["Internal briefing on strategy", "Recognition of team wins"]),
        proof_points_required: strings(&["Leadership visibility", "Investment in the team"]),
    }
}

fn partners() -> StakeholderImpact {
    StakeholderImpact {
        perception_shift: "Partners are monitoring for changes to joint plans".to_string(),
        concern_level: ConcernLevel::Low,
        likely_questions: strings(&["Does this change our joint roadmap?"]),
        messaging_needs: strings(&["Confirm commitment to the partnership"]),
        proof_points_required: strings(&["Joint success metrics"]),
    }
}

fn regulators() -> StakeholderImpact {
    StakeholderImpact {
        perception_shift: "No material change in regulatory posture".to_string(),
        concern_level: ConcernLevel::Low,
        likely_questions: strings(&["Are you meeting current compliance obligations?"]),
        messaging_needs: strings(&["Demonstrate proactive compliance"]),
        proof_points_required: strings(&["Audit and certification records"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Magnitude, Velocity};

    fn analysis(magnitude: Magnitude, so_what: &str) -> SignalAnalysis {
        SignalAnalysis {
            signal: "t".to_string(),
            what_happened: "t".to_string(),
            so_what: so_what.to_string(),
            now_what: String::new(),
            magnitude,
            velocity: Velocity::Moderate,
            credibility: 50,
            relevance: 0,
        }
    }

    fn pattern(pattern_type: PatternType) -> Pattern {
        Pattern {
            pattern_type,
            signals_connected: vec![],
            insight: String::new(),
            confidence: 80,
            implications: vec![],
        }
    }

    #[test]
    fn empty_batch_is_calm() {
        let matrix = assess_stakeholders(&[], &[]);
        assert_eq!(matrix.customers.concern_level, ConcernLevel::Low);
        assert_eq!(matrix.investors.concern_level, ConcernLevel::Medium);
        assert_eq!(matrix.media.concern_level, ConcernLevel::Medium);
        assert!(matrix.media.perception_shift.contains("established narratives"));
        assert_eq!(matrix.employees.concern_level, ConcernLevel::Low);
        assert_eq!(matrix.partners.concern_level, ConcernLevel::Low);
        assert_eq!(matrix.regulators.concern_level, ConcernLevel::Low);
    }

    #[test]
    fn customer_concern_thresholds() {
        let severe = |n| vec![analysis(Magnitude::High, ""); n];
        assert_eq!(
            assess_stakeholders(&severe(1), &[]).customers.concern_level,
            ConcernLevel::Low
        );
        assert_eq!(
            assess_stakeholders(&severe(2), &[]).customers.concern_level,
            ConcernLevel::Medium
        );
        let three = assess_stakeholders(&severe(3), &[]).customers;
        assert_eq!(three.concern_level, ConcernLevel::Medium);
        assert!(three.perception_shift.contains("questioning"));
        assert_eq!(
            assess_stakeholders(&severe(4), &[]).customers.concern_level,
            ConcernLevel::High
        );
    }

    #[test]
    fn critical_counts_toward_customer_concern() {
        let analyses = vec![analysis(Magnitude::Critical, ""); 4];
        assert_eq!(
            assess_stakeholders(&analyses, &[]).customers.concern_level,
            ConcernLevel::High
        );
    }

    #[test]
    fn investors_escalate_on_repeated_acceleration() {
        let one = vec![pattern(PatternType::CompetitiveAcceleration)];
        let two = vec![one[0].clone(), one[0].clone()];
        assert_eq!(
            assess_stakeholders(&[], &one).investors.concern_level,
            ConcernLevel::Medium
        );
        assert_eq!(
            assess_stakeholders(&[], &two).investors.concern_level,
            ConcernLevel::High
        );
    }

    #[test]
    fn media_look_for_fresh_angles_on_narrative_shift() {
        let matrix = assess_stakeholders(&[], &[pattern(PatternType::NarrativeShift)]);
        assert!(matrix.media.perception_shift.contains("fresh angles"));
        assert_eq!(matrix.media.concern_level, ConcernLevel::Medium);
    }

    #[test]
    fn employees_react_to_competitor_volume() {
        let mention = analysis(Magnitude::Low, "Competitor move by Globex");
        let three = vec![mention.clone(); 3];
        let four = vec![mention; 4];
        assert_eq!(
            assess_stakeholders(&three, &[]).employees.concern_level,
            ConcernLevel::Low
        );
        assert_eq!(
            assess_stakeholders(&four, &[]).employees.concern_level,
            ConcernLevel::High
        );
    }
}
