//! Per-signal assessment: scores plus what happened, so what, now what.

use chrono::{DateTime, Utc};
use sigintel_core::{Organization, Signal};

use crate::scorer::{classify_magnitude, classify_velocity, credibility_score, relevance_score};
use crate::types::{Magnitude, SignalAnalysis, Velocity};

pub(crate) const UNTITLED_SIGNAL: &str = "Signal detected";

const REGULATORY_TYPE: &str = "regulatory";

/// Assess every signal in order; the output has one entry per input.
#[must_use]
pub fn analyze_signals(
    signals: &[Signal],
    org: &Organization,
    now: DateTime<Utc>,
) -> Vec<SignalAnalysis> {
    signals
        .iter()
        .map(|signal| analyze_signal(signal, org, now))
        .collect()
}

/// Assess a single signal.
#[must_use]
pub fn analyze_signal(signal: &Signal, org: &Organization, now: DateTime<Utc>) -> SignalAnalysis {
    let magnitude = classify_magnitude(&signal.text());
    let velocity = classify_velocity(signal.published_at(), now);

    SignalAnalysis {
        signal: signal.title.clone(),
        what_happened: what_happened(signal),
        so_what: so_what(signal),
        now_what: now_what(magnitude, velocity).to_string(),
        magnitude,
        velocity,
        credibility: credibility_score(&signal.source),
        relevance: relevance_score(signal, org),
    }
}

/// Returns `true` if the analysis concerns a competitor, judged from its title
/// or its `so_what` line.
pub(crate) fn references_competitor(analysis: &SignalAnalysis) -> bool {
    analysis.signal.to_lowercase().contains("competitor")
        || analysis.so_what.to_lowercase().contains("competitor")
}

fn what_happened(signal: &Signal) -> String {
    let title = signal.title.trim();
    if title.is_empty() {
        UNTITLED_SIGNAL.to_string()
    } else {
        title.to_string()
    }
}

fn so_what(signal: &Signal) -> String {
    if signal.is_competitor() {
        let actor = signal
            .entity
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or("an unnamed rival");
        return format!(
            "Competitor move by {actor} signals a competitive shift that could erode our market position"
        );
    }

    if signal.signal_type.trim().eq_ignore_ascii_case(REGULATORY_TYPE) {
        return "Regulatory development may require a compliance review and policy adjustments"
            .to_string();
    }

    "Market signal that may shift stakeholder perception and industry positioning".to_string()
}

fn now_what(magnitude: Magnitude, velocity: Velocity) -> &'static str {
    match (magnitude, velocity) {
        (Magnitude::Critical, Velocity::Viral) => {
            "Activate war room: convene the crisis team and issue a holding statement now"
        }
        (Magnitude::High, Velocity::Fast | Velocity::Viral) => {
            "Prepare statement within 2 hours and brief spokespeople"
        }
        (Magnitude::High, _) => "Respond within 24 hours with a considered position",
        (Magnitude::Medium, _) => "Monitor closely and prepare contingency messaging",
        _ => "Track for pattern development",
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap()
    }

    fn org() -> Organization {
        Organization::new("Acme")
    }

    #[test]
    fn analysis_preserves_order_and_count() {
        let signals = vec![
            Signal::new("news", "First", "Reuters"),
            Signal::new("news", "Second", "reddit"),
            Signal::new("news", "Third", "blog"),
        ];
        let analyses = analyze_signals(&signals, &org(), now());
        let titles: Vec<&str> = analyses.iter().map(|a| a.signal.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
        assert_eq!(analyses[0].credibility, 95);
        assert_eq!(analyses[1].credibility, 40);
        assert_eq!(analyses[2].credibility, 50);
    }

    #[test]
    fn partial_signal_gets_defaults() {
        let analysis = analyze_signal(&Signal::default(), &org(), now());
        assert_eq!(analysis.what_happened, UNTITLED_SIGNAL);
        assert_eq!(analysis.magnitude, Magnitude::Low);
        assert_eq!(analysis.velocity, Velocity::Moderate);
        assert_eq!(analysis.credibility, 50);
        assert_eq!(analysis.relevance, 0);
        assert_eq!(analysis.now_what, "Track for pattern development");
    }

    #[test]
    fn competitor_so_what_names_entity() {
        let signal = Signal::new("news", "Globex cuts prices", "wire").competitor("Globex");
        let analysis = analyze_signal(&signal, &org(), now());
        assert!(analysis.so_what.contains("Globex"));
        assert!(references_competitor(&analysis));
    }

    #[test]
    fn regulatory_so_what_mentions_compliance() {
        let signal = Signal::new("Regulatory", "New disclosure rules", "wire");
        let analysis = analyze_signal(&signal, &org(), now());
        assert!(analysis.so_what.contains("compliance"));
        assert!(!references_competitor(&analysis));
    }

    #[test]
    fn competitor_entity_wins_over_regulatory_type() {
        let signal = Signal::new("regulatory", "Globex files comment", "wire").competitor("Globex");
        let analysis = analyze_signal(&signal, &org(), now());
        assert!(analysis.so_what.starts_with("Competitor move"));
    }

    #[test]
    fn critical_viral_activates_war_room() {
        let signal = Signal::new("news", "Acme data breach scandal", "Reuters")
            .published_at_time(now() - Duration::minutes(5));
        let analysis = analyze_signal(&signal, &org(), now());
        assert_eq!(analysis.magnitude, Magnitude::Critical);
        assert_eq!(analysis.velocity, Velocity::Viral);
        assert!(analysis.now_what.starts_with("Activate war room"));
    }

    #[test]
    fn now_what_tiers() {
        assert!(now_what(Magnitude::High, Velocity::Fast).contains("2 hours"));
        assert!(now_what(Magnitude::High, Velocity::Viral).contains("2 hours"));
        assert!(now_what(Magnitude::High, Velocity::Slow).contains("24 hours"));
        assert!(now_what(Magnitude::Medium, Velocity::Viral).contains("contingency"));
        assert_eq!(
            now_what(Magnitude::Critical, Velocity::Slow),
            "Track for pattern development"
        );
        assert_eq!(
            now_what(Magnitude::Low, Velocity::Viral),
            "Track for pattern development"
        );
    }
}
