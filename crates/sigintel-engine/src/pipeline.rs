//! Analysis pipeline orchestration.

use chrono::{DateTime, Utc};
use sigintel_core::{Organization, Signal};

use crate::analyzer::analyze_signals;
use crate::error::EngineError;
use crate::implications::derive_implications;
use crate::insights::generate_insights;
use crate::patterns::recognize_patterns;
use crate::response::plan_response;
use crate::stakeholders::assess_stakeholders;
use crate::types::AnalysisResult;

/// Run the full analysis pipeline for one signal batch.
///
/// 1. Analyze each signal (credibility, relevance, magnitude, velocity).
/// 2. Recognize cross-signal patterns.
/// 3. Assess stakeholder impact from analyses and patterns.
/// 4. Derive strategic implications from analyses, patterns, stakeholders.
/// 5. Plan the phased response from the implications.
/// 6. Generate elite insights from signals, patterns, implications.
///
/// Steps 5 and 6 read only the implications and earlier outputs; neither
/// depends on the other. `now` is the reference time for velocity and for
/// the forward-looking checks, so identical inputs always give identical
/// output. An empty batch produces a well-formed result with empty lists.
///
/// # Errors
///
/// Returns [`EngineError::InvalidOrganization`] if the organization name is
/// blank. Signals themselves never cause an error.
pub fn analyze(
    org: &Organization,
    signals: &[Signal],
    now: DateTime<Utc>,
) -> Result<AnalysisResult, EngineError> {
    if !org.has_name() {
        return Err(EngineError::InvalidOrganization(
            "organization name must be non-empty".to_string(),
        ));
    }

    let signal_analysis = analyze_signals(signals, org, now);
    let pattern_recognition = recognize_patterns(signals, &signal_analysis);
    let stakeholder_impact = assess_stakeholders(&signal_analysis, &pattern_recognition);
    let strategic_implications =
        derive_implications(&signal_analysis, &pattern_recognition, &stakeholder_impact);

    let response_strategy = plan_response(&strategic_implications);
    let elite_insights = generate_insights(
        signals,
        &pattern_recognition,
        &strategic_implications,
        now,
    );

    tracing::info!(
        organization = %org.name,
        signals = signals.len(),
        patterns = pattern_recognition.len(),
        trajectory = ?strategic_implications.reputation.trajectory,
        intervention = ?strategic_implications.reputation.intervention_required,
        "signal analysis complete"
    );

    Ok(AnalysisResult {
        signal_analysis,
        pattern_recognition,
        stakeholder_impact,
        strategic_implications,
        response_strategy,
        elite_insights,
    })
}

/// [`analyze`] with the current wall-clock time as the reference time.
///
/// # Errors
///
/// Same as [`analyze`].
pub fn analyze_now(org: &Organization, signals: &[Signal]) -> Result<AnalysisResult, EngineError> {
    analyze(org, signals, Utc::now())
}
