//! Markdown rendering of an analysis result.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sigintel_core::Organization;
use sigintel_engine::{ActionPlan, AnalysisResult};

/// Render the full report as markdown.
pub(crate) fn render_markdown(
    org: &Organization,
    result: &AnalysisResult,
    now: DateTime<Utc>,
) -> String {
    let sections = [
        header(org, result, now),
        signals_section(result),
        patterns_section(result),
        stakeholders_section(result),
        implications_section(result),
        response_section(result),
        insights_section(result),
    ];
    let mut out = sections.join("\n");
    out.push('\n');
    out
}

/// Lowercase wire name of a serializable enum value.
fn label<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn bullets(lines: &mut Vec<String>, items: &[String]) {
    if items.is_empty() {
        lines.push("- _none_".to_string());
    } else {
        lines.extend(items.iter().map(|item| format!("- {item}")));
    }
}

fn header(org: &Organization, result: &AnalysisResult, now: DateTime<Utc>) -> String {
    let reputation = &result.strategic_implications.reputation;
    let lines = [
        format!("# Signal Intelligence Report: {}", org.name),
        String::new(),
        format!("**Reference time**: {}", now.format("%Y-%m-%d %H:%M UTC")),
        format!("**Signals**: {}", result.signal_analysis.len()),
        format!("**Patterns**: {}", result.pattern_recognition.len()),
        format!(
            "**Reputation**: {} ({}, intervention: {})",
            reputation.current_state,
            label(&reputation.trajectory),
            label(&reputation.intervention_required)
        ),
        String::new(),
        "---".to_string(),
    ];
    lines.join("\n")
}

fn signals_section(result: &AnalysisResult) -> String {
    let mut lines = vec!["## Signals".to_string(), String::new()];
    if result.signal_analysis.is_empty() {
        lines.push("_No signals in this batch._".to_string());
        return lines.join("\n");
    }

    lines.push("| Signal | Magnitude | Velocity | Credibility | Relevance | Now what |".to_string());
    lines.push("|--------|-----------|----------|-------------|-----------|----------|".to_string());
    for analysis in &result.signal_analysis {
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} |",
            analysis.what_happened.replace('|', "\\|"),
            label(&analysis.magnitude),
            label(&analysis.velocity),
            analysis.credibility,
            analysis.relevance,
            analysis.now_what
        ));
    }
    lines.join("\n")
}

fn patterns_section(result: &AnalysisResult) -> String {
    let mut lines = vec!["## Patterns".to_string(), String::new()];
    if result.pattern_recognition.is_empty() {
        lines.push("_No cross-signal patterns detected._".to_string());
    }
    for pattern in &result.pattern_recognition {
        lines.push(format!(
            "- **{}** ({}%): {}",
            label(&pattern.pattern_type),
            pattern.confidence,
            pattern.insight
        ));
    }
    lines.join("\n")
}

fn stakeholders_section(result: &AnalysisResult) -> String {
    let mut lines = vec![
        "## Stakeholders".to_string(),
        String::new(),
        "| Group | Concern | Perception |".to_string(),
        "|-------|---------|------------|".to_string(),
    ];
    for (group, impact) in result.stakeholder_impact.groups() {
        lines.push(format!(
            "| {group} | {} | {} |",
            label(&impact.concern_level),
            impact.perception_shift
        ));
    }
    lines.join("\n")
}

fn implications_section(result: &AnalysisResult) -> String {
    let implications = &result.strategic_implications;
    let position = &implications.competitive_position;
    let narrative = &implications.market_narrative;

    let mut lines = vec![
        "## Strategic Implications".to_string(),
        String::new(),
        format!(
            "**Competitive position**: {} (momentum: {})",
            label(&position.relative_strength),
            label(&position.momentum)
        ),
        String::new(),
        "### Key vulnerabilities".to_string(),
    ];
    bullets(&mut lines, &implications.reputation.key_vulnerabilities);
    lines.push("### Contested ground".to_string());
    bullets(&mut lines, &narrative.contested_ground);
    lines.push("### Narrative opportunities".to_string());
    bullets(&mut lines, &narrative.narrative_opportunities);
    lines.join("\n")
}

fn plan_lines(lines: &mut Vec<String>, title: &str, plan: &ActionPlan) {
    lines.push(format!("### {title} (priority: {})", label(&plan.priority)));
    bullets(lines, &plan.actions);
}

fn response_section(result: &AnalysisResult) -> String {
    let strategy = &result.response_strategy;
    let mut lines = vec!["## Response Strategy".to_string(), String::new()];
    plan_lines(&mut lines, "Next 24 hours", &strategy.immediate_24h);
    plan_lines(&mut lines, "Next 7 days", &strategy.short_term_7d);
    plan_lines(&mut lines, "Next 30 days", &strategy.medium_term_30d);
    plan_lines(&mut lines, "Next 90 days", &strategy.long_term_90d);
    lines.join("\n")
}

fn insights_section(result: &AnalysisResult) -> String {
    let insights = &result.elite_insights;
    let mut lines = vec!["## Elite Insights".to_string(), String::new()];
    for (title, items) in [
        ("Hidden connections", &insights.hidden_connections),
        ("Non-obvious risks", &insights.non_obvious_risks),
        ("Asymmetric opportunities", &insights.asymmetric_opportunities),
        ("Narrative leverage points", &insights.narrative_leverage_points),
        ("Strategic blind spots", &insights.strategic_blindspots),
    ] {
        lines.push(format!("### {title}"));
        bullets(&mut lines, items);
    }
    lines.join("\n")
}
