//! Elite insights: synthesis-level observations that no single signal or
//! pattern states directly.
//!
//! Five independent rule sets, each a one-pass evaluation over the signals,
//! the detected patterns, and the strategic implications.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use regex::Regex;
use sigintel_core::Signal;

use crate::patterns::{narrative_keyword, word_matchers};
use crate::stakeholders::count_patterns;
use crate::types::{EliteInsights, Pattern, PatternType, RelativeStrength, StrategicImplications};

/// Topics a competitor could own but often leaves alone.
pub(crate) const WATCHED_TOPICS: &[&str] = &[
    "sustainability",
    "privacy",
    "accessibility",
    "community",
    "ethics",
];

pub(crate) const REGION_KEYWORDS: &[&str] = &[
    "asia",
    "europe",
    "africa",
    "latin america",
    "middle east",
    "china",
    "india",
    "emea",
    "apac",
];

const ALLIANCE_TRIGGERS: &[&str] = &["regulation", "disruption"];
const COORDINATION_THRESHOLD: usize = 2;
const MIN_ENTITY_TYPES: usize = 3;
const COALITION_THRESHOLD: usize = 3;
const CONTESTED_THRESHOLD: usize = 2;
const GENERAL_ENTITY_TYPE: &str = "organization";

static REGION_MATCHERS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| word_matchers(REGION_KEYWORDS));

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\b").expect("valid year regex"));

/// Derive all five insight lists.
///
/// An empty batch yields empty lists: every rule here needs at least one
/// observation to say anything non-obvious about.
#[must_use]
pub fn generate_insights(
    signals: &[Signal],
    patterns: &[Pattern],
    implications: &StrategicImplications,
    now: DateTime<Utc>,
) -> EliteInsights {
    if signals.is_empty() {
        return EliteInsights::default();
    }

    let competitors: Vec<&Signal> = signals.iter().filter(|s| s.is_competitor()).collect();
    let texts: Vec<String> = signals.iter().map(Signal::text_lower).collect();

    let insights = EliteInsights {
        hidden_connections: hidden_connections(signals, &competitors),
        non_obvious_risks: non_obvious_risks(patterns, implications, competitors.len()),
        asymmetric_opportunities: asymmetric_opportunities(
            signals,
            &texts,
            patterns,
            &competitors,
        ),
        narrative_leverage_points: leverage_points(patterns, implications),
        strategic_blindspots: blindspots(signals, &texts, now),
    };

    tracing::debug!(
        hidden_connections = insights.hidden_connections.len(),
        risks = insights.non_obvious_risks.len(),
        opportunities = insights.asymmetric_opportunities.len(),
        blindspots = insights.strategic_blindspots.len(),
        "elite insights generated"
    );

    insights
}

fn hidden_connections(signals: &[Signal], competitors: &[&Signal]) -> Vec<String> {
    let mut insights = Vec::new();

    let mut buckets: BTreeMap<(NaiveDate, u32), usize> = BTreeMap::new();
    for published in signals.iter().filter_map(Signal::published_at) {
        *buckets
            .entry((published.date_naive(), published.hour()))
            .or_default() += 1;
    }
    if let Some(((date, hour), count)) = buckets
        .iter()
        .find(|(_, count)| **count > COORDINATION_THRESHOLD)
    {
        insights.push(format!(
            "Coordinated moves: {count} signals surfaced within the same hour ({date} {hour:02}:00 UTC), suggesting orchestrated activity rather than coincidence"
        ));
    }

    let competitor_texts: Vec<String> = competitors.iter().map(|s| s.text_lower()).collect();
    let neglected: Vec<&str> = WATCHED_TOPICS
        .iter()
        .copied()
        .filter(|topic| !competitor_texts.iter().any(|t| t.contains(topic)))
        .collect();
    if !neglected.is_empty() {
        insights.push(format!(
            "Opportunity in neglected areas: competitors are silent on {}",
            neglected.join(", ")
        ));
    }

    insights
}

fn non_obvious_risks(
    patterns: &[Pattern],
    implications: &StrategicImplications,
    competitor_count: usize,
) -> Vec<String> {
    let mut risks = Vec::new();

    if count_patterns(patterns, PatternType::CompetitiveAcceleration) > 0 {
        risks.push(
            "Talent poaching: accelerating competitors tend to recruit from the incumbent's bench"
                .to_string(),
        );
    }

    let contested = implications.market_narrative.contested_ground.len();
    if contested > CONTESTED_THRESHOLD {
        risks.push(format!(
            "Narrative hijack: with {contested} contested themes in play, a rival can reframe our story before we tell it"
        ));
    }

    if competitor_count > COALITION_THRESHOLD {
        risks.push(format!(
            "Coalition forming: {competitor_count} competitor moves at once may signal rivals aligning through partnerships"
        ));
    }

    risks
}

fn asymmetric_opportunities(
    signals: &[Signal],
    texts: &[String],
    patterns: &[Pattern],
    competitors: &[&Signal],
) -> Vec<String> {
    let mut opportunities = Vec::new();

    let narratives: Vec<&str> = patterns
        .iter()
        .filter(|p| p.pattern_type == PatternType::NarrativeShift)
        .filter_map(narrative_keyword)
        .collect();
    if !narratives.is_empty() {
        opportunities.push(format!(
            "Contrarian positioning: take a differentiated stance while the market converges on {}",
            narratives.join(", ")
        ));
    }

    if competitors
        .iter()
        .any(|s| !s.title.to_lowercase().contains("announces"))
    {
        opportunities.push(
            "Speed arbitrage: competitor moves are not yet formally announced, so moving first captures the narrative"
                .to_string(),
        );
    }

    let entities: BTreeSet<String> = signals
        .iter()
        .zip(texts)
        .filter(|(_, text)| ALLIANCE_TRIGGERS.iter().any(|k| text.contains(k)))
        .filter_map(|(signal, _)| signal.entity.as_deref())
        .map(str::trim)
        .filter(|entity| !entity.is_empty())
        .map(str::to_lowercase)
        .collect();
    if entities.len() >= 2 {
        opportunities.push(
            "Unlikely alliance: several players face the same regulation or disruption pressure, opening room for a joint position"
                .to_string(),
        );
    }

    opportunities
}

fn leverage_points(patterns: &[Pattern], implications: &StrategicImplications) -> Vec<String> {
    let mut points: Vec<String> = implications
        .market_narrative
        .narrative_opportunities
        .iter()
        .map(|opportunity| format!("Narrative lever: {opportunity}"))
        .collect();

    points.extend(
        patterns
            .iter()
            .filter(|p| p.pattern_type == PatternType::CascadeRisk)
            .map(|p| {
                let subject = p.signals_connected.first().map_or("the story", String::as_str);
                format!("Get ahead of the cascade on \"{subject}\" with a pre-emptive briefing")
            }),
    );

    if implications.competitive_position.relative_strength == RelativeStrength::Leader {
        points.push("Use the leadership position to set the agenda for the category".to_string());
    }

    points
}

fn blindspots(signals: &[Signal], texts: &[String], now: DateTime<Utc>) -> Vec<String> {
    let mut blindspots = Vec::new();

    if !texts
        .iter()
        .any(|t| REGION_MATCHERS.iter().any(|(_, re)| re.is_match(t)))
    {
        blindspots.push(
            "Missing geography: no signal covers international markets, so regional shifts may go unnoticed"
                .to_string(),
        );
    }

    let entity_types: BTreeSet<String> = signals
        .iter()
        .map(|s| {
            s.entity_type
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(GENERAL_ENTITY_TYPE)
                .to_lowercase()
        })
        .collect();
    if entity_types.len() < MIN_ENTITY_TYPES {
        blindspots.push(format!(
            "Limited stakeholder coverage: signals span only {} entity type(s), leaving other voices unmonitored",
            entity_types.len()
        ));
    }

    if !texts.iter().any(|t| mentions_future(t, now.year())) {
        blindspots.push(
            "Present bias: no signal looks beyond the current year, so long-range shifts are absent"
                .to_string(),
        );
    }

    blindspots
}

fn mentions_future(text: &str, current_year: i32) -> bool {
    text.contains("future")
        || YEAR_RE
            .captures_iter(text)
            .filter_map(|c| c[1].parse::<i32>().ok())
            .any(|year| year > current_year)
}
