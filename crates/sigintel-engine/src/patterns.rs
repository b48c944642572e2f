//! Cross-signal pattern recognition.
//!
//! Three detectors run over the whole batch and their output is concatenated
//! in a fixed order: competitive acceleration, narrative shift, cascade risk.
//! Nothing is merged or suppressed.

use std::sync::LazyLock;

use regex::Regex;
use sigintel_core::Signal;

use crate::types::{Pattern, PatternType, SignalAnalysis, Velocity};

/// Trend keywords watched for narrative shifts, in reporting order.
pub(crate) const TREND_KEYWORDS: &[&str] = &[
    "AI",
    "sustainability",
    "privacy",
    "security",
    "innovation",
    "transformation",
    "disruption",
    "recession",
    "growth",
    "layoffs",
];

const MIN_COMPETITOR_SIGNALS: usize = 3;
const MIN_NARRATIVE_MENTIONS: usize = 3;
const ACCELERATION_CONFIDENCE: u8 = 85;
const NARRATIVE_BASE_CONFIDENCE: usize = 70;
const NARRATIVE_CONFIDENCE_STEP: usize = 5;
const CASCADE_VIRAL_CONFIDENCE: u8 = 90;
const CASCADE_CONFIDENCE: u8 = 70;
const NARRATIVE_SUFFIX: &str = " emerging as dominant narrative";

static TREND_MATCHERS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| word_matchers(TREND_KEYWORDS));

/// Case-insensitive whole-word matchers, one per keyword, in input order.
pub(crate) fn word_matchers(keywords: &[&'static str]) -> Vec<(&'static str, Regex)> {
    keywords
        .iter()
        .map(|&keyword| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
                .expect("escaped keyword is a valid regex");
            (keyword, re)
        })
        .collect()
}

/// Run every detector over the batch.
#[must_use]
pub fn recognize_patterns(signals: &[Signal], analyses: &[SignalAnalysis]) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    patterns.extend(competitive_acceleration(signals));
    patterns.extend(narrative_shifts(signals));
    patterns.extend(cascade_risks(analyses));

    tracing::debug!(
        signals = signals.len(),
        patterns = patterns.len(),
        "pattern recognition complete"
    );
    patterns
}

fn competitive_acceleration(signals: &[Signal]) -> Option<Pattern> {
    let competitor_titles: Vec<String> = signals
        .iter()
        .filter(|s| s.is_competitor())
        .map(|s| s.title.clone())
        .collect();

    if competitor_titles.len() < MIN_COMPETITOR_SIGNALS {
        return None;
    }

    Some(Pattern {
        pattern_type: PatternType::CompetitiveAcceleration,
        insight: format!(
            "{} competitor moves detected in one window: rivals are accelerating",
            competitor_titles.len()
        ),
        signals_connected: competitor_titles,
        confidence: ACCELERATION_CONFIDENCE,
        implications: vec![
            "Market is entering a period of intensified competition".to_string(),
            "Window to differentiate is narrowing".to_string(),
            "Expect pressure on pricing and talent".to_string(),
        ],
    })
}

/// Count, per trend keyword, the signals whose text mentions it as a whole
/// word. Keywords with no mentions are omitted.
pub(crate) fn trend_mentions(signals: &[Signal]) -> Vec<(&'static str, Vec<&Signal>)> {
    let texts: Vec<String> = signals.iter().map(Signal::text).collect();
    TREND_MATCHERS
        .iter()
        .filter_map(|(keyword, re)| {
            let mentioning: Vec<&Signal> = signals
                .iter()
                .zip(&texts)
                .filter(|(_, text)| re.is_match(text))
                .map(|(signal, _)| signal)
                .collect();
            (!mentioning.is_empty()).then_some((*keyword, mentioning))
        })
        .collect()
}

fn narrative_shifts(signals: &[Signal]) -> Vec<Pattern> {
    trend_mentions(signals)
        .into_iter()
        .filter(|(_, mentioning)| mentioning.len() >= MIN_NARRATIVE_MENTIONS)
        .map(|(keyword, mentioning)| {
            let count = mentioning.len();
            Pattern {
                pattern_type: PatternType::NarrativeShift,
                signals_connected: mentioning.iter().map(|s| s.title.clone()).collect(),
                insight: narrative_insight(keyword),
                confidence: narrative_confidence(count),
                implications: vec![
                    format!("Conversation is consolidating around {keyword}"),
                    format!("Our position on {keyword} will be scrutinized"),
                ],
            }
        })
        .collect()
}

fn narrative_insight(keyword: &str) -> String {
    format!("{keyword}{NARRATIVE_SUFFIX}")
}

/// `70 + 5 * count`, capped at 100.
pub(crate) fn narrative_confidence(count: usize) -> u8 {
    let raw = NARRATIVE_BASE_CONFIDENCE
        .saturating_add(count.saturating_mul(NARRATIVE_CONFIDENCE_STEP));
    u8::try_from(raw.min(100)).unwrap_or(100)
}

fn cascade_risks(analyses: &[SignalAnalysis]) -> Vec<Pattern> {
    analyses
        .iter()
        .filter(|a| a.magnitude.is_severe())
        .map(|a| Pattern {
            pattern_type: PatternType::CascadeRisk,
            signals_connected: vec![a.signal.clone()],
            insight: format!(
                "\"{}\" is likely to trigger a media cascade within 24-48 hours",
                a.what_happened
            ),
            confidence: if a.velocity == Velocity::Viral {
                CASCADE_VIRAL_CONFIDENCE
            } else {
                CASCADE_CONFIDENCE
            },
            implications: vec![
                "Follow-on coverage will amplify the original story".to_string(),
                "Competitors may use the moment to position against us".to_string(),
            ],
        })
        .collect()
}

/// Keyword named by a narrative-shift insight.
pub(crate) fn narrative_keyword(pattern: &Pattern) -> Option<&str> {
    pattern.insight.strip_suffix(NARRATIVE_SUFFIX)
}
