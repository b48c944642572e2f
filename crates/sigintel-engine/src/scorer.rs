//! Leaf scorers and classifiers: credibility, relevance, magnitude, velocity.
//!
//! Lookup tables are ordered slices scanned front to back; the first hit wins.

use chrono::{DateTime, Utc};
use sigintel_core::{Organization, Signal};

use crate::types::{Magnitude, Velocity};

/// Source-name fragments and their trust scores.
///
/// Keys are lowercase and matched as substrings of the lowercased source.
pub(crate) const SOURCE_CREDIBILITY: &[(&str, u8)] = &[
    ("reuters", 95),
    ("bloomberg", 95),
    ("wsj", 90),
    ("wall street journal", 90),
    ("financial times", 90),
    ("ft.com", 90),
    ("techcrunch", 80),
    ("forbes", 75),
    ("businessinsider", 70),
    ("business insider", 70),
    ("reddit", 40),
    ("twitter", 30),
    ("x.com", 30),
];

/// Score for a source that matches nothing in [`SOURCE_CREDIBILITY`].
pub const DEFAULT_CREDIBILITY: u8 = 50;

/// Magnitude keyword sets in priority order.
pub(crate) const MAGNITUDE_KEYWORDS: &[(Magnitude, &[&str])] = &[
    (
        Magnitude::Critical,
        &[
            "crisis",
            "scandal",
            "lawsuit",
            "bankruptcy",
            "acquisition",
            "merger",
        ],
    ),
    (
        Magnitude::High,
        &["major", "significant", "breakthrough", "disruption", "launch"],
    ),
    (
        Magnitude::Medium,
        &["update", "announces", "reveals", "partnership"],
    ),
];

const ORG_IN_TITLE: u32 = 40;
const ORG_IN_CONTENT: u32 = 20;
const COMPETITOR_ENTITY: u32 = 30;
const INDUSTRY_IN_TITLE: u32 = 20;
const PER_KEYWORD: u32 = 10;

/// Map a source name to a trust score in `[0, 100]`.
#[must_use]
pub fn credibility_score(source: &str) -> u8 {
    let source = source.to_lowercase();
    SOURCE_CREDIBILITY
        .iter()
        .find(|(key, _)| source.contains(key))
        .map_or(DEFAULT_CREDIBILITY, |&(_, score)| score)
}

/// Score how pertinent a signal is to `org`, clamped to `[0, 100]`.
///
/// Additive: organization name in title or content, competitor entity,
/// industry in title, and each profile keyword found anywhere in the text.
#[must_use]
pub fn relevance_score(signal: &Signal, org: &Organization) -> u8 {
    let title = signal.title.to_lowercase();
    let content = signal
        .content
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let name = org.name.trim().to_lowercase();

    let mut score = 0_u32;

    if !name.is_empty() {
        if title.contains(&name) {
            score += ORG_IN_TITLE;
        }
        if content.contains(&name) {
            score += ORG_IN_CONTENT;
        }
    }

    if signal.is_competitor() {
        score += COMPETITOR_ENTITY;
    }

    if let Some(industry) = org.industry.as_deref().map(str::trim) {
        if !industry.is_empty() && title.contains(&industry.to_lowercase()) {
            score += INDUSTRY_IN_TITLE;
        }
    }

    for keyword in &org.keywords {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            continue;
        }
        if title.contains(&keyword) || content.contains(&keyword) {
            score += PER_KEYWORD;
        }
    }

    u8::try_from(score.min(100)).unwrap_or(100)
}

/// Classify event severity from free text.
///
/// Critical keywords are checked before high before medium, regardless of where
/// they appear in the text. No hit means [`Magnitude::Low`].
#[must_use]
pub fn classify_magnitude(text: &str) -> Magnitude {
    let text = text.to_lowercase();
    MAGNITUDE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map_or(Magnitude::Low, |&(magnitude, _)| magnitude)
}

/// Classify spread speed from the signal's age at `now`.
///
/// Under one hour is viral, under six fast, under twenty-four moderate,
/// anything older slow. No timestamp means [`Velocity::Moderate`].
#[must_use]
pub fn classify_velocity(published: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Velocity {
    let Some(published) = published else {
        return Velocity::Moderate;
    };

    let age_minutes = (now - published).num_minutes();
    if age_minutes < 60 {
        Velocity::Viral
    } else if age_minutes < 6 * 60 {
        Velocity::Fast
    } else if age_minutes < 24 * 60 {
        Velocity::Moderate
    } else {
        Velocity::Slow
    }
}
