use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// `entity_type` value marking a signal about a competitor.
pub const COMPETITOR_ENTITY_TYPE: &str = "competitor";

/// A single raw external observation about the monitored organization or its
/// environment: a news item, a competitor move, a market narrative.
///
/// Every field except `type`, `title` and `source` is optional, and those three
/// default to empty strings, so a partially populated payload still
/// deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename = "type", default)]
    pub signal_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// Commonly `"competitor"`; absent means organization-general.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Publication time exactly as supplied. See [`Signal::published_at`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

impl Signal {
    #[must_use]
    pub fn new(
        signal_type: impl Into<String>,
        title: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            signal_type: signal_type.into(),
            title: title.into(),
            source: source.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Mark the signal as a competitor move attributed to `entity`.
    #[must_use]
    pub fn competitor(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self.entity_type = Some(COMPETITOR_ENTITY_TYPE.to_string());
        self
    }

    #[must_use]
    pub fn with_entity(
        mut self,
        entity: impl Into<String>,
        entity_type: impl Into<String>,
    ) -> Self {
        self.entity = Some(entity.into());
        self.entity_type = Some(entity_type.into());
        self
    }

    #[must_use]
    pub fn published_at_time(mut self, at: DateTime<Utc>) -> Self {
        self.published = Some(at.to_rfc3339());
        self
    }

    /// Returns `true` if the signal describes a competitor.
    #[must_use]
    pub fn is_competitor(&self) -> bool {
        self.entity_type
            .as_deref()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case(COMPETITOR_ENTITY_TYPE))
    }

    /// Title and content joined by a single space.
    #[must_use]
    pub fn text(&self) -> String {
        match self.content.as_deref() {
            Some(content) if !content.is_empty() => format!("{} {content}", self.title),
            _ => self.title.clone(),
        }
    }

    /// Lowercased [`Signal::text`], for case-insensitive keyword matching.
    #[must_use]
    pub fn text_lower(&self) -> String {
        self.text().to_lowercase()
    }

    /// Parse the `published` field leniently.
    ///
    /// Accepts RFC 3339, RFC 2822 (RSS `pubDate`), and naive
    /// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` values read as UTC.
    /// Anything else yields `None`, the same as a missing timestamp.
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.published.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn with_published(raw: &str) -> Signal {
        Signal {
            published: Some(raw.to_string()),
            ..Signal::default()
        }
    }

    #[test]
    fn deserializes_minimal_payload() {
        let signal: Signal = serde_json::from_value(serde_json::json!({
            "type": "news",
            "title": "Acme opens new office",
            "source": "Reuters"
        }))
        .unwrap();
        assert_eq!(signal.signal_type, "news");
        assert!(signal.content.is_none());
        assert!(signal.entity_type.is_none());
        assert!(!signal.is_competitor());
    }

    #[test]
    fn deserializes_empty_object() {
        let signal: Signal = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(signal, Signal::default());
    }

    #[test]
    fn serializes_type_field_name() {
        let value = serde_json::to_value(Signal::new("news", "t", "s")).unwrap();
        assert_eq!(value["type"], "news");
        assert!(value.get("content").is_none());
    }

    #[test]
    fn competitor_detection_ignores_case() {
        let signal = Signal::new("news", "t", "s").with_entity("Globex", "Competitor");
        assert!(signal.is_competitor());
    }

    #[test]
    fn text_joins_title_and_content() {
        let signal = Signal::new("news", "Title", "s").with_content("Body");
        assert_eq!(signal.text(), "Title Body");
        assert_eq!(Signal::new("news", "Title", "s").text(), "Title");
    }

    #[test]
    fn published_at_parses_rfc3339() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(
            with_published("2026-03-01T14:30:00+02:00").published_at(),
            Some(expected)
        );
    }

    #[test]
    fn published_at_parses_rfc2822() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(
            with_published("Sun, 01 Mar 2026 12:30:00 GMT").published_at(),
            Some(expected)
        );
    }

    #[test]
    fn published_at_parses_naive_as_utc() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(
            with_published("2026-03-01 12:30:00").published_at(),
            Some(expected)
        );
    }

    #[test]
    fn published_at_ignores_garbage() {
        assert!(with_published("last tuesday").published_at().is_none());
        assert!(with_published("   ").published_at().is_none());
        assert!(Signal::default().published_at().is_none());
    }
}
