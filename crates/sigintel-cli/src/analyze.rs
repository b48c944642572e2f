//! `analyze` command: load inputs, run the engine, print the report.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sigintel_core::{AppConfig, Organization, Signal};

use crate::report::render_markdown;
use crate::OutputFormat;

/// Accepted shapes for the signals file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignalBatch {
    List(Vec<Signal>),
    Wrapped { signals: Vec<Signal> },
}

/// Load and validate the organization profile at `path`.
///
/// # Errors
///
/// Returns an error if the profile cannot be read, parsed, or validated.
pub(crate) fn load_org(path: &Path) -> anyhow::Result<Organization> {
    let file = sigintel_core::load_organization(path)
        .with_context(|| format!("loading organization profile {}", path.display()))?;
    Ok(file.organization)
}

/// Read a signal batch from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON in one of
/// the accepted shapes, or holds more than `max_signals` entries.
pub(crate) fn load_signals(path: &Path, max_signals: usize) -> anyhow::Result<Vec<Signal>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading signals file {}", path.display()))?;
    let batch: SignalBatch = serde_json::from_str(&content)
        .with_context(|| format!("parsing signals file {}", path.display()))?;

    let signals = match batch {
        SignalBatch::List(signals) | SignalBatch::Wrapped { signals } => signals,
    };

    if signals.len() > max_signals {
        anyhow::bail!(
            "signals file {} holds {} signals; the limit is {max_signals} (SIGINTEL_MAX_SIGNALS)",
            path.display(),
            signals.len()
        );
    }

    Ok(signals)
}

/// Parse the `--now` override, falling back to the current time.
///
/// # Errors
///
/// Returns an error if `raw` is present but not RFC 3339.
pub(crate) fn reference_time(raw: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("invalid --now value '{raw}'; expected RFC 3339")),
        None => Ok(Utc::now()),
    }
}

/// Run the engine over a signals file and print the result to stdout.
///
/// # Errors
///
/// Returns an error if any input cannot be loaded or the engine rejects the
/// organization.
pub(crate) fn run_analyze(
    config: &AppConfig,
    signals_path: &Path,
    org_path: Option<&Path>,
    now: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let org = load_org(org_path.unwrap_or(config.org_path.as_path()))?;
    let signals = load_signals(signals_path, config.max_signals)?;
    let now = reference_time(now)?;

    tracing::debug!(
        organization = %org.name,
        signals = signals.len(),
        reference_time = %now.to_rfc3339(),
        "running analysis"
    );

    let result = sigintel_engine::analyze(&org, &signals, now)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Markdown => print!("{}", render_markdown(&org, &result, now)),
    }

    Ok(())
}
