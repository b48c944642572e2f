//! Phased response plans for the 24-hour, 7-day, 30-day and 90-day horizons.

use crate::types::{ActionPlan, Priority, ResponseStrategy, StrategicImplications};

/// Build the four horizon plans.
///
/// Priority comes from the reputation's required intervention. The 7-day plan
/// steps down one level when the base priority is critical; the others carry
/// the base priority unchanged.
#[must_use]
pub fn plan_response(implications: &StrategicImplications) -> ResponseStrategy {
    let base = Priority::from(implications.reputation.intervention_required);
    let short_term = if base == Priority::Critical {
        base.downgrade()
    } else {
        base
    };

    ResponseStrategy {
        immediate_24h: immediate(base),
        short_term_7d: short_term_plan(short_term),
        medium_term_30d: medium_term(base),
        long_term_90d: long_term(base),
    }
}

fn plan(
    priority: Priority,
    actions: &[&str],
    messaging: &[&str],
    channels: &[&str],
    success_metrics: &[&str],
) -> ActionPlan {
    ActionPlan {
        priority,
        actions: owned(actions),
        messaging: owned(messaging),
        channels: owned(channels),
        success_metrics: owned(success_metrics),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn immediate(priority: Priority) -> ActionPlan {
    plan(
        priority,
        &[
            "Convene the response team and assign an owner",
            "Verify facts and assess exposure",
            "Prepare a holding statement",
        ],
        &[
            "Acknowledge the situation and commit to updates",
            "Lead with customer impact",
        ],
        &["Owned social channels", "Press office", "Internal email"],
        &[
            "Statement issued within target window",
            "No unanswered media inquiries",
        ],
    )
}

fn short_term_plan(priority: Priority) -> ActionPlan {
    plan(
        priority,
        &[
            "Brief key customers and partners directly",
            "Publish a detailed position",
            "Equip spokespeople with a Q&A document",
        ],
        &[
            "Explain what happened and what is being done",
            "Reinforce core strengths",
        ],
        &["Direct outreach", "Company blog", "Media interviews"],
        &[
            "Sentiment trend returns to baseline",
            "Key accounts retained",
        ],
    )
}

fn medium_term(priority: Priority) -> ActionPlan {
    plan(
        priority,
        &[
            "Launch a proactive thought-leadership campaign",
            "Close operational gaps exposed by the signals",
            "Track competitor responses",
        ],
        &["Forward-looking vision", "Evidence of progress"],
        &["Industry events", "Trade press", "Analyst briefings"],
        &[
            "Share of voice on priority topics",
            "Positive coverage ratio",
        ],
    )
}

fn long_term(priority: Priority) -> ActionPlan {
    plan(
        priority,
        &[
            "Embed signal monitoring into planning cycles",
            "Build narrative ownership on emerging themes",
            "Strengthen stakeholder advocacy programs",
        ],
        &["Category leadership", "Long-term commitments to stakeholders"],
        &["Annual report", "Executive keynotes", "Partner ecosystem"],
        &[
            "Reputation index improvement",
            "Reduced time to respond to new signals",
        ],
    )
}
