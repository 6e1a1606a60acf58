//! Relationship health: progress, risk flags and graduation readiness.

use chrono::{DateTime, Utc};
use mentorship_model::{Person, ProgramRules, RelationshipStatus, SessionRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// Health of one mentor/mentee relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceInsight {
    /// Mentee's relationship status, unchanged
    pub status: RelationshipStatus,
    /// Completed sessions against the program requirement (0-100)
    pub progress_percent: f64,
    /// Risk conditions, human readable
    pub health_flags: Vec<String>,
    /// Whether both session and duration requirements are met
    pub can_graduate: bool,
}

/// Evaluate a relationship as of `now`.
///
/// Only sessions between exactly this mentor and mentee count. A pair with
/// no sessions is never flagged inactive. The status is passed through; this
/// classifies health and never transitions state.
pub fn evaluate_mentorship(
    mentee: &Person,
    mentor: &Person,
    sessions: &[SessionRecord],
    rules: &ProgramRules,
    now: DateTime<Utc>,
) -> GovernanceInsight {
    let pair: Vec<&SessionRecord> = sessions
        .iter()
        .filter(|s| s.is_between(&mentor.id, &mentee.id))
        .collect();
    let completed = pair.iter().filter(|s| s.is_completed()).count();

    let mut health_flags = Vec::new();

    if let Some(last) = pair.iter().map(|s| s.scheduled_at).max() {
        let days = days_between(last, now);
        if days > f64::from(rules.inactivity_threshold_days) {
            health_flags.push(format!("Inactivity: No session in {} days", days.floor() as i64));
        }
    }

    if mentee.cancellation_count >= rules.max_cancellations_allowed {
        health_flags.push(format!(
            "High Cancellations: Mentee has {} cancellations",
            mentee.cancellation_count
        ));
    }

    let progress_percent = progress(completed, rules.min_sessions_for_completion);

    let months_elapsed = mentee
        .relationship_start
        .map(|start| days_between(start, now) / DAYS_PER_MONTH)
        .unwrap_or(0.0);
    let can_graduate = completed >= rules.min_sessions_for_completion
        && months_elapsed >= f64::from(rules.min_duration_months);

    debug!(
        mentee_id = %mentee.id,
        mentor_id = %mentor.id,
        completed,
        progress = progress_percent,
        flags = health_flags.len(),
        can_graduate,
        "Mentorship evaluated"
    );

    GovernanceInsight {
        status: mentee.status,
        progress_percent,
        health_flags,
        can_graduate,
    }
}

/// Share of required sessions completed, clamped to 0-100.
fn progress(completed: usize, required: usize) -> f64 {
    if required == 0 {
        return 100.0;
    }
    ((completed as f64 / required as f64) * 100.0).clamp(0.0, 100.0)
}

/// Fractional days from `from` to `to`.
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / SECONDS_PER_DAY
}
