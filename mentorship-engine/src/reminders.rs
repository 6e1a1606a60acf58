//! Upcoming-session reminders.
//!
//! Only decides who should be reminded; delivery belongs to the caller.

use chrono::{DateTime, Utc};
use mentorship_model::{SessionRecord, SessionStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Title used on every session reminder.
pub const REMINDER_TITLE: &str = "Upcoming Session Reminder";

/// A reminder for one participant of an upcoming session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub person_id: String,
    pub session_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub title: String,
    pub message: String,
}

/// Reminders for scheduled sessions starting within `window_hours` of `now`.
///
/// Sessions already started, or not in `Scheduled` status, are skipped. Each
/// due session yields one reminder for the mentor and one for the mentee.
pub fn due_reminders(sessions: &[SessionRecord], now: DateTime<Utc>, window_hours: u32) -> Vec<Reminder> {
    let window = f64::from(window_hours);

    sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Scheduled)
        .filter_map(|session| {
            let hours = (session.scheduled_at - now).num_seconds() as f64 / 3600.0;
            (hours > 0.0 && hours <= window).then_some((session, hours))
        })
        .flat_map(|(session, hours)| {
            debug!(session_id = %session.id, hours, "Session reminder due");
            let message = format!("Session in {}h", hours.round() as i64);
            [&session.mentor_id, &session.mentee_id].map(|person_id| Reminder {
                person_id: person_id.clone(),
                session_id: session.id.clone(),
                scheduled_at: session.scheduled_at,
                title: REMINDER_TITLE.to_string(),
                message: message.clone(),
            })
        })
        .collect()
}
