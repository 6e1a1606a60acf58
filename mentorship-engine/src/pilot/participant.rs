//! Scoring of a single pilot participant.

use mentorship_model::{FeedbackRecord, GoalRecord, Person, PilotCohort, PilotOutcome, SessionRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Points available for completed sessions.
pub const SESSION_WEIGHT: f64 = 40.0;
/// Points available for achieved goals.
pub const GOAL_WEIGHT: f64 = 30.0;
/// Points available for received feedback.
pub const FEEDBACK_WEIGHT: f64 = 30.0;

const SUCCESS_THRESHOLD: f64 = 80.0;
const IMPROVEMENT_THRESHOLD: f64 = 50.0;
const MAX_RATING: f64 = 5.0;

/// How one participant did in a pilot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantOutcome {
    pub outcome: PilotOutcome,
    /// Rounded total, 0-100
    pub score: u32,
    /// One line per scoring component
    pub details: Vec<String>,
}

/// Score a participant against the pilot's session, goal and feedback data.
///
/// Sessions count when completed and attended on either side. Goals count
/// for mentees only; mentors get the goal points in full. Feedback is the
/// mean rating received, 0 without feedback. The outcome is classified on the
/// unrounded total.
pub fn evaluate_participant(
    person: &Person,
    pilot: &PilotCohort,
    sessions: &[SessionRecord],
    goals: &[GoalRecord],
    feedbacks: &[FeedbackRecord],
) -> ParticipantOutcome {
    let mut details = Vec::new();
    let mut total = 0.0;

    // Sessions
    let completed = sessions
        .iter()
        .filter(|s| s.involves(&person.id) && s.is_completed())
        .count();
    let required = pilot.min_sessions_required as usize;
    let session_ratio = if required == 0 {
        1.0
    } else {
        (completed as f64 / required as f64).min(1.0)
    };
    total += session_ratio * SESSION_WEIGHT;
    details.push(format!("{}/{} sessions completed", completed, required));

    // Goals
    if person.is_mentee() {
        let owned: Vec<&GoalRecord> = goals.iter().filter(|g| g.mentee_id == person.id).collect();
        let achieved = owned.iter().filter(|g| g.is_completed()).count();
        let goal_ratio = if owned.is_empty() {
            0.0
        } else {
            achieved as f64 / owned.len() as f64
        };
        total += goal_ratio * GOAL_WEIGHT;
        details.push(format!("{}/{} goals achieved", achieved, owned.len()));
    } else {
        total += GOAL_WEIGHT;
    }

    // Feedback
    let ratings: Vec<f64> = feedbacks
        .iter()
        .filter(|f| f.to_id == person.id)
        .map(|f| f64::from(f.rating.value()))
        .collect();
    let avg_rating = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    };
    total += (avg_rating / MAX_RATING) * FEEDBACK_WEIGHT;
    details.push(format!("Avg Feedback Rating: {:.1}/5.0", avg_rating));

    let outcome = if total >= SUCCESS_THRESHOLD && completed >= required {
        PilotOutcome::Successful
    } else if total >= IMPROVEMENT_THRESHOLD {
        PilotOutcome::NeedsImprovement
    } else {
        PilotOutcome::Unsuccessful
    };

    debug!(
        person_id = %person.id,
        pilot_id = %pilot.id,
        score = total,
        outcome = outcome.as_str(),
        "Participant evaluated"
    );

    ParticipantOutcome {
        outcome,
        score: total.round() as u32,
        details,
    }
}
