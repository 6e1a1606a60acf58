//! Program-wide views: the pair list and aggregate analytics.

use chrono::{DateTime, Utc};
use mentorship_model::{ProgramRules, RelationshipStatus, Role};
use serde::{Deserialize, Serialize};

use super::snapshot::ProgramSnapshot;
use crate::config::EngineConfig;
use crate::governance::evaluate_mentorship;

/// Display name used when a mentee has no resolvable mentor.
pub const UNASSIGNED: &str = "Unassigned";

/// One row of the pair list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSummary {
    pub mentee_id: String,
    pub mentee_name: String,
    pub mentor_id: Option<String>,
    pub mentor_name: String,
    pub status: RelationshipStatus,
    pub progress_percent: f64,
    pub health_flags: Vec<String>,
    pub can_graduate: bool,
}

/// Build the pair list, one row per mentee in roster order.
///
/// A mentee whose mentor id does not resolve to a mentor is listed as
/// unassigned with no progress. That includes ids of people holding another
/// role, not only ids missing from the roster.
pub fn pair_summaries(
    snapshot: &ProgramSnapshot,
    rules: &ProgramRules,
    now: DateTime<Utc>,
) -> Vec<PairSummary> {
    snapshot
        .persons
        .iter()
        .filter(|p| p.is_mentee())
        .map(|mentee| {
            let mentor = mentee.assigned_mentor_id.as_deref().and_then(|id| {
                snapshot
                    .persons
                    .iter()
                    .find(|p| p.id == id && p.role == Role::Mentor)
            });

            match mentor {
                Some(mentor) => {
                    let insight = evaluate_mentorship(mentee, mentor, &snapshot.sessions, rules, now);
                    PairSummary {
                        mentee_id: mentee.id.clone(),
                        mentee_name: mentee.name.clone(),
                        mentor_id: Some(mentor.id.clone()),
                        mentor_name: mentor.name.clone(),
                        status: insight.status,
                        progress_percent: insight.progress_percent,
                        health_flags: insight.health_flags,
                        can_graduate: insight.can_graduate,
                    }
                }
                None => PairSummary {
                    mentee_id: mentee.id.clone(),
                    mentee_name: mentee.name.clone(),
                    mentor_id: None,
                    mentor_name: UNASSIGNED.to_string(),
                    status: mentee.status,
                    progress_percent: 0.0,
                    health_flags: Vec::new(),
                    can_graduate: false,
                },
            }
        })
        .collect()
}

/// Head counts and session completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_mentors: usize,
    pub total_mentees: usize,
    /// Mentees with a mentor assigned
    pub active_pairs: usize,
    pub total_sessions: usize,
    pub completed_sessions: usize,
    /// Completed share of all sessions (0-100)
    pub session_completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementStats {
    pub feedback_count: usize,
    /// Mean rating across all feedback, `None` without feedback
    pub avg_feedback_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalStats {
    pub total_goals: usize,
    pub completed_goals: usize,
    /// Completed share of all goals (0-100)
    pub success_rate: f64,
}

/// Caps in force when the analytics were computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceLimits {
    pub max_mentees_per_mentor: usize,
    pub matching_capacity: usize,
    pub min_sessions_for_completion: usize,
    pub min_duration_months: u32,
}

/// Aggregate program analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramAnalytics {
    pub overview: OverviewStats,
    pub engagement: EngagementStats,
    pub goals: GoalStats,
    pub governance: GovernanceLimits,
}

/// Compute analytics over the whole snapshot.
pub fn program_analytics(snapshot: &ProgramSnapshot, config: &EngineConfig) -> ProgramAnalytics {
    let total_sessions = snapshot.sessions.len();
    let completed_sessions = snapshot.sessions.iter().filter(|s| s.is_completed()).count();

    let feedback_count = snapshot.feedbacks.len();
    let avg_feedback_rating = (feedback_count > 0).then(|| {
        let sum: u32 = snapshot.feedbacks.iter().map(|f| u32::from(f.rating.value())).sum();
        f64::from(sum) / feedback_count as f64
    });

    let total_goals = snapshot.goals.len();
    let completed_goals = snapshot.goals.iter().filter(|g| g.is_completed()).count();

    ProgramAnalytics {
        overview: OverviewStats {
            total_mentors: snapshot.persons.iter().filter(|p| p.is_mentor()).count(),
            total_mentees: snapshot.persons.iter().filter(|p| p.is_mentee()).count(),
            active_pairs: snapshot
                .persons
                .iter()
                .filter(|p| p.is_mentee() && p.has_mentor())
                .count(),
            total_sessions,
            completed_sessions,
            session_completion_rate: percent(completed_sessions, total_sessions),
        },
        engagement: EngagementStats {
            feedback_count,
            avg_feedback_rating,
        },
        goals: GoalStats {
            total_goals,
            completed_goals,
            success_rate: percent(completed_goals, total_goals),
        },
        governance: GovernanceLimits {
            max_mentees_per_mentor: config.program.max_mentees_per_mentor,
            matching_capacity: config.matching.max_mentees_per_mentor,
            min_sessions_for_completion: config.program.min_sessions_for_completion,
            min_duration_months: config.program.min_duration_months,
        },
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
