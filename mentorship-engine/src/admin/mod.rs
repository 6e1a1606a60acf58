//! Administrative facade over the engine.
//!
//! `ProgramAdmin` is what a service layer calls. It checks that the actor
//! holds the admin role, resolves ids against a [`ProgramSnapshot`], runs the
//! pure engine functions and hands back decisions plus [`AuditRecord`]s. It
//! never mutates the snapshot; committing is the caller's job.

mod analytics;
mod audit;
mod snapshot;

pub use analytics::{
    pair_summaries, program_analytics, EngagementStats, GoalStats, GovernanceLimits,
    OverviewStats, PairSummary, ProgramAnalytics, UNASSIGNED,
};
pub use audit::AuditRecord;
pub use snapshot::ProgramSnapshot;

use chrono::{DateTime, Utc};
use mentorship_model::{Person, PilotStatus, Role};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::governance::{validate_assignment, AssignmentUpdate, ValidationResult};
use crate::matching::{run_auto_matching_with, MatchRecommendation};
use crate::pilot::{generate_report, PilotEvaluationReport};
use crate::reminders::{due_reminders, Reminder};

/// An assignment update together with its audit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCommit {
    pub update: AssignmentUpdate,
    pub audit: AuditRecord,
}

/// Result of an assignment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AssignmentDecision {
    /// Validation passed; the caller should persist the update
    Committed(AssignmentCommit),
    /// Validation failed; nothing to persist
    Rejected(ValidationResult),
}

impl AssignmentDecision {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// A pilot status transition to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotStatusChange {
    pub pilot_id: String,
    pub from: PilotStatus,
    pub to: PilotStatus,
    pub audit: AuditRecord,
}

/// Stateless administrative service.
#[derive(Debug, Clone, Default)]
pub struct ProgramAdmin {
    config: EngineConfig,
}

impl ProgramAdmin {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn authorize(&self, actor: &Person, operation: &'static str) -> Result<()> {
        if actor.role == Role::ProgramAdmin {
            return Ok(());
        }
        warn!(actor_id = %actor.id, role = actor.role.as_str(), operation, "Unauthorized admin operation");
        Err(EngineError::unauthorized(&actor.id, actor.role, operation))
    }

    /// Recommend mentors for every unassigned mentee.
    pub fn recommended_matches(
        &self,
        actor: &Person,
        snapshot: &ProgramSnapshot,
    ) -> Result<Vec<MatchRecommendation>> {
        self.authorize(actor, "view match recommendations")?;
        Ok(run_auto_matching_with(
            &self.config.matching,
            &snapshot.mentors(),
            &snapshot.mentees(),
        ))
    }

    /// Check an assignment without committing it.
    pub fn validate(
        &self,
        actor: &Person,
        snapshot: &ProgramSnapshot,
        mentee_id: &str,
        mentor_id: &str,
    ) -> Result<ValidationResult> {
        self.authorize(actor, "validate assignments")?;
        let mentee = snapshot.person_with_role(mentee_id, Role::Mentee)?;
        let mentor = snapshot.person_with_role(mentor_id, Role::Mentor)?;
        Ok(validate_assignment(
            mentor,
            mentee,
            &snapshot.mentees(),
            &self.config.program,
        ))
    }

    /// Validate and, if allowed, produce the commit for an assignment.
    ///
    /// A rule violation is `Ok(Rejected)`, not an error.
    pub fn assign_mentor(
        &self,
        actor: &Person,
        snapshot: &ProgramSnapshot,
        mentee_id: &str,
        mentor_id: &str,
        now: DateTime<Utc>,
    ) -> Result<AssignmentDecision> {
        self.authorize(actor, "assign mentors")?;
        let mentee = snapshot.person_with_role(mentee_id, Role::Mentee)?;
        let mentor = snapshot.person_with_role(mentor_id, Role::Mentor)?;

        let validation = validate_assignment(mentor, mentee, &snapshot.mentees(), &self.config.program);
        if !validation.valid {
            info!(mentee_id, mentor_id, reason = ?validation.error, "Assignment rejected");
            return Ok(AssignmentDecision::Rejected(validation));
        }

        info!(mentee_id, mentor_id, actor_id = %actor.id, "Assignment committed");
        let audit = AuditRecord::new(&actor.id, "Assigned mentor", now)
            .with_target(mentee_id)
            .with_details(serde_json::json!({ "mentor_id": mentor_id }));

        Ok(AssignmentDecision::Committed(AssignmentCommit {
            update: AssignmentUpdate::assign(mentee_id, mentor_id, now),
            audit,
        }))
    }

    /// Set or clear a mentee's mentor without validation.
    pub fn override_assignment(
        &self,
        actor: &Person,
        snapshot: &ProgramSnapshot,
        mentee_id: &str,
        mentor_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<AssignmentCommit> {
        self.authorize(actor, "override assignments")?;
        let mentee = snapshot.person_with_role(mentee_id, Role::Mentee)?;

        let update = match mentor_id {
            Some(mentor_id) => {
                snapshot.person_with_role(mentor_id, Role::Mentor)?;
                AssignmentUpdate::assign(mentee_id, mentor_id, now)
            }
            None => AssignmentUpdate::release(mentee_id),
        };

        warn!(
            mentee_id,
            previous = ?mentee.assigned_mentor_id,
            mentor_id = ?mentor_id,
            actor_id = %actor.id,
            "Assignment overridden"
        );
        let audit = AuditRecord::new(&actor.id, "Manual override", now)
            .with_target(mentee_id)
            .with_details(serde_json::json!({
                "previous_mentor_id": mentee.assigned_mentor_id,
                "mentor_id": mentor_id,
            }));

        Ok(AssignmentCommit { update, audit })
    }

    /// List every mentee with their mentor and relationship health.
    pub fn pair_list(
        &self,
        actor: &Person,
        snapshot: &ProgramSnapshot,
        now: DateTime<Utc>,
    ) -> Result<Vec<PairSummary>> {
        self.authorize(actor, "view pairs")?;
        Ok(pair_summaries(snapshot, &self.config.program, now))
    }

    pub fn analytics(&self, actor: &Person, snapshot: &ProgramSnapshot) -> Result<ProgramAnalytics> {
        self.authorize(actor, "view analytics")?;
        Ok(program_analytics(snapshot, &self.config))
    }

    /// Evaluate a pilot cohort.
    pub fn pilot_report(
        &self,
        actor: &Person,
        snapshot: &ProgramSnapshot,
        pilot_id: &str,
    ) -> Result<PilotEvaluationReport> {
        self.authorize(actor, "view pilot reports")?;
        let pilot = snapshot.pilot(pilot_id)?;
        Ok(generate_report(
            pilot,
            &snapshot.persons,
            &snapshot.sessions,
            &snapshot.goals,
            &snapshot.feedbacks,
        ))
    }

    /// Move a pilot to a new status.
    pub fn update_pilot_status(
        &self,
        actor: &Person,
        snapshot: &ProgramSnapshot,
        pilot_id: &str,
        status: PilotStatus,
        now: DateTime<Utc>,
    ) -> Result<PilotStatusChange> {
        self.authorize(actor, "update pilots")?;
        let pilot = snapshot.pilot(pilot_id)?;

        info!(pilot_id, from = pilot.status.as_str(), to = status.as_str(), "Pilot status updated");
        let audit = AuditRecord::new(&actor.id, "Updated pilot status", now).with_details(serde_json::json!({
            "pilot_id": pilot_id,
            "from": pilot.status,
            "to": status,
        }));

        Ok(PilotStatusChange {
            pilot_id: pilot.id.clone(),
            from: pilot.status,
            to: status,
            audit,
        })
    }

    /// Reminders due within the configured window.
    pub fn reminders(&self, snapshot: &ProgramSnapshot, now: DateTime<Utc>) -> Vec<Reminder> {
        due_reminders(&snapshot.sessions, now, self.config.reminders.window_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    fn make_snapshot() -> ProgramSnapshot {
        ProgramSnapshot {
            persons: vec![
                Person::mentor("1", "Sarah Chen").with_skills(&["React"]),
                Person::mentee("2", "Alex Rivera").with_interests(&["React"]),
                Person::admin("3", "David Admin"),
            ],
            ..Default::default()
        }
    }

    fn admin() -> Person {
        Person::admin("3", "David Admin")
    }

    #[test]
    fn test_non_admin_rejected() {
        let service = ProgramAdmin::default();
        let mentor = Person::mentor("1", "Sarah Chen");

        let err = service.analytics(&mentor, &make_snapshot()).unwrap_err();
        assert!(matches!(err, EngineError::Unauthorized { ref actor_id, .. } if actor_id == "1"));
    }

    #[test]
    fn test_assign_commits_with_audit() {
        let service = ProgramAdmin::default();
        let decision = service
            .assign_mentor(&admin(), &make_snapshot(), "2", "1", now())
            .unwrap();

        match decision {
            AssignmentDecision::Committed(commit) => {
                assert_eq!(commit.update.mentor_id.as_deref(), Some("1"));
                assert_eq!(commit.update.relationship_start, Some(now()));
                assert_eq!(commit.audit.actor_id, "3");
                assert_eq!(commit.audit.target_id.as_deref(), Some("2"));
            }
            AssignmentDecision::Rejected(v) => panic!("unexpected rejection: {:?}", v),
        }
    }

    #[test]
    fn test_wrong_role_ids() {
        let service = ProgramAdmin::default();
        let err = service
            .assign_mentor(&admin(), &make_snapshot(), "1", "2", now())
            .unwrap_err();

        assert!(matches!(err, EngineError::WrongRole { .. }));
    }

    #[test]
    fn test_override_release() {
        let service = ProgramAdmin::default();
        let mut snapshot = make_snapshot();
        snapshot.persons[1] = Person::mentee("2", "Alex Rivera").assigned_to("1", now());

        let commit = service
            .override_assignment(&admin(), &snapshot, "2", None, now())
            .unwrap();

        assert!(commit.update.mentor_id.is_none());
        assert!(commit.update.relationship_start.is_none());
        assert_eq!(commit.audit.details["previous_mentor_id"], "1");
    }

    #[test]
    fn test_recommended_matches() {
        let service = ProgramAdmin::default();
        let recs = service.recommended_matches(&admin(), &make_snapshot()).unwrap();

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].mentor_id, "1");
    }
}
