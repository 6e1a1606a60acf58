//! Assignment legality checks and the commit record produced once a
//! pairing is accepted.

use chrono::{DateTime, Utc};
use mentorship_model::{Person, ProgramRules, RelationshipStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of an assignment check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the assignment may go ahead
    pub valid: bool,
    /// Message for display when it may not
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// Create a failing result.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Check whether `mentee` may be assigned to `mentor`.
///
/// The mentor's load is the number of entries in `all_mentees` pointing at
/// them; it must be below `rules.max_mentees_per_mentor`. The mentee must not
/// already have a mentor. Capacity is checked first. Nothing is mutated.
pub fn validate_assignment(
    mentor: &Person,
    mentee: &Person,
    all_mentees: &[Person],
    rules: &ProgramRules,
) -> ValidationResult {
    let active = all_mentees
        .iter()
        .filter(|m| m.assigned_mentor_id.as_deref() == Some(mentor.id.as_str()))
        .count();

    if active >= rules.max_mentees_per_mentor {
        debug!(
            mentor_id = %mentor.id,
            active,
            limit = rules.max_mentees_per_mentor,
            "Assignment rejected: mentor at capacity"
        );
        return ValidationResult::rejected(format!(
            "Mentor {} has reached max capacity ({}).",
            mentor.name, rules.max_mentees_per_mentor
        ));
    }

    if mentee.has_mentor() {
        debug!(mentee_id = %mentee.id, "Assignment rejected: mentee already matched");
        return ValidationResult::rejected(format!(
            "Mentee {} already has an active mentor.",
            mentee.name
        ));
    }

    ValidationResult::ok()
}

/// Changes to write back to a mentee record after an assignment decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentUpdate {
    pub mentee_id: String,
    /// New mentor, `None` when the mentee is released
    pub mentor_id: Option<String>,
    pub status: RelationshipStatus,
    pub relationship_start: Option<DateTime<Utc>>,
}

impl AssignmentUpdate {
    /// Pair a mentee with a mentor starting now.
    pub fn assign(mentee_id: impl Into<String>, mentor_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            mentee_id: mentee_id.into(),
            mentor_id: Some(mentor_id.into()),
            status: RelationshipStatus::Active,
            relationship_start: Some(now),
        }
    }

    /// Release a mentee from their mentor.
    pub fn release(mentee_id: impl Into<String>) -> Self {
        Self {
            mentee_id: mentee_id.into(),
            mentor_id: None,
            status: RelationshipStatus::Unassigned,
            relationship_start: None,
        }
    }

    /// Apply the update to an in-memory mentee record.
    ///
    /// Returns `false` and leaves the record alone if the ids differ.
    pub fn apply(&self, mentee: &mut Person) -> bool {
        if mentee.id != self.mentee_id {
            return false;
        }
        mentee.assigned_mentor_id = self.mentor_id.clone();
        mentee.status = self.status;
        mentee.relationship_start = self.relationship_start;
        true
    }
}
