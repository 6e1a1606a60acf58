//! People taking part in a mentorship program.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Weekly availability: day name to the time slots offered that day.
///
/// Two slots overlap only when their strings are exactly equal.
pub type Availability = BTreeMap<String, Vec<String>>;

/// Role of a person within the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Offers guidance to mentees
    Mentor,
    /// Receives guidance from a mentor
    Mentee,
    /// HR administrator running the program
    ProgramAdmin,
}

impl Role {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mentor => "Mentor",
            Self::Mentee => "Mentee",
            Self::ProgramAdmin => "Program Admin",
        }
    }
}

/// State of a mentee's relationship with their mentor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum RelationshipStatus {
    Unassigned,
    Active,
    Paused,
    Completed,
    Terminated,
}

impl Default for RelationshipStatus {
    fn default() -> Self {
        Self::Unassigned
    }
}

/// A program participant.
///
/// Mentor-side fields (`skills`, `experience_years`) and mentee-side fields
/// (`interests`, `assigned_mentor_id`, `relationship_start`) share one record,
/// matching how the roster is stored upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Person {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Program role
    pub role: Role,
    /// Skill tags (mentor side)
    #[serde(default)]
    pub skills: Vec<String>,
    /// Interest tags (mentee side)
    #[serde(default)]
    pub interests: Vec<String>,
    /// Declared years of experience (mentor side)
    #[serde(default)]
    pub experience_years: Option<u32>,
    /// Weekly availability
    #[serde(default)]
    pub availability: Availability,
    /// Current mentor (mentee side)
    #[serde(default)]
    pub assigned_mentor_id: Option<String>,
    /// Relationship status
    #[serde(default)]
    pub status: RelationshipStatus,
    /// When the current relationship started
    #[serde(default)]
    pub relationship_start: Option<DateTime<Utc>>,
    /// Sessions this person cancelled over the lifetime of the program
    #[serde(default)]
    pub cancellation_count: u32,
    /// Pilot cohort this person was enrolled in
    #[serde(default)]
    pub pilot_id: Option<String>,
}

impl Person {
    /// Create a person with an empty profile.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            role,
            skills: Vec::new(),
            interests: Vec::new(),
            experience_years: None,
            availability: Availability::new(),
            assigned_mentor_id: None,
            status: RelationshipStatus::Unassigned,
            relationship_start: None,
            cancellation_count: 0,
            pilot_id: None,
        }
    }

    /// Create a mentor.
    pub fn mentor(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::Mentor)
    }

    /// Create a mentee.
    pub fn mentee(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::Mentee)
    }

    /// Create a program administrator.
    pub fn admin(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::ProgramAdmin)
    }

    /// Set skill tags.
    pub fn with_skills<S: AsRef<str>>(mut self, skills: &[S]) -> Self {
        self.skills = skills.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Set interest tags.
    pub fn with_interests<S: AsRef<str>>(mut self, interests: &[S]) -> Self {
        self.interests = interests.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Declare years of experience.
    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = Some(years);
        self
    }

    /// Add an available slot on a day.
    pub fn with_slot(mut self, day: impl Into<String>, slot: impl Into<String>) -> Self {
        self.availability.entry(day.into()).or_default().push(slot.into());
        self
    }

    /// Attach this mentee to a mentor with an active relationship.
    pub fn assigned_to(mut self, mentor_id: impl Into<String>, start: DateTime<Utc>) -> Self {
        self.assigned_mentor_id = Some(mentor_id.into());
        self.status = RelationshipStatus::Active;
        self.relationship_start = Some(start);
        self
    }

    /// Set the lifetime cancellation count.
    pub fn with_cancellations(mut self, count: u32) -> Self {
        self.cancellation_count = count;
        self
    }

    pub fn is_mentor(&self) -> bool {
        self.role == Role::Mentor
    }

    pub fn is_mentee(&self) -> bool {
        self.role == Role::Mentee
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::ProgramAdmin
    }

    /// Whether this person currently has a mentor assigned.
    pub fn has_mentor(&self) -> bool {
        self.assigned_mentor_id.is_some()
    }
}
