//! Pilot cohorts and their outcome taxonomy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Lifecycle of a pilot cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum PilotStatus {
    Draft,
    Active,
    Completed,
}

impl PilotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

/// How a participant fared in a pilot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum PilotOutcome {
    /// High score and the required session count met
    Successful,
    /// Middling score
    NeedsImprovement,
    /// Low score
    Unsuccessful,
    /// Pilot not started yet; assigned by the caller, never by scoring
    Pending,
}

impl PilotOutcome {
    /// Get string representation for reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Successful => "Successful",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Unsuccessful => "Unsuccessful",
            Self::Pending => "Pending",
        }
    }
}

/// A time-boxed cohort evaluated for program success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PilotCohort {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// First day of the pilot
    pub start_date: NaiveDate,
    /// Last day of the pilot
    pub end_date: NaiveDate,
    /// Completed sessions expected from every participant
    pub min_sessions_required: u32,
    /// Planned length
    pub duration_months: u32,
    /// Current status
    pub status: PilotStatus,
    /// Enrolled mentors and mentees
    #[serde(default)]
    pub participant_ids: Vec<String>,
}

impl PilotCohort {
    /// Whether a person is enrolled in this cohort.
    pub fn includes(&self, person_id: &str) -> bool {
        self.participant_ids.iter().any(|id| id == person_id)
    }
}
