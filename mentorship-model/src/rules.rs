//! Governance thresholds of a mentorship program.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Program rules applied by the governance evaluator.
///
/// Missing fields fall back to the defaults when deserialized, so a tenant
/// only has to spell out the thresholds it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct ProgramRules {
    /// Active mentees a mentor may hold
    pub max_mentees_per_mentor: usize,
    /// Completed sessions needed to finish the program
    pub min_sessions_for_completion: usize,
    /// Months a relationship must run before graduation
    pub min_duration_months: u32,
    /// Days without a session before a relationship is flagged inactive
    pub inactivity_threshold_days: u32,
    /// Cancellations at which a mentee is flagged
    pub max_cancellations_allowed: u32,
}

impl Default for ProgramRules {
    fn default() -> Self {
        Self {
            max_mentees_per_mentor: 3,
            min_sessions_for_completion: 6,
            min_duration_months: 6,
            inactivity_threshold_days: 30,
            max_cancellations_allowed: 2,
        }
    }
}
