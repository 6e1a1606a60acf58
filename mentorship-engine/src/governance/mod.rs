//! Governance of mentor/mentee relationships.
//!
//! - **Assignment**: capacity and single-mentor checks before a pairing is committed
//! - **Health**: progress, inactivity/cancellation flags, graduation readiness

mod assignment;
mod health;

pub use assignment::{validate_assignment, AssignmentUpdate, ValidationResult};
pub use health::{evaluate_mentorship, GovernanceInsight};
