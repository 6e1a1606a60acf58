//! Data model for the mentorship decision engine.
//!
//! These records are snapshots handed over by the surrounding application.
//! Nothing in this crate owns a lifecycle; the engine only reads them.
//!
//! - **People**: [`Person`] with its [`Role`], tags and weekly availability
//! - **Activity**: [`SessionRecord`], [`GoalRecord`], [`FeedbackRecord`]
//! - **Cohorts**: [`PilotCohort`] and the [`PilotOutcome`] taxonomy
//! - **Rules**: [`ProgramRules`], the governance thresholds of a program
//!
//! With the `typescript` feature enabled, every record can be exported to
//! TypeScript using ts-rs so the dashboard shares the same shapes.

pub mod activity;
pub mod cohort;
pub mod error;
pub mod person;
pub mod rules;

// Re-export main types
pub use activity::{FeedbackRecord, GoalRecord, GoalStatus, Rating, SessionRecord, SessionStatus};
pub use cohort::{PilotCohort, PilotOutcome, PilotStatus};
pub use error::ModelError;
pub use person::{Availability, Person, RelationshipStatus, Role};
pub use rules::ProgramRules;
