//! Mentorship Engine - decisions behind a mentorship program
//!
//! Pure functions over in-memory snapshots of a program:
//!
//! - **Matching**: score mentor/mentee pairs and recommend assignments under a capacity cap
//! - **Governance**: assignment legality and relationship health against program rules
//! - **Pilot evaluation**: per-participant outcomes and cohort success reports
//! - **Reminders**: which participants to remind about upcoming sessions
//!
//! The [`admin`] facade wraps them with role checks, id resolution and
//! audit records for a service layer or the CLI.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ProgramAdmin                           │
//! │          (role check, id lookup, audit records)             │
//! │                                                             │
//! │  ┌──────────┐  ┌────────────┐  ┌─────────┐  ┌───────────┐  │
//! │  │ Matching │  │ Governance │  │  Pilot  │  │ Reminders │  │
//! │  └──────────┘  └────────────┘  └─────────┘  └───────────┘  │
//! │                        │                                    │
//! │               ┌────────▼────────┐                           │
//! │               │ ProgramSnapshot │                           │
//! │               └─────────────────┘                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of the components call each other and none of them mutate input.

pub mod admin;
pub mod config;
pub mod error;
pub mod governance;
pub mod matching;
pub mod pilot;
pub mod reminders;

// Re-export main types
pub use admin::{AssignmentDecision, AuditRecord, ProgramAdmin, ProgramSnapshot};
pub use config::{EngineConfig, MatchWeights, MatchingConfig, ReminderConfig};
pub use error::{EngineError, Result};
pub use governance::{evaluate_mentorship, validate_assignment, GovernanceInsight, ValidationResult};
pub use matching::{run_auto_matching, MatchRecommendation};
pub use pilot::{evaluate_participant, generate_report, PilotEvaluationReport};
pub use reminders::{due_reminders, Reminder};
