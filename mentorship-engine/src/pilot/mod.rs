//! Pilot cohort evaluation.
//!
//! Each participant is scored on three weighted components:
//!
//! | Component | Points | Basis                                   |
//! |-----------|--------|-----------------------------------------|
//! | Sessions  | 40     | completed / required, capped at 1       |
//! | Goals     | 30     | achieved / owned (mentees); full for mentors |
//! | Feedback  | 30     | mean rating received / 5                |
//!
//! The cohort report aggregates success rate and mean engagement.

mod participant;
mod report;

pub use participant::{
    evaluate_participant, ParticipantOutcome, FEEDBACK_WEIGHT, GOAL_WEIGHT, SESSION_WEIGHT,
};
pub use report::{generate_report, IndividualOutcome, PilotEvaluationReport};
