//! Auto-matching of mentees to mentors.
//!
//! - **Scoring**: skill/interest overlap, shared availability, experience
//! - **Allocation**: greedy, input-ordered assignment under a capacity cap

mod allocator;
mod scoring;

pub use allocator::{run_auto_matching, run_auto_matching_with, MatchRecommendation};
pub use scoring::{
    experience_bonus, score, score_with, shared_skills, shared_slot_count, MatchScore,
};
