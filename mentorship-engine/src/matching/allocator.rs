//! Greedy allocation of unassigned mentees to mentors.

use mentorship_model::Person;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

use super::scoring::{score_with, MatchScore};
use crate::config::MatchingConfig;

/// A recommended, not yet committed, pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecommendation {
    pub mentee_id: String,
    pub mentee_name: String,
    pub mentor_id: String,
    pub mentor_name: String,
    /// Clamped match score
    pub score: u32,
    /// Reasons behind the score
    pub reasons: Vec<String>,
}

/// Recommend mentors with the default matching configuration.
pub fn run_auto_matching(mentors: &[Person], mentees: &[Person]) -> Vec<MatchRecommendation> {
    run_auto_matching_with(&MatchingConfig::default(), mentors, mentees)
}

/// Recommend a mentor for every unassigned mentee that can still get one.
///
/// Mentees are handled in input order and each one takes the best-scoring
/// mentor whose load is below `config.max_mentees_per_mentor`. Loads start
/// from the mentees already assigned to each mentor and grow as
/// recommendations are made, so an earlier mentee can use up a slot a later
/// one would have scored higher on. Equal scores keep mentor roster order.
/// Mentees left without capacity are omitted.
pub fn run_auto_matching_with(
    config: &MatchingConfig,
    mentors: &[Person],
    mentees: &[Person],
) -> Vec<MatchRecommendation> {
    let mut load: HashMap<&str, usize> = mentors
        .iter()
        .map(|mentor| (mentor.id.as_str(), current_load(&mentor.id, mentees)))
        .collect();

    let mut recommendations = Vec::new();
    let mut unmatched = 0usize;

    for mentee in mentees.iter().filter(|m| !m.has_mentor()) {
        let mut candidates: Vec<(&Person, MatchScore)> = mentors
            .iter()
            .map(|mentor| (mentor, score_with(&config.weights, mentor, mentee)))
            .collect();

        // Stable: ties keep roster order
        candidates.sort_by(|a, b| b.1.score.cmp(&a.1.score));

        let best = candidates.into_iter().find(|(mentor, _)| {
            load.get(mentor.id.as_str()).copied().unwrap_or(0) < config.max_mentees_per_mentor
        });

        match best {
            Some((mentor, matched)) => {
                *load.entry(mentor.id.as_str()).or_insert(0) += 1;
                debug!(
                    mentee_id = %mentee.id,
                    mentor_id = %mentor.id,
                    score = matched.score,
                    "Mentor recommended"
                );
                recommendations.push(MatchRecommendation {
                    mentee_id: mentee.id.clone(),
                    mentee_name: mentee.name.clone(),
                    mentor_id: mentor.id.clone(),
                    mentor_name: mentor.name.clone(),
                    score: matched.score,
                    reasons: matched.reasons,
                });
            }
            None => {
                unmatched += 1;
                debug!(mentee_id = %mentee.id, "No mentor with remaining capacity");
            }
        }
    }

    info!(
        recommended = recommendations.len(),
        unmatched,
        capacity = config.max_mentees_per_mentor,
        "Auto-matching complete"
    );

    recommendations
}

/// Mentees currently assigned to a mentor.
fn current_load(mentor_id: &str, mentees: &[Person]) -> usize {
    mentees
        .iter()
        .filter(|mentee| mentee.assigned_mentor_id.as_deref() == Some(mentor_id))
        .count()
}
