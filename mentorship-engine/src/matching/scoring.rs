//! Mentor/mentee compatibility scoring.

use mentorship_model::Person;
use serde::{Deserialize, Serialize};

use crate::config::MatchWeights;

/// Compatibility of one mentor with one mentee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    /// Score reported to callers, never below zero
    pub score: u32,
    /// Subtotal before clamping; the availability penalty can push it negative
    pub raw_score: i32,
    /// Human-readable reasons, in scoring order, including penalties
    pub reasons: Vec<String>,
}

/// Score a pair with the default weights.
pub fn score(mentor: &Person, mentee: &Person) -> MatchScore {
    score_with(&MatchWeights::default(), mentor, mentee)
}

/// Score a pair.
///
/// Skills are matched case-insensitively against interests; availability
/// slots are matched by exact string on days both people list.
pub fn score_with(weights: &MatchWeights, mentor: &Person, mentee: &Person) -> MatchScore {
    // Accumulated wide so large configured weights saturate instead of overflowing.
    let mut raw: i64 = 0;
    let mut reasons = Vec::new();

    let shared = shared_skills(mentor, mentee);
    if !shared.is_empty() {
        raw = raw.saturating_add(i64::from(weights.skill_overlap).saturating_mul(shared.len() as i64));
        reasons.push(format!("Strong overlap in skills: {}", shared.join(", ")));
    }

    let overlap = shared_slot_count(mentor, mentee);
    if overlap > 0 {
        raw = raw.saturating_add(i64::from(weights.shared_slot).saturating_mul(overlap as i64));
        reasons.push(format!("Compatible schedule ({} shared slots)", overlap));
    } else {
        raw = raw.saturating_sub(i64::from(weights.no_overlap_penalty));
        reasons.push("Scheduling might be difficult (no direct overlap)".to_string());
    }

    // Zero years counts as undeclared.
    if let Some(years) = mentor.experience_years.filter(|years| *years > 0) {
        raw = raw.saturating_add(i64::from(experience_bonus(weights, years)));
        reasons.push(format!("Mentor has {} years of experience", years));
    }

    let raw_score = raw.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    MatchScore {
        score: raw_score.max(0) as u32,
        raw_score,
        reasons,
    }
}

/// Mentor skills that appear among the mentee's interests, in skill order.
pub fn shared_skills<'a>(mentor: &'a Person, mentee: &Person) -> Vec<&'a str> {
    let interests: Vec<String> = mentee.interests.iter().map(|i| i.to_lowercase()).collect();

    mentor
        .skills
        .iter()
        .filter(|skill| interests.contains(&skill.to_lowercase()))
        .map(String::as_str)
        .collect()
}

/// Number of identical slots on days present in both schedules.
pub fn shared_slot_count(mentor: &Person, mentee: &Person) -> usize {
    mentor
        .availability
        .iter()
        .filter_map(|(day, mentor_slots)| {
            mentee.availability.get(day).map(|mentee_slots| {
                mentor_slots
                    .iter()
                    .filter(|slot| mentee_slots.contains(*slot))
                    .count()
            })
        })
        .sum()
}

/// Experience bonus for a number of years, capped.
pub fn experience_bonus(weights: &MatchWeights, years: u32) -> i32 {
    let bonus = i64::from(years) * i64::from(weights.experience_per_year);
    bonus.min(i64::from(weights.experience_cap)).max(0) as i32
}
