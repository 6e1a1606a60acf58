//! Configuration for the mentorship engine.

use mentorship_model::ProgramRules;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EngineError, Result};

/// Configuration for the whole engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Governance rules
    pub program: ProgramRules,
    /// Auto-matching configuration
    pub matching: MatchingConfig,
    /// Session reminder configuration
    pub reminders: ReminderConfig,
}

impl EngineConfig {
    /// Create a config around a set of program rules.
    pub fn new(program: ProgramRules) -> Self {
        Self {
            program,
            ..Default::default()
        }
    }

    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject limits that would make every assignment impossible, and
    /// negative match weights.
    pub fn validate(&self) -> Result<()> {
        if self.program.max_mentees_per_mentor == 0 {
            return Err(EngineError::Config(
                "program.max_mentees_per_mentor must be at least 1".to_string(),
            ));
        }
        if self.matching.max_mentees_per_mentor == 0 {
            return Err(EngineError::Config(
                "matching.max_mentees_per_mentor must be at least 1".to_string(),
            ));
        }
        if self.reminders.window_hours == 0 {
            return Err(EngineError::Config(
                "reminders.window_hours must be at least 1".to_string(),
            ));
        }
        self.matching.weights.validate()
    }
}

/// Auto-matching configuration.
///
/// The matching capacity is kept apart from
/// [`ProgramRules::max_mentees_per_mentor`]: recommendations stay below the
/// governance cap unless an operator raises it here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Recommendations a single mentor may receive, counting current mentees
    pub max_mentees_per_mentor: usize,
    /// Scoring weights
    pub weights: MatchWeights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_mentees_per_mentor: 2,
            weights: MatchWeights::default(),
        }
    }
}

/// Points awarded by the match score function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    /// Per mentor skill matching a mentee interest
    pub skill_overlap: i32,
    /// Per shared availability slot
    pub shared_slot: i32,
    /// Subtracted when no slot is shared
    pub no_overlap_penalty: i32,
    /// Per declared year of mentor experience
    pub experience_per_year: i32,
    /// Ceiling of the experience bonus
    pub experience_cap: i32,
}

impl MatchWeights {
    /// Every weight is a magnitude; the sign is fixed by the scoring rule.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("skill_overlap", self.skill_overlap),
            ("shared_slot", self.shared_slot),
            ("no_overlap_penalty", self.no_overlap_penalty),
            ("experience_per_year", self.experience_per_year),
            ("experience_cap", self.experience_cap),
        ];
        match weights.iter().find(|(_, value)| *value < 0) {
            Some((name, value)) => Err(EngineError::Config(format!(
                "matching.weights.{} must not be negative (got {})",
                name, value
            ))),
            None => Ok(()),
        }
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skill_overlap: 25,
            shared_slot: 15,
            no_overlap_penalty: 40,
            experience_per_year: 2,
            experience_cap: 20,
        }
    }
}

/// Session reminder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// How far ahead upcoming sessions are reminded (hours)
    pub window_hours: u32,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self { window_hours: 24 }
    }
}
