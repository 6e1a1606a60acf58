//! In-memory bundle of program records handed to the facade.

use mentorship_model::{FeedbackRecord, GoalRecord, Person, PilotCohort, Role, SessionRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EngineError, Result};

/// Everything the engine needs to answer administrative queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramSnapshot {
    pub persons: Vec<Person>,
    pub sessions: Vec<SessionRecord>,
    pub goals: Vec<GoalRecord>,
    pub feedbacks: Vec<FeedbackRecord>,
    pub pilots: Vec<PilotCohort>,
}

impl ProgramSnapshot {
    /// Parse a snapshot from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot file; `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Look up a person by id.
    pub fn person(&self, id: &str) -> Result<&Person> {
        self.persons
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EngineError::PersonNotFound(id.to_string()))
    }

    /// Look up a person by id, requiring a role.
    pub fn person_with_role(&self, id: &str, role: Role) -> Result<&Person> {
        let person = self.person(id)?;
        if person.role != role {
            return Err(EngineError::WrongRole {
                id: id.to_string(),
                expected: role.as_str(),
            });
        }
        Ok(person)
    }

    /// Look up a pilot by id.
    pub fn pilot(&self, id: &str) -> Result<&PilotCohort> {
        self.pilots
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EngineError::PilotNotFound(id.to_string()))
    }

    /// Everyone holding a role, in roster order.
    pub fn with_role(&self, role: Role) -> Vec<Person> {
        self.persons.iter().filter(|p| p.role == role).cloned().collect()
    }

    pub fn mentors(&self) -> Vec<Person> {
        self.with_role(Role::Mentor)
    }

    pub fn mentees(&self) -> Vec<Person> {
        self.with_role(Role::Mentee)
    }
}
