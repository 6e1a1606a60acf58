//! Error types for the engine.
//!
//! Business-rule failures (a full mentor, an already matched mentee) are not
//! errors: they come back as [`ValidationResult`](crate::governance::ValidationResult)
//! values. The variants here signal caller misuse or broken input.

use mentorship_model::{ModelError, Role};

/// Error types for the mentorship engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Acting person lacks the administrative role
    #[error("Unauthorized: {actor_id} ({role}) may not {operation}")]
    Unauthorized {
        actor_id: String,
        role: &'static str,
        operation: &'static str,
    },

    /// Person id not present in the snapshot
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    /// Person exists but holds a different role than the operation needs
    #[error("Person {id} is not a {expected}")]
    WrongRole { id: String, expected: &'static str },

    /// Pilot id not present in the snapshot
    #[error("Pilot not found: {0}")]
    PilotNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid record
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub(crate) fn unauthorized(actor_id: &str, role: Role, operation: &'static str) -> Self {
        Self::Unauthorized {
            actor_id: actor_id.to_string(),
            role: role.as_str(),
            operation,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
