//! Audit records for administrative actions.
//!
//! The engine only produces them; persisting is up to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An administrative action to be written to the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Unique entry ID
    pub id: String,
    /// Who acted
    pub actor_id: String,
    /// What was done
    pub action: String,
    /// Person affected, if any
    pub target_id: Option<String>,
    /// Structured details
    pub details: serde_json::Value,
    /// When the action was taken
    pub recorded_at: DateTime<Utc>,
}

impl AuditRecord {
    /// Create a record with no target or details.
    pub fn new(actor_id: impl Into<String>, action: impl Into<String>, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            actor_id: actor_id.into(),
            action: action.into(),
            target_id: None,
            details: serde_json::Value::Null,
            recorded_at,
        }
    }

    /// Set the affected person.
    pub fn with_target(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    /// Attach structured details.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_builder() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let record = AuditRecord::new("3", "Assigned mentor", at)
            .with_target("5")
            .with_details(serde_json::json!({"mentor_id": "4"}));

        assert_eq!(record.target_id.as_deref(), Some("5"));
        assert_eq!(record.details["mentor_id"], "4");
        assert!(uuid::Uuid::parse_str(&record.id).is_ok());
    }
}
