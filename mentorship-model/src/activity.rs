//! Relationship history: sessions, goals and feedback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::error::ModelError;

/// Lifecycle state of a mentoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Pending,
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
}

/// A session between one mentor and one mentee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SessionRecord {
    /// Unique identifier
    pub id: String,
    /// Mentor taking part
    pub mentor_id: String,
    /// Mentee taking part
    pub mentee_id: String,
    /// Scheduled start
    pub scheduled_at: DateTime<Utc>,
    /// Current status
    pub status: SessionStatus,
    /// Agenda
    #[serde(default)]
    pub topic: String,
    /// Notes taken during the session
    #[serde(default)]
    pub notes: Option<String>,
}

impl SessionRecord {
    /// Create a session without topic or notes.
    pub fn new(
        id: impl Into<String>,
        mentor_id: impl Into<String>,
        mentee_id: impl Into<String>,
        scheduled_at: DateTime<Utc>,
        status: SessionStatus,
    ) -> Self {
        Self {
            id: id.into(),
            mentor_id: mentor_id.into(),
            mentee_id: mentee_id.into(),
            scheduled_at,
            status,
            topic: String::new(),
            notes: None,
        }
    }

    /// Set the topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Whether the person attended this session on either side.
    pub fn involves(&self, person_id: &str) -> bool {
        self.mentor_id == person_id || self.mentee_id == person_id
    }

    /// Whether this session belongs to exactly this mentor/mentee pair.
    pub fn is_between(&self, mentor_id: &str, mentee_id: &str) -> bool {
        self.mentor_id == mentor_id && self.mentee_id == mentee_id
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }
}

/// Progress of a mentee goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl Default for GoalStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// A development goal owned by a mentee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct GoalRecord {
    /// Unique identifier
    pub id: String,
    /// Owning mentee
    pub mentee_id: String,
    /// Short title
    pub title: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// When work on the goal starts
    pub start_at: DateTime<Utc>,
    /// When the goal is due
    pub due_at: DateTime<Utc>,
    /// Current status
    #[serde(default)]
    pub status: GoalStatus,
}

impl GoalRecord {
    /// Create a goal that has not been started.
    pub fn new(
        id: impl Into<String>,
        mentee_id: impl Into<String>,
        title: impl Into<String>,
        start_at: DateTime<Utc>,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            mentee_id: mentee_id.into(),
            title: title.into(),
            description: String::new(),
            start_at,
            due_at,
            status: GoalStatus::NotStarted,
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == GoalStatus::Completed
    }
}

/// A session rating on the 1-5 scale.
///
/// Values outside the scale are rejected on construction and on
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating on the scale.
    pub const MIN: u8 = 1;
    /// Highest rating on the scale.
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside 1-5.
    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::RatingOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Feedback left by one participant for another after a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct FeedbackRecord {
    /// Unique identifier
    pub id: String,
    /// Session being rated
    pub session_id: String,
    /// Author
    pub from_id: String,
    /// Recipient
    pub to_id: String,
    /// Rating given
    pub rating: Rating,
    /// Free-text comments
    #[serde(default)]
    pub comments: String,
}

impl FeedbackRecord {
    /// Create a feedback record, validating the rating.
    pub fn new(
        id: impl Into<String>,
        session_id: impl Into<String>,
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        rating: u8,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            id: id.into(),
            session_id: session_id.into(),
            from_id: from_id.into(),
            to_id: to_id.into(),
            rating: Rating::new(rating)?,
            comments: String::new(),
        })
    }
}
