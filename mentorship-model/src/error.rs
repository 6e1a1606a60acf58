//! Errors raised while building model records.

/// Error types for model records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Feedback rating outside the 1-5 scale
    #[error("Rating {0} is outside the 1-5 scale")]
    RatingOutOfRange(u8),
}
