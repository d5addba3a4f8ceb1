//! Error types for the game modes.

use thiserror::Error;

/// Result type for game mode operations.
pub type ModeResult<T> = Result<T, ModeError>;

/// Rejected user input. None of these end a session.
#[derive(Debug, Error)]
pub enum ModeError {
    /// The key is not part of this session's key universe.
    #[error("unknown item: {0}")]
    UnknownKey(String),

    /// The assignment target does not exist.
    #[error("unknown target: {0}")]
    UnknownTarget(String),

    /// The target already holds as many items as it can.
    #[error("{target} is full ({capacity} max)")]
    TargetFull {
        /// Target that refused the item.
        target: String,
        /// Its capacity.
        capacity: usize,
    },

    /// Submission attempted before every key has a value.
    #[error("not finished yet: {assigned}/{total} assigned")]
    Incomplete {
        /// Keys with a value.
        assigned: usize,
        /// Keys in the universe.
        total: usize,
    },

    /// The current question was already answered.
    #[error("already answered; move on to the next team")]
    AlreadyAnswered,

    /// Moving on was requested before the current team was answered.
    #[error("answer this team first")]
    NotAnswered,

    /// The attempt was already submitted.
    #[error("already submitted; try again to start over")]
    AlreadySubmitted,

    /// Results were requested before submitting.
    #[error("nothing submitted yet")]
    NotSubmitted,
}
