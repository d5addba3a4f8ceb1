//! Lifecycle shared by the batch modes.

use gq_core::Score;

use crate::error::{ModeError, ModeResult};

/// Where a batch session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting assignments.
    Selecting,
    /// Scored; only "try again" leaves this state.
    Submitted(Score),
}

impl Phase {
    /// Whether assignments are still accepted.
    pub fn is_selecting(self) -> bool {
        matches!(self, Self::Selecting)
    }

    /// The score once submitted.
    pub fn score(self) -> Option<Score> {
        match self {
            Self::Selecting => None,
            Self::Submitted(score) => Some(score),
        }
    }

    pub(crate) fn ensure_selecting(self) -> ModeResult<()> {
        if self.is_selecting() {
            Ok(())
        } else {
            Err(ModeError::AlreadySubmitted)
        }
    }
}
