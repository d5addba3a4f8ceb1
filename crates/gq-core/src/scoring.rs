//! Assignment scoring.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::Serialize;

/// Result of scoring one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    /// Keys whose assigned value matched the ground truth.
    pub correct: u32,
    /// Size of the key universe that was scored.
    pub total: u32,
}

impl Score {
    /// A score with nothing correct yet.
    pub fn zero(total: u32) -> Self {
        Self { correct: 0, total }
    }

    /// Percentage correct, rounded half up.
    pub fn percentage(&self) -> u32 {
        percentage(self.correct, self.total)
    }

    /// Whether every key was correct.
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} ({}%)", self.correct, self.total, self.percentage())
    }
}

/// `round(correct / total * 100)` with halves rounded up; 0 for an empty universe.
pub fn percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (correct, total) = (u64::from(correct), u64::from(total));
    ((correct * 200 + total) / (total * 2)) as u32
}

/// Count the keys of `universe` whose assignment equals `truth(key)`.
///
/// The whole universe is walked, so a key missing from `assignments` counts
/// as wrong. A key whose truth is unknown never scores.
pub fn score<K, V, I, F>(universe: I, assignments: &HashMap<K, V>, mut truth: F) -> Score
where
    K: Eq + Hash,
    V: PartialEq,
    I: IntoIterator<Item = K>,
    F: FnMut(&K) -> Option<V>,
{
    let mut correct = 0;
    let mut total = 0;
    for key in universe {
        total += 1;
        let hit = match (assignments.get(&key), truth(&key)) {
            (Some(assigned), Some(expected)) => *assigned == expected,
            _ => false,
        };
        if hit {
            correct += 1;
        }
    }
    Score { correct, total }
}
