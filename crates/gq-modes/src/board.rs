//! Assignment board: a key universe mapped onto capacity-limited targets.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use gq_core::scoring::{Score, score};

use crate::error::{ModeError, ModeResult};

/// The per-session assignment map plus the rules that guard it.
///
/// Every key comes from a fixed universe and each target holds at most
/// `capacity` keys. A rejected assignment leaves the map unchanged.
#[derive(Debug, Clone)]
pub struct AssignmentBoard<K, V> {
    universe: Vec<K>,
    capacity: usize,
    assignments: HashMap<K, V>,
}

impl<K, V> AssignmentBoard<K, V>
where
    K: Clone + Eq + Hash + Display,
    V: Clone + PartialEq + Display,
{
    /// Create an empty board over `universe` with `capacity` keys per target.
    pub fn new(universe: Vec<K>, capacity: usize) -> Self {
        Self {
            universe,
            capacity,
            assignments: HashMap::new(),
        }
    }

    /// Place `key` on `value`, moving it if it was elsewhere.
    pub fn assign(&mut self, key: K, value: V) -> ModeResult<()> {
        if !self.universe.contains(&key) {
            return Err(ModeError::UnknownKey(key.to_string()));
        }
        if self.assignments.get(&key) == Some(&value) {
            return Ok(());
        }
        if self.is_full(&value) {
            return Err(ModeError::TargetFull {
                target: value.to_string(),
                capacity: self.capacity,
            });
        }
        self.assignments.insert(key, value);
        Ok(())
    }

    /// Take `key` off the board, returning where it was.
    pub fn unassign(&mut self, key: &K) -> Option<V> {
        self.assignments.remove(key)
    }

    /// Where `key` currently sits.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.assignments.get(key)
    }

    /// Number of keys on `value`.
    pub fn occupants(&self, value: &V) -> usize {
        self.assignments.values().filter(|v| *v == value).count()
    }

    /// Keys on `value`, in universe order.
    pub fn keys_on(&self, value: &V) -> Vec<&K> {
        self.universe
            .iter()
            .filter(|k| self.assignments.get(*k) == Some(value))
            .collect()
    }

    /// Whether `value` has no room left.
    pub fn is_full(&self, value: &V) -> bool {
        self.occupants(value) >= self.capacity
    }

    /// Keys without a value, in universe order.
    pub fn unassigned(&self) -> impl Iterator<Item = &K> {
        self.universe
            .iter()
            .filter(|k| !self.assignments.contains_key(*k))
    }

    /// Number of keys with a value.
    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether every key in the universe has a value.
    pub fn is_complete(&self) -> bool {
        self.universe.iter().all(|k| self.assignments.contains_key(k))
    }

    /// The key universe.
    pub fn universe(&self) -> &[K] {
        &self.universe
    }

    /// Keys each target may hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The raw assignment map.
    pub fn assignments(&self) -> &HashMap<K, V> {
        &self.assignments
    }

    /// Empty the board.
    pub fn clear(&mut self) {
        self.assignments.clear();
    }

    /// Score the board over the full universe.
    pub fn score_against<F>(&self, truth: F) -> Score
    where
        F: FnMut(&K) -> Option<V>,
    {
        score(self.universe.iter().cloned(), &self.assignments, truth)
    }

    /// Error describing how far the board is from complete.
    pub(crate) fn incomplete(&self) -> ModeError {
        ModeError::Incomplete {
            assigned: self.assigned_count(),
            total: self.universe.len(),
        }
    }
}
