//! Goal store abstraction
//!
//! The catalog never owns ambient global state: it works against a
//! [`GoalStore`] injected by the embedding application, whose lifetime
//! the application controls. [`MemoryGoalStore`] is the in-process
//! implementation; a persistent backend implements the same trait.

use dashmap::DashMap;
use pulse_domain::{Goal, GoalId};

/// Storage seam for goal definitions
///
/// Implementations return owned clones; records are small and callers
/// must never observe a partially written goal.
pub trait GoalStore: Send + Sync {
    /// Fetch one goal by id
    fn get(&self, id: GoalId) -> Option<Goal>;

    /// Insert or replace a goal
    fn put(&self, goal: Goal);

    /// Remove a goal; `true` if it existed
    fn remove(&self, id: GoalId) -> bool;

    /// Snapshot of all stored goals, in unspecified order
    fn list(&self) -> Vec<Goal>;
}

/// In-memory goal store backed by a concurrent map
#[derive(Debug, Default)]
pub struct MemoryGoalStore {
    goals: DashMap<GoalId, Goal>,
}

impl MemoryGoalStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored goals
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Whether the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

impl GoalStore for MemoryGoalStore {
    fn get(&self, id: GoalId) -> Option<Goal> {
        self.goals.get(&id).map(|g| g.clone())
    }

    fn put(&self, goal: Goal) {
        self.goals.insert(goal.id, goal);
    }

    fn remove(&self, id: GoalId) -> bool {
        self.goals.remove(&id).is_some()
    }

    fn list(&self) -> Vec<Goal> {
        self.goals.iter().map(|entry| entry.clone()).collect()
    }
}
