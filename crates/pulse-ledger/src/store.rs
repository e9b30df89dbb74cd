//! Progress store abstraction
//!
//! Progress records are keyed by (goal, participant). The in-memory
//! implementation mutates under the map's shard lock, which makes
//! [`ProgressStore::modify`] an atomic read-modify-write; a persistent
//! multi-process backend must provide the same guarantee (transaction
//! or optimistic-concurrency check), or concurrent reports can lose
//! updates.

use dashmap::DashMap;
use pulse_domain::{GoalId, ParticipantId, Progress};

/// Storage seam for progress records
pub trait ProgressStore: Send + Sync {
    /// Fetch the record for a goal/participant pair
    fn get(&self, goal: GoalId, participant: &ParticipantId) -> Option<Progress>;

    /// Insert or replace a record
    fn put(&self, record: Progress);

    /// Mutate the record for a pair in place, atomically
    ///
    /// Returns `false` without calling `apply` when no record exists.
    fn modify(
        &self,
        goal: GoalId,
        participant: &ParticipantId,
        apply: &mut dyn FnMut(&mut Progress),
    ) -> bool;

    /// All records for one participant
    fn for_participant(&self, participant: &ParticipantId) -> Vec<Progress>;

    /// All records against one goal
    fn for_goal(&self, goal: GoalId) -> Vec<Progress>;
}

/// In-memory progress store backed by a concurrent map
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    records: DashMap<(GoalId, ParticipantId), Progress>,
}

impl MemoryProgressStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn get(&self, goal: GoalId, participant: &ParticipantId) -> Option<Progress> {
        self.records
            .get(&(goal, participant.clone()))
            .map(|r| r.clone())
    }

    fn put(&self, record: Progress) {
        self.records
            .insert((record.goal_id, record.participant_id.clone()), record);
    }

    fn modify(
        &self,
        goal: GoalId,
        participant: &ParticipantId,
        apply: &mut dyn FnMut(&mut Progress),
    ) -> bool {
        match self.records.get_mut(&(goal, participant.clone())) {
            Some(mut record) => {
                apply(&mut record);
                true
            }
            None => false,
        }
    }

    fn for_participant(&self, participant: &ParticipantId) -> Vec<Progress> {
        let mut records: Vec<Progress> = self
            .records
            .iter()
            .filter(|entry| &entry.key().1 == participant)
            .map(|entry| entry.clone())
            .collect();
        records.sort_by_key(|r| r.goal_id);
        records
    }

    fn for_goal(&self, goal: GoalId) -> Vec<Progress> {
        self.records
            .iter()
            .filter(|entry| entry.key().0 == goal)
            .map(|entry| entry.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use indexmap::IndexMap;

    fn record(goal: GoalId, participant: &str) -> Progress {
        Progress {
            goal_id: goal,
            participant_id: ParticipantId::new(participant),
            counters: IndexMap::new(),
            percent: 0,
            completed: false,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    #[test]
    fn keyed_by_goal_and_participant() {
        let store = MemoryProgressStore::new();
        let goal = GoalId::new();
        store.put(record(goal, "emp-1"));
        store.put(record(goal, "emp-2"));
        store.put(record(GoalId::new(), "emp-1"));

        assert_eq!(store.len(), 3);
        assert_eq!(store.for_participant(&ParticipantId::new("emp-1")).len(), 2);
        assert_eq!(store.for_goal(goal).len(), 2);
    }

    #[test]
    fn modify_skips_missing_records() {
        let store = MemoryProgressStore::new();
        let goal = GoalId::new();
        let emp = ParticipantId::new("emp-1");

        let mut called = false;
        assert!(!store.modify(goal, &emp, &mut |_| called = true));
        assert!(!called);

        store.put(record(goal, "emp-1"));
        assert!(store.modify(goal, &emp, &mut |r| r.percent = 50));
        assert_eq!(store.get(goal, &emp).unwrap().percent, 50);
    }
}
