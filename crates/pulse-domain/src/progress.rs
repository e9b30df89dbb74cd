//! Progress records
//!
//! One participant's accumulated counters and derived completion state
//! against one goal. The percentage invariant lives here so that every
//! writer (the ledger today, a persistent backend tomorrow) recomputes
//! it the same way:
//!
//! `percent = round(100 * Σ min(current_i, required_i) / Σ required_i)`
//!
//! Each criterion's contribution is capped at its own requirement, so
//! over-completing one criterion never compensates for another.
//! Completion is monotonic: once reached it never reverts.

use crate::goal::{Criterion, Goal};
use crate::ids::{CriterionId, GoalId, ParticipantId};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One participant's advancement toward one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// The goal being tracked
    pub goal_id: GoalId,
    /// The participant advancing
    pub participant_id: ParticipantId,
    /// Current accumulated count per criterion, in criteria order
    pub counters: IndexMap<CriterionId, u32>,
    /// Overall percentage, 0-100
    pub percent: u8,
    /// Whether the goal has been completed (sticky)
    pub completed: bool,
    /// When tracking started
    pub started_at: DateTime<Utc>,
    /// When completion was first reached; set once, never cleared
    pub completed_at: Option<DateTime<Utc>>,
}

impl Progress {
    /// Start tracking a goal: one zero counter per criterion
    #[must_use]
    pub fn start(goal: &Goal, participant_id: ParticipantId) -> Self {
        Self {
            goal_id: goal.id,
            participant_id,
            counters: goal.criteria.iter().map(|c| (c.id, 0)).collect(),
            percent: 0,
            completed: false,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Set a criterion counter to an absolute value and recompute
    ///
    /// Callers supply the new total, not an increment. Returns the
    /// updated percentage.
    pub fn set_counter(&mut self, criterion_id: CriterionId, value: u32, criteria: &[Criterion]) -> u8 {
        self.counters.insert(criterion_id, value);
        self.recompute(criteria)
    }

    /// Recompute the percentage and, if newly at 100, mark completion
    ///
    /// Completion never flips back: a recompute that lands below 100
    /// leaves `completed` and `completed_at` untouched.
    pub fn recompute(&mut self, criteria: &[Criterion]) -> u8 {
        self.percent = completion_percent(criteria, &self.counters);
        if self.percent >= 100 && !self.completed {
            self.completed = true;
            self.completed_at = Some(Utc::now());
        }
        self.percent
    }
}

/// The percentage invariant, as a pure function
///
/// Counters missing from the map count as zero. An empty criteria list
/// yields 0 rather than dividing by zero; the catalog refuses to store
/// such goals. 100 is reported only when every criterion meets its
/// requirement — rounding alone can never produce it.
#[must_use]
pub fn completion_percent(criteria: &[Criterion], counters: &IndexMap<CriterionId, u32>) -> u8 {
    let total: u64 = criteria.iter().map(|c| u64::from(c.required)).sum();
    if total == 0 {
        return 0;
    }
    let capped: u64 = criteria
        .iter()
        .map(|c| {
            let current = counters.get(&c.id).copied().unwrap_or(0);
            u64::from(current.min(c.required))
        })
        .sum();
    if capped >= total {
        return 100;
    }
    let percent = (100.0 * capped as f64 / total as f64).round() as u8;
    percent.min(99)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackedAction;
    use proptest::prelude::*;

    fn criteria(required: &[u32]) -> Vec<Criterion> {
        required
            .iter()
            .map(|&r| Criterion::new(TrackedAction::MoodCheckIn, r, "unit"))
            .collect()
    }

    fn counters_for(criteria: &[Criterion], values: &[u32]) -> IndexMap<CriterionId, u32> {
        criteria.iter().zip(values).map(|(c, &v)| (c.id, v)).collect()
    }

    #[test]
    fn percent_rounds_half_up() {
        // 5 of 5 plus 0 of 3: 100 * 5/8 = 62.5 -> 63
        let crit = criteria(&[5, 3]);
        let counts = counters_for(&crit, &[5, 0]);
        assert_eq!(completion_percent(&crit, &counts), 63);
    }

    #[test]
    fn overshoot_is_capped_per_criterion() {
        let crit = criteria(&[5, 3]);
        let counts = counters_for(&crit, &[500, 0]);
        assert_eq!(completion_percent(&crit, &counts), 63);
    }

    #[test]
    fn missing_counters_count_as_zero() {
        let crit = criteria(&[5, 3]);
        assert_eq!(completion_percent(&crit, &IndexMap::new()), 0);
    }

    #[test]
    fn empty_criteria_yield_zero() {
        assert_eq!(completion_percent(&[], &IndexMap::new()), 0);
    }

    #[test]
    fn near_complete_never_rounds_to_hundred() {
        // 199 of 200 would round to 100; exactness demands 99.
        let crit = criteria(&[200]);
        let counts = counters_for(&crit, &[199]);
        assert_eq!(completion_percent(&crit, &counts), 99);
    }

    #[test]
    fn completion_is_sticky() {
        let crit = criteria(&[2]);
        let goal_id = GoalId::new();
        let mut progress = Progress {
            goal_id,
            participant_id: ParticipantId::new("emp-1"),
            counters: counters_for(&crit, &[0]),
            percent: 0,
            completed: false,
            started_at: Utc::now(),
            completed_at: None,
        };

        progress.set_counter(crit[0].id, 2, &crit);
        assert!(progress.completed);
        let completed_at = progress.completed_at;
        assert!(completed_at.is_some());

        // An absolute set back below the requirement lowers the
        // percentage but not the completion flag or timestamp.
        progress.set_counter(crit[0].id, 1, &crit);
        assert_eq!(progress.percent, 50);
        assert!(progress.completed);
        assert_eq!(progress.completed_at, completed_at);
    }

    proptest! {
        /// Reporting beyond a criterion's requirement never changes its
        /// contribution to the percentage.
        #[test]
        fn overshoot_never_raises_percent(req in 1u32..50, extra in 0u32..1000, other in 1u32..50) {
            let crit = criteria(&[req, other]);
            let at_requirement = counters_for(&crit, &[req, 0]);
            let beyond = counters_for(&crit, &[req + extra, 0]);
            prop_assert_eq!(
                completion_percent(&crit, &at_requirement),
                completion_percent(&crit, &beyond)
            );
        }

        /// Exactly 100 iff every criterion meets its requirement.
        #[test]
        fn hundred_iff_all_met(reqs in proptest::collection::vec(1u32..20, 1..6), shortfall_idx in 0usize..6) {
            let crit = criteria(&reqs);
            let full = counters_for(&crit, &reqs);
            prop_assert_eq!(completion_percent(&crit, &full), 100);

            if shortfall_idx < reqs.len() {
                let mut short = reqs.clone();
                short[shortfall_idx] -= 1;
                let counts = counters_for(&crit, &short);
                prop_assert!(completion_percent(&crit, &counts) < 100);
            }
        }
    }
}
