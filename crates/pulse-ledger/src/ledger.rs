//! Progress ledger
//!
//! Tracks one participant's standing against one goal:
//! - Lazily starts a record the first time progress is reported
//! - Applies absolute criterion counters and recomputes the percentage
//! - Flips completion exactly once, the first time 100% is reached
//! - Answers per-participant queries and the goal-board join
//!
//! Every mutation consults the role gate first: goal mechanics are
//! invisible to non-participating roles even if a record somehow
//! exists for them.
//!
//! Records for deleted goals become tombstones: still returned by
//! reads, rejected by writes with a not-found error.

use crate::error::LedgerError;
use crate::store::ProgressStore;
use crate::types::{GoalStanding, ProgressSnapshot};
use pulse_catalog::{GoalCatalog, GoalStore};
use pulse_domain::{CriterionId, GoalId, OrgRole, ParticipantId, Progress, RoleGate};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns per-participant progress records against catalog goals
#[derive(Debug)]
pub struct ProgressLedger<S, P> {
    catalog: Arc<GoalCatalog<S>>,
    store: P,
    gate: RoleGate,
}

impl<S: GoalStore, P: ProgressStore> ProgressLedger<S, P> {
    /// Create a ledger over an injected store, reading criterion
    /// definitions from the shared catalog
    #[inline]
    #[must_use]
    pub fn new(catalog: Arc<GoalCatalog<S>>, store: P, gate: RoleGate) -> Self {
        Self { catalog, store, gate }
    }

    /// Start tracking a goal for a participant
    ///
    /// Idempotent: if a record already exists for the pair it is
    /// returned unchanged, so a duplicate start never resets counters.
    ///
    /// # Errors
    /// - `LedgerError::GoalNotFound` if the goal is unknown
    pub fn start_progress(
        &self,
        goal_id: GoalId,
        participant_id: ParticipantId,
    ) -> Result<Progress, LedgerError> {
        if let Some(existing) = self.store.get(goal_id, &participant_id) {
            return Ok(existing);
        }

        let goal = self
            .catalog
            .goal(goal_id)
            .ok_or(LedgerError::GoalNotFound(goal_id))?;

        let record = Progress::start(&goal, participant_id);
        debug!(goal_id = %goal_id, participant = %record.participant_id, "progress started");
        self.store.put(record.clone());
        Ok(record)
    }

    /// Report a criterion's new accumulated count
    ///
    /// The value is an absolute set, not an increment: callers are
    /// responsible for computing the new total. The percentage is
    /// recomputed from the goal's criteria, and the first time it
    /// reaches 100 the completion flag and timestamp are set; both are
    /// sticky thereafter.
    ///
    /// # Errors
    /// - `LedgerError::IneligibleRole` if the role gate rejects the
    ///   participant; state is untouched
    /// - `LedgerError::GoalNotFound` if the goal is unknown (including
    ///   goals deleted after tracking began)
    /// - `LedgerError::ProgressNotFound` if tracking was never started
    /// - `LedgerError::UnknownCriterion` if the criterion is not on
    ///   the goal
    pub fn report(
        &self,
        goal_id: GoalId,
        participant_id: &ParticipantId,
        role: OrgRole,
        criterion_id: CriterionId,
        new_value: u32,
    ) -> Result<ProgressSnapshot, LedgerError> {
        if !self.gate.is_eligible(role) {
            warn!(participant = %participant_id, %role, "progress report rejected by role gate");
            return Err(LedgerError::IneligibleRole(role));
        }

        let goal = self
            .catalog
            .goal(goal_id)
            .ok_or(LedgerError::GoalNotFound(goal_id))?;
        if goal.criterion(criterion_id).is_none() {
            return Err(LedgerError::UnknownCriterion {
                goal: goal_id,
                criterion: criterion_id,
            });
        }

        let mut snapshot: Option<ProgressSnapshot> = None;
        let mut was_completed = false;
        let found = self.store.modify(goal_id, participant_id, &mut |record| {
            was_completed = record.completed;
            record.set_counter(criterion_id, new_value, &goal.criteria);
            snapshot = Some(ProgressSnapshot::from(&*record));
        });

        // snapshot is Some exactly when the store found a record
        let snapshot = match snapshot {
            Some(snapshot) if found => snapshot,
            _ => {
                return Err(LedgerError::ProgressNotFound {
                    goal: goal_id,
                    participant: participant_id.clone(),
                })
            }
        };
        if snapshot.completed && !was_completed {
            info!(goal_id = %goal_id, participant = %participant_id, "goal completed");
        } else {
            debug!(
                goal_id = %goal_id,
                participant = %participant_id,
                percent = snapshot.percent,
                "progress reported"
            );
        }
        Ok(snapshot)
    }

    /// All progress records for a participant, tombstones included
    #[must_use]
    pub fn progress_for(&self, participant_id: &ParticipantId) -> Vec<Progress> {
        self.store.for_participant(participant_id)
    }

    /// Number of completed goals for a participant
    #[must_use]
    pub fn completed_count(&self, participant_id: &ParticipantId) -> usize {
        self.store
            .for_participant(participant_id)
            .iter()
            .filter(|r| r.completed)
            .count()
    }

    /// Whether any participant has progress against a goal
    ///
    /// The catalog freeze check: criteria become immutable once this
    /// returns true.
    #[must_use]
    pub fn has_progress_against(&self, goal_id: GoalId) -> bool {
        !self.store.for_goal(goal_id).is_empty()
    }

    /// A participant's goal board
    ///
    /// Every active goal visible to `role`, annotated with the
    /// participant's percentage and completion flag; goals not yet
    /// started show zero percent and no completion.
    #[must_use]
    pub fn board_for(&self, participant_id: &ParticipantId, role: OrgRole) -> Vec<GoalStanding> {
        self.catalog
            .goals_visible_to(role)
            .into_iter()
            .map(|goal| match self.store.get(goal.id, participant_id) {
                Some(record) => GoalStanding {
                    percent: record.percent,
                    completed: record.completed,
                    started: true,
                    goal,
                },
                None => GoalStanding {
                    percent: 0,
                    completed: false,
                    started: false,
                    goal,
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryProgressStore;
    use pretty_assertions::assert_eq;
    use pulse_catalog::{GoalDraft, MemoryGoalStore};
    use pulse_domain::{Goal, GoalCategory, GoalStatus, TrackedAction};

    fn setup() -> (Arc<GoalCatalog<MemoryGoalStore>>, ProgressLedger<MemoryGoalStore, MemoryProgressStore>, Goal) {
        let catalog = Arc::new(GoalCatalog::new(MemoryGoalStore::new(), RoleGate::default()));
        let ledger = ProgressLedger::new(
            Arc::clone(&catalog),
            MemoryProgressStore::new(),
            RoleGate::default(),
        );
        let goal = catalog
            .create_goal(
                GoalDraft::new("Engage", "Check in and post", GoalCategory::Engagement)
                    .with_criterion(TrackedAction::MoodCheckIn, 5, "five check-ins")
                    .with_criterion(TrackedAction::FeedPost, 3, "three posts")
                    .with_status(GoalStatus::Active),
                ParticipantId::new("admin-1"),
            )
            .unwrap();
        (catalog, ledger, goal)
    }

    #[test]
    fn start_is_idempotent() {
        let (_catalog, ledger, goal) = setup();
        let emp = ParticipantId::new("emp-1");

        let first = ledger.start_progress(goal.id, emp.clone()).unwrap();
        let second = ledger.start_progress(goal.id, emp.clone()).unwrap();

        assert_eq!(first.started_at, second.started_at);
        assert_eq!(ledger.progress_for(&emp).len(), 1);
    }

    #[test]
    fn start_unknown_goal_fails() {
        let (_catalog, ledger, _goal) = setup();
        let err = ledger
            .start_progress(GoalId::new(), ParticipantId::new("emp-1"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn report_recomputes_percentage() {
        let (_catalog, ledger, goal) = setup();
        let emp = ParticipantId::new("emp-1");
        ledger.start_progress(goal.id, emp.clone()).unwrap();

        let snapshot = ledger
            .report(goal.id, &emp, OrgRole::Collaborator, goal.criteria[0].id, 5)
            .unwrap();

        // 5 of 5 plus 0 of 3: round(100 * 5/8) = 63
        assert_eq!(snapshot.percent, 63);
        assert!(!snapshot.completed);
    }

    #[test]
    fn report_completes_and_stamps_once() {
        let (_catalog, ledger, goal) = setup();
        let emp = ParticipantId::new("emp-1");
        ledger.start_progress(goal.id, emp.clone()).unwrap();

        ledger
            .report(goal.id, &emp, OrgRole::Collaborator, goal.criteria[0].id, 5)
            .unwrap();
        let done = ledger
            .report(goal.id, &emp, OrgRole::Collaborator, goal.criteria[1].id, 3)
            .unwrap();

        assert_eq!(done.percent, 100);
        assert!(done.completed);
        let completed_at = done.completed_at.unwrap();

        // a later report below requirement lowers percent, not completion
        let after = ledger
            .report(goal.id, &emp, OrgRole::Collaborator, goal.criteria[1].id, 0)
            .unwrap();
        assert_eq!(after.percent, 63);
        assert!(after.completed);
        assert_eq!(after.completed_at, Some(completed_at));

        assert_eq!(ledger.completed_count(&emp), 1);
    }

    #[test]
    fn report_rejected_by_role_gate_mutates_nothing() {
        let (_catalog, ledger, goal) = setup();
        let mgr = ParticipantId::new("mgr-1");
        ledger.start_progress(goal.id, mgr.clone()).unwrap();

        let err = ledger
            .report(goal.id, &mgr, OrgRole::Manager, goal.criteria[0].id, 99)
            .unwrap_err();
        assert!(err.is_policy_rejection());

        let record = &ledger.progress_for(&mgr)[0];
        assert_eq!(record.percent, 0);
        assert_eq!(record.counters[&goal.criteria[0].id], 0);
    }

    #[test]
    fn report_without_start_fails() {
        let (_catalog, ledger, goal) = setup();
        let err = ledger
            .report(
                goal.id,
                &ParticipantId::new("emp-9"),
                OrgRole::Collaborator,
                goal.criteria[0].id,
                1,
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::ProgressNotFound { .. }));
    }

    #[test]
    fn report_unknown_criterion_fails() {
        let (_catalog, ledger, goal) = setup();
        let emp = ParticipantId::new("emp-1");
        ledger.start_progress(goal.id, emp.clone()).unwrap();

        let err = ledger
            .report(goal.id, &emp, OrgRole::Collaborator, CriterionId::new(), 1)
            .unwrap_err();
        assert!(matches!(err, LedgerError::UnknownCriterion { .. }));
    }

    #[test]
    fn deleted_goal_tombstones_progress() {
        let (catalog, ledger, goal) = setup();
        let emp = ParticipantId::new("emp-1");
        ledger.start_progress(goal.id, emp.clone()).unwrap();

        assert!(catalog.delete_goal(goal.id));

        // still readable
        assert_eq!(ledger.progress_for(&emp).len(), 1);
        // no longer writable
        let err = ledger
            .report(goal.id, &emp, OrgRole::Collaborator, goal.criteria[0].id, 1)
            .unwrap_err();
        assert!(matches!(err, LedgerError::GoalNotFound(_)));
    }

    #[test]
    fn board_defaults_unstarted_goals() {
        let (catalog, ledger, goal) = setup();
        let emp = ParticipantId::new("emp-1");

        let other = catalog
            .create_goal(
                GoalDraft::new("Learn", "Finish a course", GoalCategory::Development)
                    .with_criterion(TrackedAction::TrainingCompleted, 1, "one course")
                    .with_status(GoalStatus::Active),
                ParticipantId::new("admin-1"),
            )
            .unwrap();

        ledger.start_progress(goal.id, emp.clone()).unwrap();
        ledger
            .report(goal.id, &emp, OrgRole::Collaborator, goal.criteria[0].id, 5)
            .unwrap();

        let board = ledger.board_for(&emp, OrgRole::Collaborator);
        assert_eq!(board.len(), 2);

        let started = board.iter().find(|s| s.goal.id == goal.id).unwrap();
        assert_eq!(started.percent, 63);
        assert!(started.started);

        let fresh = board.iter().find(|s| s.goal.id == other.id).unwrap();
        assert_eq!(fresh.percent, 0);
        assert!(!fresh.completed);
        assert!(!fresh.started);
    }

    #[test]
    fn board_hidden_from_ineligible_roles() {
        let (_catalog, ledger, _goal) = setup();
        let board = ledger.board_for(&ParticipantId::new("root"), OrgRole::SuperAdmin);
        assert!(board.is_empty());
    }
}
