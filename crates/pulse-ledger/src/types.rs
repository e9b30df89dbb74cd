//! Ledger read models

use chrono::{DateTime, Utc};
use pulse_domain::{Goal, GoalId, ParticipantId, Progress};
use serde::{Deserialize, Serialize};

/// The state of one progress record after an update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// The goal being tracked
    pub goal_id: GoalId,
    /// The participant advancing
    pub participant_id: ParticipantId,
    /// Overall percentage, 0-100
    pub percent: u8,
    /// Whether the goal has been completed
    pub completed: bool,
    /// When completion was first reached
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<&Progress> for ProgressSnapshot {
    fn from(progress: &Progress) -> Self {
        Self {
            goal_id: progress.goal_id,
            participant_id: progress.participant_id.clone(),
            percent: progress.percent,
            completed: progress.completed,
            completed_at: progress.completed_at,
        }
    }
}

/// One row of a participant's goal board
///
/// The join between "active goals visible to this role" and the
/// participant's own records. Goals the participant has not started
/// default to zero percent, not completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalStanding {
    /// The goal definition
    pub goal: Goal,
    /// Current percentage, 0 when not started
    pub percent: u8,
    /// Completion flag, false when not started
    pub completed: bool,
    /// Whether a progress record exists yet
    pub started: bool,
}
