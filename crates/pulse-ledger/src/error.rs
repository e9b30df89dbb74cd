//! Error types for the progress ledger

use pulse_domain::{CriterionId, GoalId, OrgRole, ParticipantId};

/// Progress ledger errors
///
/// Not-found, unknown-criterion and policy rejections are distinct
/// variants so callers can tell "nothing to update" apart from
/// "rejected by the role gate".
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Operation referenced a goal that does not exist
    #[error("goal not found: {0}")]
    GoalNotFound(GoalId),

    /// No progress record exists for this goal/participant pair
    #[error("no progress for participant {participant} on goal {goal}")]
    ProgressNotFound {
        /// The referenced goal
        goal: GoalId,
        /// The participant with no record
        participant: ParticipantId,
    },

    /// The named criterion is not part of the referenced goal
    #[error("criterion {criterion} is not part of goal {goal}")]
    UnknownCriterion {
        /// The referenced goal
        goal: GoalId,
        /// The unknown criterion
        criterion: CriterionId,
    },

    /// The participant's role does not take part in goal mechanics
    #[error("role {0} does not participate in goal mechanics")]
    IneligibleRole(OrgRole),
}

impl LedgerError {
    /// Check if this is a not-found error (goal or progress record)
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GoalNotFound(_) | Self::ProgressNotFound { .. })
    }

    /// Check if this is a role-gate rejection
    #[inline]
    #[must_use]
    pub fn is_policy_rejection(&self) -> bool {
        matches!(self, Self::IneligibleRole(_))
    }
}
