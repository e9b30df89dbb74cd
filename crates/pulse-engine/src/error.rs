//! Aggregated error type for the engine facade

use pulse_catalog::CatalogError;
use pulse_domain::GoalId;
use pulse_ledger::LedgerError;
use pulse_leveling::LevelingError;

/// Main engine error type
#[derive(Debug, thiserror::Error)]
pub enum PulseError {
    /// Goal catalog operation failed
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Progress ledger operation failed
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Leveling configuration operation failed
    #[error("leveling error: {0}")]
    Leveling(#[from] LevelingError),

    /// Criteria can no longer change: participants have progress
    #[error("criteria of goal {0} are frozen while progress exists")]
    CriteriaFrozen(GoalId),
}

impl PulseError {
    /// Check if this is a not-found condition from either store
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Catalog(err) => err.is_not_found(),
            Self::Ledger(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this is a role-gate rejection
    #[inline]
    #[must_use]
    pub fn is_policy_rejection(&self) -> bool {
        matches!(self, Self::Ledger(err) if err.is_policy_rejection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_domain::OrgRole;

    #[test]
    fn conversions_preserve_classification() {
        let err: PulseError = CatalogError::GoalNotFound(GoalId::new()).into();
        assert!(err.is_not_found());

        let err: PulseError = LedgerError::IneligibleRole(OrgRole::SuperAdmin).into();
        assert!(err.is_policy_rejection());
        assert!(!err.is_not_found());

        assert!(!PulseError::CriteriaFrozen(GoalId::new()).is_not_found());
    }
}
