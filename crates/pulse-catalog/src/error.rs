//! Error types for the goal catalog

use pulse_domain::GoalId;

/// Goal catalog errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Operation referenced a goal that does not exist
    #[error("goal not found: {0}")]
    GoalNotFound(GoalId),

    /// A goal definition violates an invariant
    #[error("invalid goal definition: {0}")]
    Validation(String),
}

impl CatalogError {
    /// Check if this is a not-found error
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GoalNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::Validation("empty criteria".to_string());
        assert!(err.to_string().contains("invalid goal definition"));
        assert!(!err.is_not_found());
        assert!(CatalogError::GoalNotFound(GoalId::new()).is_not_found());
    }
}
