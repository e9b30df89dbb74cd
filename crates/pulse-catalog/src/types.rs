//! Catalog input types
//!
//! Drafts describe what a caller wants stored; the catalog mints
//! identifiers and audit stamps on acceptance. Patches carry only the
//! fields being changed.

use pulse_domain::{
    GoalCategory, GoalPeriod, GoalScope, GoalStatus, TargetPopulation, TrackedAction,
};
use serde::{Deserialize, Serialize};

/// One criterion as authored, before an id is minted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionDraft {
    /// The platform action to count
    pub action: TrackedAction,
    /// Minimum required quantity
    pub required: u32,
    /// Human-readable description
    pub description: String,
}

impl CriterionDraft {
    /// Create a criterion draft
    #[inline]
    #[must_use]
    pub fn new(action: TrackedAction, required: u32, description: impl Into<String>) -> Self {
        Self {
            action,
            required,
            description: description.into(),
        }
    }
}

/// A goal definition as authored by an administrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalDraft {
    /// Display name
    pub name: String,
    /// Description shown to participants
    pub description: String,
    /// Classification
    pub category: GoalCategory,
    /// Who the goal is aimed at
    pub population: TargetPopulation,
    /// Individual or team scope
    pub scope: GoalScope,
    /// Measurement period
    pub period: GoalPeriod,
    /// Criteria; must be non-empty to be accepted
    pub criteria: Vec<CriterionDraft>,
    /// Creation status; only `Draft` or `Active` are accepted
    pub status: GoalStatus,
    /// Whether managers may activate this goal for their own teams
    pub manager_activatable: bool,
}

impl GoalDraft {
    /// Start a draft with catalog defaults: individual weekly draft goal
    /// for collaborators, not manager-activatable, no criteria yet
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: GoalCategory,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            population: TargetPopulation::Collaborators,
            scope: GoalScope::Individual,
            period: GoalPeriod::Weekly,
            criteria: Vec::new(),
            status: GoalStatus::Draft,
            manager_activatable: false,
        }
    }

    /// Append a criterion
    #[inline]
    #[must_use]
    pub fn with_criterion(
        mut self,
        action: TrackedAction,
        required: u32,
        description: impl Into<String>,
    ) -> Self {
        self.criteria.push(CriterionDraft::new(action, required, description));
        self
    }

    /// With creation status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = status;
        self
    }

    /// With target population
    #[inline]
    #[must_use]
    pub fn with_population(mut self, population: TargetPopulation) -> Self {
        self.population = population;
        self
    }

    /// With organizational scope
    #[inline]
    #[must_use]
    pub fn with_scope(mut self, scope: GoalScope) -> Self {
        self.scope = scope;
        self
    }

    /// With measurement period
    #[inline]
    #[must_use]
    pub fn with_period(mut self, period: GoalPeriod) -> Self {
        self.period = period;
        self
    }

    /// Allow managers to activate this goal for their teams
    #[inline]
    #[must_use]
    pub fn manager_activatable(mut self, allowed: bool) -> Self {
        self.manager_activatable = allowed;
        self
    }
}

/// A partial update to a stored goal
///
/// `None` fields are left untouched. Replacing criteria re-mints their
/// identifiers; the facade refuses criteria changes once any progress
/// exists against the goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalPatch {
    /// New display name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New classification
    pub category: Option<GoalCategory>,
    /// New target population
    pub population: Option<TargetPopulation>,
    /// New scope
    pub scope: Option<GoalScope>,
    /// New period
    pub period: Option<GoalPeriod>,
    /// New governance status
    pub status: Option<GoalStatus>,
    /// New manager-activation flag
    pub manager_activatable: Option<bool>,
    /// Replacement criteria list
    pub criteria: Option<Vec<CriterionDraft>>,
}

impl GoalPatch {
    /// Empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name
    #[inline]
    #[must_use]
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    #[inline]
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the governance status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the manager-activation flag
    #[inline]
    #[must_use]
    pub fn with_manager_activatable(mut self, allowed: bool) -> Self {
        self.manager_activatable = Some(allowed);
        self
    }

    /// Replace the criteria list
    #[inline]
    #[must_use]
    pub fn with_criteria(mut self, criteria: Vec<CriterionDraft>) -> Self {
        self.criteria = Some(criteria);
        self
    }

    /// Whether this patch would change the criteria list
    #[inline]
    #[must_use]
    pub fn touches_criteria(&self) -> bool {
        self.criteria.is_some()
    }
}
