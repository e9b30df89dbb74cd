//! Goal definitions
//!
//! A goal is an organizational objective composed of one or more
//! criteria, scoped to a target population, an organizational scope and
//! a period. Goals carry governance state (status, manager activation)
//! and audit stamps; per-participant advancement lives in the progress
//! ledger, not here.

use crate::ids::{CriterionId, GoalId, ParticipantId, TeamId};
use crate::TrackedAction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Goal classification, also the recommendation index key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    /// Day-to-day engagement with the platform
    Engagement,
    /// Personal and professional development
    Development,
    /// Leadership practice
    Leadership,
}

/// Who a goal is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPopulation {
    /// Scored collaborators
    Collaborators,
    /// Managers (non-scored population with their own goals)
    Managers,
}

/// Organizational scope of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalScope {
    /// Tracked per participant
    Individual,
    /// Tracked for a whole team
    Team,
}

/// Measurement period of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPeriod {
    Weekly,
    Monthly,
    Quarterly,
}

/// Governance status of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Being authored, not yet visible
    Draft,
    /// Published and joinable
    Active,
    /// Retired by an administrator
    Inactive,
    /// Closed after its period ended
    Completed,
}

/// One measurable unit of a goal: an action and a minimum quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    /// Criterion identifier, unique within the catalog
    pub id: CriterionId,
    /// The platform action this criterion counts
    pub action: TrackedAction,
    /// Minimum quantity required (always > 0 for stored goals)
    pub required: u32,
    /// Human-readable description
    pub description: String,
}

impl Criterion {
    /// Create a criterion with a fresh id
    #[inline]
    #[must_use]
    pub fn new(action: TrackedAction, required: u32, description: impl Into<String>) -> Self {
        Self {
            id: CriterionId::new(),
            action,
            required,
            description: description.into(),
        }
    }
}

/// A goal definition, owned by the goal catalog
///
/// Activation sets are append-only: once a manager turns a goal on for a
/// team there is no operation that turns it back off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Identity, immutable once created
    pub id: GoalId,
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
    /// Ordered, non-empty criteria list
    pub criteria: Vec<Criterion>,
    /// Governance status
    pub status: GoalStatus,
    /// Whether managers may activate this goal for their own teams
    pub manager_activatable: bool,
    /// Managers who have activated this goal
    pub activated_managers: BTreeSet<ParticipantId>,
    /// Teams this goal is currently active for
    pub active_teams: BTreeSet<TeamId>,
    /// Creator identity
    pub created_by: ParticipantId,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last updater identity
    pub updated_by: Option<ParticipantId>,
    /// Last update time
    pub updated_at: Option<DateTime<Utc>>,
    /// Most recent activator identity
    pub activated_by: Option<ParticipantId>,
    /// Most recent activation time
    pub activated_at: Option<DateTime<Utc>>,
}

impl Goal {
    /// Look up a criterion by id
    #[inline]
    #[must_use]
    pub fn criterion(&self, id: CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    /// Sum of required quantities across all criteria
    ///
    /// The denominator of the completion percentage; > 0 for any goal
    /// the catalog accepted.
    #[inline]
    #[must_use]
    pub fn total_required(&self) -> u64 {
        self.criteria.iter().map(|c| u64::from(c.required)).sum()
    }

    /// Whether a manager may currently self-activate this goal
    #[inline]
    #[must_use]
    pub fn accepts_team_activation(&self) -> bool {
        self.status == GoalStatus::Active && self.manager_activatable
    }
}
