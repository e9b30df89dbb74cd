//! Role gate
//!
//! Decides whether an organizational role participates in goal/XP
//! mechanics at all. Every mutating operation in the progress ledger
//! consults this gate before touching state.
//!
//! Which roles are excluded is configuration, not hardcoded policy: the
//! default gate admits only collaborators, but an embedding application
//! may widen or narrow the eligible set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Organizational roles that reach this engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgRole {
    /// Scored participant of the platform
    Collaborator,
    /// Manages teams and activates goals; not scored by default
    Manager,
    /// Administers the system; never scored by default
    SuperAdmin,
}

impl OrgRole {
    /// Whether this role manages goals rather than being scored by them
    #[inline]
    #[must_use]
    pub fn is_managerial(&self) -> bool {
        matches!(self, OrgRole::Manager | OrgRole::SuperAdmin)
    }
}

impl std::fmt::Display for OrgRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrgRole::Collaborator => "collaborator",
            OrgRole::Manager => "manager",
            OrgRole::SuperAdmin => "super_admin",
        };
        f.write_str(name)
    }
}

/// Pure predicate over roles: does this role accrue goal progress and XP?
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGate {
    eligible: BTreeSet<OrgRole>,
}

impl RoleGate {
    /// Gate admitting an explicit set of roles
    #[inline]
    #[must_use]
    pub fn with_eligible(eligible: impl IntoIterator<Item = OrgRole>) -> Self {
        Self {
            eligible: eligible.into_iter().collect(),
        }
    }

    /// Whether `role` participates in goal/XP mechanics
    #[inline]
    #[must_use]
    pub fn is_eligible(&self, role: OrgRole) -> bool {
        self.eligible.contains(&role)
    }

    /// The configured eligible set
    #[inline]
    #[must_use]
    pub fn eligible_roles(&self) -> &BTreeSet<OrgRole> {
        &self.eligible
    }
}

impl Default for RoleGate {
    /// Only collaborators are scored; managerial roles run the system
    fn default() -> Self {
        Self::with_eligible([OrgRole::Collaborator])
    }
}
