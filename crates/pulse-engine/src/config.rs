//! Engine configuration

use pulse_domain::OrgRole;
use pulse_leveling::LevelingConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Configuration for [`crate::PulseEngine`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Roles that accrue goal progress and XP
    pub eligible_roles: BTreeSet<OrgRole>,
    /// Leveling tables the engine starts with
    pub leveling: LevelingConfig,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an explicit eligible role set
    #[inline]
    #[must_use]
    pub fn with_eligible_roles(mut self, roles: impl IntoIterator<Item = OrgRole>) -> Self {
        self.eligible_roles = roles.into_iter().collect();
        self
    }

    /// With a leveling configuration
    #[inline]
    #[must_use]
    pub fn with_leveling(mut self, leveling: LevelingConfig) -> Self {
        self.leveling = leveling;
        self
    }
}

impl Default for EngineConfig {
    /// Collaborators participate; default leveling tables
    fn default() -> Self {
        Self {
            eligible_roles: BTreeSet::from([OrgRole::Collaborator]),
            leveling: LevelingConfig::default(),
        }
    }
}
