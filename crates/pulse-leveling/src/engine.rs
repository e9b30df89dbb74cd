//! Leveling engine
//!
//! Maps an experience-point total to a level and classification, and a
//! tracked action to its XP/stars reward. Pure lookups over the
//! configured tables; the only state is the configuration itself.

use crate::config::{Classification, LevelingConfig, Reward};
use crate::error::LevelingError;
use crate::store::{ConfigStore, LEVELING_CONFIG_KEY};
use pulse_domain::TrackedAction;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A level and its classification, as derived from an XP total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStanding {
    /// Level number
    pub level: u32,
    /// Mastery tier for display
    pub classification: Classification,
}

/// Converts XP totals into levels and actions into rewards
#[derive(Debug, Clone)]
pub struct LevelingEngine {
    config: LevelingConfig,
}

impl LevelingEngine {
    /// Engine over the built-in default tables
    #[inline]
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: LevelingConfig::default(),
        }
    }

    /// Engine over a caller-supplied configuration
    ///
    /// # Errors
    /// `LevelingError::InvalidTable` if the configuration violates the
    /// ordering invariants.
    pub fn from_config(config: LevelingConfig) -> Result<Self, LevelingError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine from a stored override, falling back to defaults
    ///
    /// A missing snapshot means defaults. A malformed or invalid
    /// snapshot also means defaults: configuration corruption degrades,
    /// it never breaks callers.
    #[must_use]
    pub fn load(store: &dyn ConfigStore) -> Self {
        match store.get(LEVELING_CONFIG_KEY) {
            None => Self::with_defaults(),
            Some(value) => match serde_json::from_value::<LevelingConfig>(value) {
                Ok(config) => match Self::from_config(config) {
                    Ok(engine) => {
                        debug!("leveling config loaded from store");
                        engine
                    }
                    Err(err) => {
                        warn!(%err, "stored leveling config invalid, using defaults");
                        Self::with_defaults()
                    }
                },
                Err(err) => {
                    warn!(%err, "stored leveling config unreadable, using defaults");
                    Self::with_defaults()
                }
            },
        }
    }

    /// Persist this engine's configuration as the stored override
    ///
    /// # Errors
    /// `LevelingError::Serialize` if the snapshot cannot be encoded.
    pub fn save(&self, store: &dyn ConfigStore) -> Result<(), LevelingError> {
        let value = serde_json::to_value(&self.config)?;
        store.put(LEVELING_CONFIG_KEY, value);
        info!("leveling config saved");
        Ok(())
    }

    /// Drop any stored override and return a defaults engine
    pub fn reset(store: &dyn ConfigStore) -> Self {
        if store.remove(LEVELING_CONFIG_KEY) {
            info!("leveling config reset to defaults");
        }
        Self::with_defaults()
    }

    /// The active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &LevelingConfig {
        &self.config
    }

    /// Reward for one action
    ///
    /// An action missing from the reward table earns [`Reward::ZERO`]
    /// rather than an error: unrecognized actions must never break the
    /// producers reporting them. The manager weight applies when the
    /// acting participant holds the manager role, flooring to integers.
    #[must_use]
    pub fn reward_for(&self, action: TrackedAction, is_manager: bool) -> Reward {
        let base = self
            .config
            .rewards
            .get(&action)
            .copied()
            .unwrap_or(Reward::ZERO);
        if is_manager {
            base.weighted(self.config.manager_weight)
        } else {
            base
        }
    }

    /// Level and classification for an XP total
    ///
    /// The highest tier whose threshold is at or below `total_xp`.
    /// Validation anchors the table at 0 XP, so every total maps to a
    /// tier.
    #[must_use]
    pub fn level_for(&self, total_xp: u32) -> LevelStanding {
        let tier = self
            .config
            .tiers
            .iter()
            .take_while(|t| t.min_xp <= total_xp)
            .last()
            .unwrap_or(&self.config.tiers[0]);
        LevelStanding {
            level: tier.level,
            classification: tier.classification,
        }
    }

    /// XP threshold for a level; 0 when the level is not configured
    ///
    /// The "no requirement" reading: asking about an unknown level is
    /// not an error.
    #[must_use]
    pub fn threshold_for(&self, level: u32) -> u32 {
        self.config
            .tiers
            .iter()
            .find(|t| t.level == level)
            .map_or(0, |t| t.min_xp)
    }
}

impl Default for LevelingEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
