//! Leveling configuration
//!
//! Two externally editable tables drive the leveling engine:
//! - The tier table: (level, XP threshold, classification) tuples,
//!   monotonically increasing in both level and threshold
//! - The reward table: XP and stars awarded per tracked action, with a
//!   weight multiplier for acting managers
//!
//! Administrators recalibrate both without a code change; the built-in
//! defaults below are the fallback whenever no valid override is
//! stored.

use crate::error::LevelingError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use pulse_domain::TrackedAction;
use serde::{Deserialize, Serialize};

/// Mastery tier shown next to a level
///
/// A closed, ordered set: the derived ordering must stay consistent
/// with the threshold ordering of any table that uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Beginner,
    Intermediate,
    Advanced,
    Explorer,
    Master,
    Legend,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Classification::Beginner => "Beginner",
            Classification::Intermediate => "Intermediate",
            Classification::Advanced => "Advanced",
            Classification::Explorer => "Explorer",
            Classification::Master => "Master",
            Classification::Legend => "Legend",
        };
        f.write_str(name)
    }
}

/// XP and stars awarded for one action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reward {
    /// Experience points
    pub xp: u32,
    /// Secondary currency
    pub stars: u32,
}

impl Reward {
    /// No reward; what unrecognized actions earn
    pub const ZERO: Reward = Reward { xp: 0, stars: 0 };

    /// Create a reward
    #[inline]
    #[must_use]
    pub const fn new(xp: u32, stars: u32) -> Self {
        Self { xp, stars }
    }

    /// Apply a weight multiplier, flooring both fields to integers
    #[inline]
    #[must_use]
    pub fn weighted(self, weight: f64) -> Self {
        Self {
            xp: (f64::from(self.xp) * weight).floor() as u32,
            stars: (f64::from(self.stars) * weight).floor() as u32,
        }
    }
}

/// One row of the tier table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTier {
    /// Level number
    pub level: u32,
    /// XP required to hold this level
    pub min_xp: u32,
    /// Mastery tier shown for this level
    pub classification: Classification,
}

impl LevelTier {
    /// Create a tier row
    #[inline]
    #[must_use]
    pub const fn new(level: u32, min_xp: u32, classification: Classification) -> Self {
        Self {
            level,
            min_xp,
            classification,
        }
    }
}

/// The full leveling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelingConfig {
    /// Tier table, ascending in level and threshold, anchored at 0 XP
    pub tiers: Vec<LevelTier>,
    /// Reward per tracked action; missing actions earn nothing
    pub rewards: IndexMap<TrackedAction, Reward>,
    /// Multiplier applied when the acting participant is a manager
    pub manager_weight: f64,
}

impl LevelingConfig {
    /// Validate the ordering invariants
    ///
    /// # Errors
    /// `LevelingError::InvalidTable` when the tier table is empty, is
    /// not anchored at 0 XP, is not strictly increasing in level and
    /// threshold, or the manager weight is not a finite non-negative
    /// number.
    pub fn validate(&self) -> Result<(), LevelingError> {
        if self.tiers.is_empty() {
            return Err(LevelingError::InvalidTable("tier table is empty".to_string()));
        }
        if self.tiers[0].min_xp != 0 {
            return Err(LevelingError::InvalidTable(
                "lowest tier must start at 0 XP".to_string(),
            ));
        }
        for pair in self.tiers.windows(2) {
            if pair[1].level <= pair[0].level || pair[1].min_xp <= pair[0].min_xp {
                return Err(LevelingError::InvalidTable(format!(
                    "tiers must increase in level and threshold (level {} after {})",
                    pair[1].level, pair[0].level
                )));
            }
            if pair[1].classification < pair[0].classification {
                return Err(LevelingError::InvalidTable(format!(
                    "classification order broken at level {}",
                    pair[1].level
                )));
            }
        }
        if !self.manager_weight.is_finite() || self.manager_weight < 0.0 {
            return Err(LevelingError::InvalidTable(format!(
                "manager weight {} is not a finite non-negative number",
                self.manager_weight
            )));
        }
        Ok(())
    }
}

impl Default for LevelingConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

/// Built-in configuration used when no override is stored
static DEFAULT_CONFIG: Lazy<LevelingConfig> = Lazy::new(|| LevelingConfig {
    tiers: vec![
        LevelTier::new(1, 0, Classification::Beginner),
        LevelTier::new(2, 100, Classification::Beginner),
        LevelTier::new(3, 250, Classification::Intermediate),
        LevelTier::new(4, 500, Classification::Intermediate),
        LevelTier::new(5, 850, Classification::Advanced),
        LevelTier::new(6, 1300, Classification::Advanced),
        LevelTier::new(7, 1900, Classification::Advanced),
        LevelTier::new(8, 2700, Classification::Explorer),
        LevelTier::new(9, 3700, Classification::Explorer),
        LevelTier::new(10, 4900, Classification::Master),
        LevelTier::new(11, 6300, Classification::Master),
        LevelTier::new(12, 8000, Classification::Legend),
    ],
    rewards: IndexMap::from([
        (TrackedAction::MoodCheckIn, Reward::new(5, 1)),
        (TrackedAction::FeedPost, Reward::new(10, 2)),
        (TrackedAction::Like, Reward::new(1, 0)),
        (TrackedAction::Comment, Reward::new(3, 1)),
        (TrackedAction::FeedbackSent, Reward::new(15, 3)),
        (TrackedAction::SurveyResponse, Reward::new(20, 4)),
        (TrackedAction::TrainingCompleted, Reward::new(50, 10)),
        (TrackedAction::LearningTrack, Reward::new(30, 6)),
        (TrackedAction::EventParticipation, Reward::new(25, 5)),
        (TrackedAction::RecurringInteraction, Reward::new(8, 2)),
    ]),
    manager_weight: 1.0,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        LevelingConfig::default().validate().unwrap();
    }

    #[test]
    fn default_covers_every_action() {
        let config = LevelingConfig::default();
        for action in TrackedAction::all() {
            assert!(config.rewards.contains_key(&action), "missing {action}");
        }
    }

    #[test]
    fn weighted_reward_floors() {
        let reward = Reward::new(5, 1);
        assert_eq!(reward.weighted(1.0), Reward::new(5, 1));
        assert_eq!(reward.weighted(2.0), Reward::new(10, 2));
        assert_eq!(reward.weighted(1.5), Reward::new(7, 1));
        assert_eq!(reward.weighted(0.0), Reward::ZERO);
    }

    #[test]
    fn validation_rejects_unanchored_table() {
        let mut config = LevelingConfig::default();
        config.tiers[0].min_xp = 50;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_non_increasing_thresholds() {
        let mut config = LevelingConfig::default();
        config.tiers[3].min_xp = config.tiers[2].min_xp;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_classification_regression() {
        let mut config = LevelingConfig::default();
        config.tiers[5].classification = Classification::Beginner;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_bad_weight() {
        let mut config = LevelingConfig::default();
        config.manager_weight = f64::NAN;
        assert!(config.validate().is_err());
        config.manager_weight = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = LevelingConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        let back: LevelingConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config, back);
    }
}
