//! Pulse Leveling - XP, levels and rewards
//!
//! Converts accumulated experience points into a level and a
//! classification tier, and tracked actions into XP/stars rewards:
//! - Configurable tier table (level, threshold, classification)
//! - Configurable per-action reward table with a manager weight
//! - Administrative load/save/reset through an injected config store,
//!   degrading to built-in defaults on corruption
//!
//! Independent of the catalog and ledger: goal completion is just one
//! of the events the embedding application converts into XP.

#![warn(unreachable_pub)]

pub mod config;
pub mod engine;
pub mod error;
pub mod store;

pub use config::{Classification, LevelTier, LevelingConfig, Reward};
pub use engine::{LevelStanding, LevelingEngine};
pub use error::LevelingError;
pub use store::{ConfigStore, MemoryConfigStore, LEVELING_CONFIG_KEY};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
