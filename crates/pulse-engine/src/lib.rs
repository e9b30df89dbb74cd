//! Pulse Engine - the engagement engine facade
//!
//! The single entry point for embedding applications:
//! - Goal authoring, governance and manager activation (catalog)
//! - Per-participant progress tracking and completion (ledger)
//! - XP-to-level mapping and action rewards (leveling)
//! - Role gating over all of it
//!
//! # Example
//!
//! ```rust
//! use pulse_engine::prelude::*;
//!
//! let engine = PulseEngine::in_memory();
//!
//! let goal = engine
//!     .create_goal(
//!         GoalDraft::new("Daily pulse", "Check in every day", GoalCategory::Engagement)
//!             .with_criterion(TrackedAction::MoodCheckIn, 5, "five check-ins")
//!             .with_status(GoalStatus::Active),
//!         ParticipantId::new("admin-1"),
//!     )
//!     .unwrap();
//!
//! let emp = ParticipantId::new("emp-1");
//! engine.start_progress(goal.id, emp.clone()).unwrap();
//! let snapshot = engine
//!     .report_progress(goal.id, &emp, OrgRole::Collaborator, goal.criteria[0].id, 5)
//!     .unwrap();
//! assert!(snapshot.completed);
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod engine;
pub mod error;

// Re-exports for convenience
pub use config::EngineConfig;
pub use engine::PulseEngine;
pub use error::PulseError;

pub use pulse_catalog::{
    recommendations_for, CatalogError, CriterionDraft, GoalCatalog, GoalDraft, GoalPatch,
    GoalStore, GoalTemplate, MemoryGoalStore,
};
pub use pulse_domain::{
    completion_percent, Criterion, CriterionId, Goal, GoalCategory, GoalId, GoalPeriod,
    GoalScope, GoalStatus, OrgRole, ParticipantId, Progress, RoleGate, TargetPopulation, TeamId,
    TrackedAction,
};
pub use pulse_ledger::{
    GoalStanding, LedgerError, MemoryProgressStore, ProgressLedger, ProgressSnapshot,
    ProgressStore,
};
pub use pulse_leveling::{
    Classification, ConfigStore, LevelStanding, LevelTier, LevelingConfig, LevelingEngine,
    LevelingError, MemoryConfigStore, Reward, LEVELING_CONFIG_KEY,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the Pulse engine
    pub use crate::{
        Classification, EngineConfig, Goal, GoalCategory, GoalDraft, GoalId, GoalPatch,
        GoalStatus, OrgRole, ParticipantId, PulseEngine, PulseError, TeamId, TrackedAction,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
