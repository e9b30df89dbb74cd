//! Pulse Domain - shared model for the goal & progress engine
//!
//! Defines the vocabulary every other crate speaks:
//! - Identifier newtypes for goals, criteria, participants and teams
//! - The closed set of tracked platform actions
//! - Goal definitions with criteria, governance status and audit stamps
//! - Progress records and the completion-percentage invariant
//! - The role gate deciding who participates in goal/XP mechanics
//!
//! Everything here is plain data plus pure functions; stores and
//! policies live in the crates that own them.

#![warn(unreachable_pub)]

pub mod action;
pub mod goal;
pub mod ids;
pub mod progress;
pub mod role;

pub use action::TrackedAction;
pub use goal::{
    Criterion, Goal, GoalCategory, GoalPeriod, GoalScope, GoalStatus, TargetPopulation,
};
pub use ids::{CriterionId, GoalId, ParticipantId, TeamId};
pub use progress::{completion_percent, Progress};
pub use role::{OrgRole, RoleGate};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
