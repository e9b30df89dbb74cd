//! Pulse Catalog - goal definitions and governance
//!
//! The write side of goal management:
//! - Accepts authored drafts into validated, audited goal records
//! - Governs status transitions and manager activation for teams
//! - Answers visibility queries filtered through the role gate
//! - Serves the static recommendation index for goal authoring
//!
//! Per-participant advancement is the progress ledger's concern; this
//! crate only owns the definitions.

#![warn(unreachable_pub)]

pub mod catalog;
pub mod error;
pub mod recommend;
pub mod store;
pub mod types;

pub use catalog::GoalCatalog;
pub use error::CatalogError;
pub use recommend::{recommendations_for, GoalTemplate};
pub use store::{GoalStore, MemoryGoalStore};
pub use types::{CriterionDraft, GoalDraft, GoalPatch};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
