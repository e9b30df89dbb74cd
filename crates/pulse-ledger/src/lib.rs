//! Pulse Ledger - per-participant progress tracking
//!
//! The read-write side of goal participation:
//! - Lazy, idempotent start of tracking per (goal, participant) pair
//! - Absolute criterion counter updates with percentage recomputation
//! - Monotonic completion detection
//! - Per-participant queries and the goal-board join
//!
//! Goal definitions are read from the shared catalog; the role gate is
//! consulted before every mutation.

#![warn(unreachable_pub)]

pub mod error;
pub mod ledger;
pub mod store;
pub mod types;

pub use error::LedgerError;
pub use ledger::ProgressLedger;
pub use store::{MemoryProgressStore, ProgressStore};
pub use types::{GoalStanding, ProgressSnapshot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
