//! Error types for the leveling engine

/// Leveling engine errors
#[derive(Debug, thiserror::Error)]
pub enum LevelingError {
    /// A supplied table violates the ordering invariants
    #[error("invalid leveling table: {0}")]
    InvalidTable(String),

    /// Config snapshot could not be serialized
    #[error("config serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
