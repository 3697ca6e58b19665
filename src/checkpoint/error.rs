//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while saving or resuming a calculator session
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding the checkpoint as JSON or bincode failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The bytes or text are not a checkpoint
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The saved state or configuration breaks an invariant
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(String),
}
