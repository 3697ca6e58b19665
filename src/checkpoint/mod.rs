//! Checkpoint and resume for calculator sessions.
//!
//! A checkpoint captures the interaction state and configuration of a live
//! session so it can be resumed in another calculator, possibly in another
//! process. The press log is never part of a checkpoint.

use crate::config::CalculatorConfig;
use crate::core::InteractionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a calculator session.
///
/// # Example
///
/// ```rust
/// use abacus::checkpoint::Checkpoint;
/// use abacus::config::CalculatorConfig;
/// use abacus::core::InteractionState;
///
/// let checkpoint = Checkpoint::new(InteractionState::new(), CalculatorConfig::default());
/// let json = checkpoint.to_json().unwrap();
/// let restored = Checkpoint::from_json(&json).unwrap();
/// assert_eq!(restored.id, checkpoint.id);
/// assert_eq!(restored.state, checkpoint.state);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Interaction state at checkpoint time
    pub state: InteractionState,

    /// Configuration of the session
    pub config: CalculatorConfig,
}

impl Checkpoint {
    pub fn new(state: InteractionState, config: CalculatorConfig) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state,
            config,
        }
    }

    /// Check version, configuration and state invariants.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        self.config
            .validate()
            .map_err(|e| CheckpointError::ValidationFailed(e.to_string()))?;
        self.state
            .validate()
            .map_err(|e| CheckpointError::ValidationFailed(e.to_string()))?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize and validate a binary checkpoint.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}
