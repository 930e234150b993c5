//! Simulation error types.

use thiserror::Error;

use undertaker_core::error::ConfigError;
use undertaker_core::types::EntityId;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A required entity is gone while the session is still active.
    #[error("missing {what} ({entity:?})")]
    MissingReference { what: &'static str, entity: EntityId },
    #[error("tick duration must be finite and non-negative, got {0}")]
    InvalidElapsed(f64),
}
