//! Application error type.

use thiserror::Error;

use undertaker_core::error::ConfigError;
use undertaker_sim::SimError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("simulation failed: {0}")]
    Sim(#[from] SimError),
    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,
    #[error("failed to encode summary: {0}")]
    Summary(#[from] serde_json::Error),
}
