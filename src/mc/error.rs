//! Error type for the simulation engine.

use crate::types::{ConfigError, DomainError};
use thiserror::Error;

/// Simulation failure: either invalid market inputs or invalid tuning
/// parameters.
///
/// Operations that can only fail on inputs return [`DomainError`]
/// directly; this composite covers operations (such as the convergence
/// sweep) that also validate tuning parameters.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Invalid market inputs.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Invalid tuning parameter.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
