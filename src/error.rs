//! Error types for motion control.

use thiserror::Error;

/// Errors surfaced by motion-control operations.
#[derive(Debug, Error)]
pub enum ControlError {
    /// Action name not present in the agent's action space.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// `move_forward_by` accepts non-negative distances only.
    #[error("negative distance: {0}")]
    NegativeDistance(f64),

    /// A nominal actuation amount that cannot drive discretization
    /// (must be finite and positive).
    #[error("bad actuation amount {amount} for action `{action}`")]
    BadActuation { action: String, amount: f64 },

    /// Failure reported by the external simulator while actuating.
    #[error("agent failure: {0}")]
    Agent(String),
}

pub type Result<T> = std::result::Result<T, ControlError>;
