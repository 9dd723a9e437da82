//! Error types for operation composition.

use thiserror::Error;

use crate::capability::Capability;

/// Errors produced while composing or applying operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OpError {
    /// An operation was used in a form it does not declare.
    ///
    /// Non-retryable: pick a different combinator variant or supply an
    /// operation that declares the capability.
    #[error("Operation '{operation}' does not support the {capability} capability")]
    CapabilityMismatch {
        /// Name of the offending operation.
        operation: String,
        /// The capability that was required.
        capability: Capability,
    },

    /// Emitting an instruction failed.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] phasekit_ir::IrError),
}

/// Result type for operation application.
pub type OpResult<T> = Result<T, OpError>;
