//! Error types for register arithmetic.

use phasekit_ir::IrError;
use thiserror::Error;

/// Errors produced by register preparation and arithmetic operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArithError {
    /// A classical value does not fit in the register.
    #[error("Value {value} does not fit in a {width}-qubit register")]
    Overflow {
        /// The value that was requested.
        value: u64,
        /// Register width in qubits.
        width: usize,
    },

    /// Error while emitting gates.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] IrError),
}

/// Result type for register arithmetic.
pub type ArithResult<T> = Result<T, ArithError>;
