//! Error types for the simulator.

use thiserror::Error;

/// Errors produced while simulating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The circuit is wider than the configured limit.
    #[error("Circuit has {num_qubits} qubits but the simulator is limited to {max_qubits}")]
    TooManyQubits {
        /// Width of the circuit.
        num_qubits: usize,
        /// Configured maximum.
        max_qubits: u32,
    },

    /// The initial state and the circuit disagree on the number of qubits.
    #[error("Initial state has {state} qubits, circuit has {circuit}")]
    WidthMismatch {
        /// Width of the initial state.
        state: usize,
        /// Width of the circuit.
        circuit: usize,
    },
}

/// Result type for simulation.
pub type SimResult<T> = Result<T, SimError>;
