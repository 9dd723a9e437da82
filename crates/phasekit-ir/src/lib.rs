//! Phasekit Circuit Intermediate Representation
//!
//! This crate is the execution substrate of Phasekit: operations do not touch
//! amplitudes, they emit [`Instruction`]s into a [`Circuit`], which a backend
//! (for instance the `phasekit-sim` statevector simulator) executes later.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a qubit, [`Qubit`] adds register membership
//! - **Gates**: [`StandardGate`], a small unitary gate set with exact adjoints
//! - **Instructions**: [`Instruction`], a gate plus operands plus optional control
//!   qubits. Control lines are how an operation is applied conditionally.
//! - **Circuit**: [`Circuit`], the builder operations emit into
//!
//! # Example
//!
//! ```rust
//! use phasekit_ir::{Circuit, Instruction, QubitId, StandardGate};
//!
//! let mut circuit = Circuit::with_size("controlled_phase", 2);
//! circuit.h(QubitId(0)).unwrap();
//!
//! // P(π/2) on q1, applied only where q0 is |1⟩.
//! let gated = Instruction::single_qubit_gate(StandardGate::P(std::f64::consts::FRAC_PI_2), QubitId(1))
//!     .with_controls([QubitId(0)]);
//! circuit.apply(gated).unwrap();
//!
//! assert_eq!(circuit.num_ops(), 2);
//! assert_eq!(circuit.num_controlled_ops(), 1);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `Sdg`, `T`, `Tdg` | 1 | Clifford+T phase gates |
//! | `Rz`, `P` | 1 | Z rotation and phase rotation |
//! | `CX`, `CZ`, `CP` | 2 | Controlled-NOT, controlled-Z, controlled phase |
//! | `Swap` | 2 | SWAP gate |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Gate, StandardGate};
pub use instruction::Instruction;
pub use qubit::{Qubit, QubitId};
