//! Phasekit Statevector Simulator
//!
//! Exact simulation of [`phasekit_ir::Circuit`]s, used to check what
//! operations do to a state rather than which gates they emit.
//!
//! Every standard gate is supported, and so is an arbitrary set of control
//! qubits on any instruction.
//!
//! # Performance
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 10 | ~16 KB |
//! | 15 | ~512 KB |
//! | 20 | ~16 MB |
//!
//! # Example
//!
//! ```rust
//! use phasekit_ir::{Circuit, QubitId};
//! use phasekit_sim::{Simulator, Statevector};
//!
//! let mut circuit = Circuit::with_size("flip", 2);
//! circuit.x(QubitId(1)).unwrap();
//!
//! let sv = Simulator::new().run(&circuit).unwrap();
//! assert_eq!(sv.most_likely(), 0b10);
//! assert!(sv.approx_eq(&Statevector::basis_state(2, 0b10), 1e-12));
//! ```

pub mod error;
mod simulator;
mod statevector;

pub use error::{SimError, SimResult};
pub use simulator::{Simulator, SimulatorConfig};
pub use statevector::Statevector;
