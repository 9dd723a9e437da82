//! Phase-domain integer arithmetic on quantum registers.
//!
//! Registers are ordered qubit lists read as unsigned integers
//! ([`LittleEndian`], [`BigEndian`]), or as their Fourier-basis counterpart
//! ([`PhaseLittleEndian`]). Adding a classical constant in the phase basis
//! takes one rotation per qubit and no ancillas:
//!
//! | Operation | Target | Gates |
//! |-----------|--------|-------|
//! | [`increment_phase_by_integer`] | [`PhaseLittleEndian`] | `n` phase rotations |
//! | [`increment_by_integer`] | [`LittleEndian`] | QFT, rotations, inverse QFT |
//! | [`increment_by_integer_be`] | [`BigEndian`] | same, cells reversed |
//!
//! All of them are adjoint and controlled.
//!
//! # Example
//!
//! ```rust
//! use phasekit_arith::{LittleEndian, increment_by_integer};
//! use phasekit_ir::Circuit;
//! use phasekit_ops::{Adjoint, Operation};
//!
//! let mut circuit = Circuit::new("add");
//! let x = LittleEndian::allocate(&mut circuit, "x", 3);
//! x.prepare(&mut circuit, 5).unwrap();
//!
//! // |5⟩ → |0⟩ (mod 8), then back.
//! increment_by_integer(3).apply(&mut circuit, &x).unwrap();
//! increment_by_integer(3).apply_adjoint(&mut circuit, &x).unwrap();
//! ```

pub mod error;
pub mod increment;
pub mod legacy;
pub mod qft;
pub mod register;

pub use error::{ArithError, ArithResult};
pub use increment::{
    BigEndianAdapter, IncrementByInteger, PhaseIncrement, increment_by_integer,
    increment_by_integer_be, increment_phase_by_integer,
};
pub use qft::{OnPhaseRegister, QuantumFourierTransform};
pub use register::{BigEndian, LittleEndian, PhaseLittleEndian};
