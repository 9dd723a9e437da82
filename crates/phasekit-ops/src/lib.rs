//! Capability-tagged quantum operations and conjugation combinators.
//!
//! An operation acts on a target of generic type `T` by emitting
//! instructions into a [`phasekit_ir::Circuit`]. Optional abilities are
//! declared by implementing [`Adjoint`] (invertible) and [`Controlled`]
//! (applicable on control qubits); [`ControlledAdjoint`] combines both.
//!
//! [`Conjugation`] builds `outer → inner → adjoint(outer)` and derives its own
//! capabilities from `inner`. A missing capability is a compile error:
//!
//! ```compile_fail
//! use phasekit_ir::{Circuit, QubitId};
//! use phasekit_ops::{from_fn, Conjugation, OpResult, Operation};
//!
//! struct Flip;
//!
//! impl Operation<QubitId> for Flip {
//!     fn apply(&self, c: &mut Circuit, q: &QubitId) -> OpResult<()> {
//!         c.x(*q)?;
//!         Ok(())
//!     }
//! }
//!
//! // `Flip` is not invertible, so it cannot be an outer operation.
//! let _ = Conjugation::with(Flip, from_fn("id", |_: &mut Circuit, _: &QubitId| Ok(())));
//! ```
//!
//! Declaring the adjoint is all it takes to make the same composition build:
//!
//! ```rust
//! use phasekit_ir::{Circuit, QubitId};
//! use phasekit_ops::{from_fn, Adjoint, Conjugation, OpResult, Operation};
//!
//! struct Flip;
//!
//! impl Operation<QubitId> for Flip {
//!     fn apply(&self, c: &mut Circuit, q: &QubitId) -> OpResult<()> {
//!         c.x(*q)?;
//!         Ok(())
//!     }
//! }
//!
//! impl Adjoint<QubitId> for Flip {
//!     fn apply_adjoint(&self, c: &mut Circuit, q: &QubitId) -> OpResult<()> {
//!         self.apply(c, q)
//!     }
//! }
//!
//! let op = Conjugation::with(Flip, from_fn("id", |_: &mut Circuit, _: &QubitId| Ok(())));
//! let mut circuit = Circuit::with_size("flip", 1);
//! op.apply(&mut circuit, &QubitId(0)).unwrap();
//! assert_eq!(circuit.num_ops(), 2);
//! ```
//!
//! For operations chosen at runtime, [`DynOperation`] carries its
//! [`Capabilities`] as data and [`dynamic::conjugate`] checks them when the
//! composite is built.
//!
//! # Example
//!
//! ```rust
//! use phasekit_ir::{Circuit, QubitId};
//! use phasekit_ops::{Adjoint, Conjugation, OpResult, Operation};
//!
//! struct Hadamard;
//!
//! impl Operation<QubitId> for Hadamard {
//!     fn apply(&self, circuit: &mut Circuit, q: &QubitId) -> OpResult<()> {
//!         circuit.h(*q)?;
//!         Ok(())
//!     }
//! }
//!
//! impl Adjoint<QubitId> for Hadamard {
//!     fn apply_adjoint(&self, circuit: &mut Circuit, q: &QubitId) -> OpResult<()> {
//!         self.apply(circuit, q)
//!     }
//! }
//!
//! struct Phase;
//!
//! impl Operation<QubitId> for Phase {
//!     fn apply(&self, circuit: &mut Circuit, q: &QubitId) -> OpResult<()> {
//!         circuit.s(*q)?;
//!         Ok(())
//!     }
//! }
//!
//! impl Adjoint<QubitId> for Phase {
//!     fn apply_adjoint(&self, circuit: &mut Circuit, q: &QubitId) -> OpResult<()> {
//!         circuit.sdg(*q)?;
//!         Ok(())
//!     }
//! }
//!
//! let op = Conjugation::with_a(Hadamard, Phase);
//! let mut circuit = Circuit::with_size("conjugated", 1);
//! op.apply(&mut circuit, &QubitId(0)).unwrap();
//! op.apply_adjoint(&mut circuit, &QubitId(0)).unwrap();
//!
//! let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
//! assert_eq!(names, ["h", "s", "h", "h", "sdg", "h"]);
//! ```

pub mod capability;
pub mod conjugation;
pub mod deprecated;
pub mod dynamic;
pub mod error;
pub mod operation;

pub use capability::{Capabilities, Capability};
pub use conjugation::{
    Conjugation, apply_with, apply_with_adjoint, apply_with_controlled,
    apply_with_controlled_adjoint,
};
pub use deprecated::Deprecated;
pub use dynamic::DynOperation;
pub use error::{OpError, OpResult};
pub use operation::{
    Adjoint, Adjointed, Controlled, ControlledAdjoint, ControlledOn, FnOperation, Operation,
    adjoint, controlled_on, from_fn,
};
