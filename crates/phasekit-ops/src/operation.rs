//! Capability-tagged operations.
//!
//! An operation acts on a target of type `T` by emitting instructions into a
//! [`Circuit`]. Which forms it supports is declared by the traits it
//! implements:
//!
//! | Trait | Form |
//! |-------|------|
//! | [`Operation`] | plain application |
//! | [`Adjoint`] | inverse application |
//! | [`Controlled`] | application gated on control qubits |
//! | [`ControlledAdjoint`] | inverse application gated on control qubits |
//!
//! A declared capability is a promise: implementations must emit the exact
//! adjoint or the exact controlled form, never an approximation.

use phasekit_ir::{Circuit, QubitId};

use crate::error::OpResult;

/// An action on a target of type `T`.
pub trait Operation<T: ?Sized> {
    /// Name used in logs and error messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Emit this operation into `circuit`.
    fn apply(&self, circuit: &mut Circuit, target: &T) -> OpResult<()>;
}

/// An operation that can be inverted.
pub trait Adjoint<T: ?Sized>: Operation<T> {
    /// Emit the inverse of this operation.
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &T) -> OpResult<()>;
}

/// An operation that can be applied conditionally on control qubits.
pub trait Controlled<T: ?Sized>: Operation<T> {
    /// Emit this operation so that it takes effect only where every qubit in
    /// `controls` is `|1⟩`.
    fn apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()>;
}

/// An operation that is both invertible and controllable.
pub trait ControlledAdjoint<T: ?Sized>: Adjoint<T> + Controlled<T> {
    /// Emit the inverse of this operation, gated on `controls`.
    fn apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()>;
}

impl<T: ?Sized, O: Operation<T> + ?Sized> Operation<T> for &O {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        (**self).apply(circuit, target)
    }
}

impl<T: ?Sized, O: Adjoint<T> + ?Sized> Adjoint<T> for &O {
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        (**self).apply_adjoint(circuit, target)
    }
}

impl<T: ?Sized, O: Controlled<T> + ?Sized> Controlled<T> for &O {
    fn apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        (**self).apply_controlled(circuit, controls, target)
    }
}

impl<T: ?Sized, O: ControlledAdjoint<T> + ?Sized> ControlledAdjoint<T> for &O {
    fn apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        (**self).apply_controlled_adjoint(circuit, controls, target)
    }
}

// =============================================================================
// Closures
// =============================================================================

/// A closure wrapped as an [`Operation`] with no optional capability.
pub struct FnOperation<F> {
    name: String,
    f: F,
}

/// Wrap a closure as an operation.
///
/// The result supports plain application only; use it as the `inner` of a
/// base-variant conjugation or anywhere an [`Operation`] is enough.
pub fn from_fn<T, F>(name: impl Into<String>, f: F) -> FnOperation<F>
where
    T: ?Sized,
    F: Fn(&mut Circuit, &T) -> OpResult<()>,
{
    FnOperation {
        name: name.into(),
        f,
    }
}

impl<T, F> Operation<T> for FnOperation<F>
where
    T: ?Sized,
    F: Fn(&mut Circuit, &T) -> OpResult<()>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        (self.f)(circuit, target)
    }
}

// =============================================================================
// Functors
// =============================================================================

/// The inverse of an operation, as an operation in its own right.
///
/// `Adjointed<O>` has exactly the capabilities of `O`.
#[derive(Debug, Clone, Copy)]
pub struct Adjointed<O>(pub O);

/// Invert an operation.
pub fn adjoint<O>(op: O) -> Adjointed<O> {
    Adjointed(op)
}

impl<T: ?Sized, O: Adjoint<T>> Operation<T> for Adjointed<O> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn apply(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        self.0.apply_adjoint(circuit, target)
    }
}

impl<T: ?Sized, O: Adjoint<T>> Adjoint<T> for Adjointed<O> {
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        self.0.apply(circuit, target)
    }
}

impl<T: ?Sized, O: ControlledAdjoint<T>> Controlled<T> for Adjointed<O> {
    fn apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        self.0.apply_controlled_adjoint(circuit, controls, target)
    }
}

impl<T: ?Sized, O: ControlledAdjoint<T>> ControlledAdjoint<T> for Adjointed<O> {
    fn apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        self.0.apply_controlled(circuit, controls, target)
    }
}

/// An operation with a fixed list of control qubits.
///
/// Applying it emits the controlled form of the wrapped operation. Further
/// controls passed to its own controlled form are appended to the fixed list.
#[derive(Debug, Clone)]
pub struct ControlledOn<O> {
    op: O,
    controls: Vec<QubitId>,
}

/// Bind control qubits to an operation.
pub fn controlled_on<O>(op: O, controls: impl IntoIterator<Item = QubitId>) -> ControlledOn<O> {
    ControlledOn {
        op,
        controls: controls.into_iter().collect(),
    }
}

impl<O> ControlledOn<O> {
    /// The bound control qubits.
    pub fn controls(&self) -> &[QubitId] {
        &self.controls
    }

    fn with_extra(&self, extra: &[QubitId]) -> Vec<QubitId> {
        self.controls.iter().chain(extra).copied().collect()
    }
}

impl<T: ?Sized, O: Controlled<T>> Operation<T> for ControlledOn<O> {
    fn name(&self) -> &str {
        self.op.name()
    }

    fn apply(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        self.op.apply_controlled(circuit, &self.controls, target)
    }
}

impl<T: ?Sized, O: ControlledAdjoint<T>> Adjoint<T> for ControlledOn<O> {
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        self.op
            .apply_controlled_adjoint(circuit, &self.controls, target)
    }
}

impl<T: ?Sized, O: Controlled<T>> Controlled<T> for ControlledOn<O> {
    fn apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        self.op
            .apply_controlled(circuit, &self.with_extra(controls), target)
    }
}

impl<T: ?Sized, O: ControlledAdjoint<T>> ControlledAdjoint<T> for ControlledOn<O> {
    fn apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        self.op
            .apply_controlled_adjoint(circuit, &self.with_extra(controls), target)
    }
}
