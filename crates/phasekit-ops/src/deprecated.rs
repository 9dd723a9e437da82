//! Deprecation decorator for renamed operations.
//!
//! A renamed operation keeps working under its old name through
//! [`Deprecated`], which forwards every form to the new operation and logs a
//! single warning the first time it is used.

use std::sync::atomic::{AtomicBool, Ordering};

use phasekit_ir::{Circuit, QubitId};
use tracing::warn;

use crate::error::OpResult;
use crate::operation::{Adjoint, Controlled, ControlledAdjoint, Operation};

/// An operation reachable under a deprecated name.
///
/// Declares exactly the capabilities of the wrapped operation.
#[derive(Debug)]
pub struct Deprecated<O> {
    inner: O,
    old_name: &'static str,
    replacement: &'static str,
    warned: AtomicBool,
}

impl<O> Deprecated<O> {
    /// Wrap `inner`, previously known as `old_name`.
    pub fn new(inner: O, old_name: &'static str, replacement: &'static str) -> Self {
        Self {
            inner,
            old_name,
            replacement,
            warned: AtomicBool::new(false),
        }
    }

    /// The deprecated name.
    pub fn old_name(&self) -> &'static str {
        self.old_name
    }

    /// The name callers should migrate to.
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Whether the deprecation warning has been emitted.
    pub fn has_warned(&self) -> bool {
        self.warned.load(Ordering::Relaxed)
    }

    /// Unwrap the new operation.
    pub fn into_inner(self) -> O {
        self.inner
    }

    fn warn_once(&self) {
        if !self.warned.swap(true, Ordering::Relaxed) {
            warn!(
                deprecated = self.old_name,
                replacement = self.replacement,
                "'{}' is deprecated, use '{}' instead",
                self.old_name,
                self.replacement
            );
        }
    }
}

impl<T: ?Sized, O: Operation<T>> Operation<T> for Deprecated<O> {
    fn name(&self) -> &str {
        self.old_name
    }

    fn apply(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        self.warn_once();
        self.inner.apply(circuit, target)
    }
}

impl<T: ?Sized, O: Adjoint<T>> Adjoint<T> for Deprecated<O> {
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        self.warn_once();
        self.inner.apply_adjoint(circuit, target)
    }
}

impl<T: ?Sized, O: Controlled<T>> Controlled<T> for Deprecated<O> {
    fn apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        self.warn_once();
        self.inner.apply_controlled(circuit, controls, target)
    }
}

impl<T: ?Sized, O: ControlledAdjoint<T>> ControlledAdjoint<T> for Deprecated<O> {
    fn apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        self.warn_once();
        self.inner
            .apply_controlled_adjoint(circuit, controls, target)
    }
}
