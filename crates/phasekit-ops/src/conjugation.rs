//! Conjugation combinators: `outer → inner → adjoint(outer)`.
//!
//! [`Conjugation`] derives its capabilities from its inputs through
//! conditional trait impls. `outer` must always be [`Adjoint`]; everything
//! else follows from what `inner` supports:
//!
//! | Constructor | `inner` bound | Conjugation implements |
//! |-------------|---------------|------------------------|
//! | [`Conjugation::with`] | [`Operation`] | [`Operation`] |
//! | [`Conjugation::with_a`] | [`Adjoint`] | + [`Adjoint`] |
//! | [`Conjugation::with_c`] | [`Controlled`] | + [`Controlled`] |
//! | [`Conjugation::with_ca`] | [`ControlledAdjoint`] | + [`ControlledAdjoint`] |
//!
//! The derived forms only ever transform the inner step:
//!
//! - adjoint: `outer → adjoint(inner) → adjoint(outer)`
//! - controlled: `outer → controlled(inner) → adjoint(outer)`
//! - controlled adjoint: `outer → controlled(adjoint(inner)) → adjoint(outer)`
//!
//! `outer` and `adjoint(outer)` are emitted uncontrolled in every form. With
//! the controls off their product is the identity.

use std::fmt;
use std::marker::PhantomData;

use phasekit_ir::{Circuit, QubitId};
use tracing::trace;

use crate::error::OpResult;
use crate::operation::{Adjoint, Controlled, ControlledAdjoint, Operation};

/// The conjugation of `inner` by `outer`, acting on targets of type `T`.
pub struct Conjugation<T: ?Sized, U, V> {
    name: String,
    outer: U,
    inner: V,
    _target: PhantomData<fn(&T)>,
}

impl<T: ?Sized, U, V> Conjugation<T, U, V>
where
    U: Adjoint<T>,
{
    fn build(outer: U, inner: V, inner_name: &str) -> Self {
        let name = format!("apply_with({}, {})", outer.name(), inner_name);
        Self {
            name,
            outer,
            inner,
            _target: PhantomData,
        }
    }

    /// Base variant. The result supports plain application only.
    pub fn with(outer: U, inner: V) -> Self
    where
        V: Operation<T>,
    {
        let inner_name = inner.name().to_string();
        Self::build(outer, inner, &inner_name)
    }

    /// Invertible variant. The result is [`Adjoint`].
    pub fn with_a(outer: U, inner: V) -> Self
    where
        V: Adjoint<T>,
    {
        Self::with(outer, inner)
    }

    /// Conditional variant. The result is [`Controlled`].
    pub fn with_c(outer: U, inner: V) -> Self
    where
        V: Controlled<T>,
    {
        Self::with(outer, inner)
    }

    /// Full variant. The result is [`ControlledAdjoint`].
    pub fn with_ca(outer: U, inner: V) -> Self
    where
        V: ControlledAdjoint<T>,
    {
        Self::with(outer, inner)
    }

    /// Emit `outer`, then `inner_step`, then `adjoint(outer)`.
    fn conjugate<F>(
        &self,
        circuit: &mut Circuit,
        target: &T,
        form: &str,
        inner_step: F,
    ) -> OpResult<()>
    where
        F: FnOnce(&mut Circuit) -> OpResult<()>,
    {
        trace!(operation = %self.name, form, "applying outer");
        self.outer.apply(circuit, target)?;
        trace!(operation = %self.name, form, "applying inner");
        inner_step(circuit)?;
        trace!(operation = %self.name, form, "undoing outer");
        self.outer.apply_adjoint(circuit, target)
    }
}

impl<T: ?Sized, U: Clone, V: Clone> Clone for Conjugation<T, U, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _target: PhantomData,
        }
    }
}

impl<T: ?Sized, U: fmt::Debug, V: fmt::Debug> fmt::Debug for Conjugation<T, U, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conjugation")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<T: ?Sized, U: Adjoint<T>, V: Operation<T>> Operation<T> for Conjugation<T, U, V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        self.conjugate(circuit, target, "body", |c| self.inner.apply(c, target))
    }
}

impl<T: ?Sized, U: Adjoint<T>, V: Adjoint<T>> Adjoint<T> for Conjugation<T, U, V> {
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        self.conjugate(circuit, target, "adjoint", |c| {
            self.inner.apply_adjoint(c, target)
        })
    }
}

impl<T: ?Sized, U: Adjoint<T>, V: Controlled<T>> Controlled<T> for Conjugation<T, U, V> {
    fn apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        self.conjugate(circuit, target, "controlled", |c| {
            self.inner.apply_controlled(c, controls, target)
        })
    }
}

impl<T: ?Sized, U: Adjoint<T>, V: ControlledAdjoint<T>> ControlledAdjoint<T>
    for Conjugation<T, U, V>
{
    fn apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        self.conjugate(circuit, target, "controlled adjoint", |c| {
            self.inner.apply_controlled_adjoint(c, controls, target)
        })
    }
}

// =============================================================================
// Immediate application
// =============================================================================

/// Emit `outer → inner → adjoint(outer)` on `target`.
pub fn apply_with<T, U, V>(outer: &U, inner: &V, circuit: &mut Circuit, target: &T) -> OpResult<()>
where
    T: ?Sized,
    U: Adjoint<T>,
    V: Operation<T>,
{
    Conjugation::with(outer, inner).apply(circuit, target)
}

/// Emit `outer → adjoint(inner) → adjoint(outer)` on `target`.
pub fn apply_with_adjoint<T, U, V>(
    outer: &U,
    inner: &V,
    circuit: &mut Circuit,
    target: &T,
) -> OpResult<()>
where
    T: ?Sized,
    U: Adjoint<T>,
    V: Adjoint<T>,
{
    Conjugation::with_a(outer, inner).apply_adjoint(circuit, target)
}

/// Emit `outer → controlled(inner) → adjoint(outer)` on `target`.
pub fn apply_with_controlled<T, U, V>(
    outer: &U,
    inner: &V,
    circuit: &mut Circuit,
    controls: &[QubitId],
    target: &T,
) -> OpResult<()>
where
    T: ?Sized,
    U: Adjoint<T>,
    V: Controlled<T>,
{
    Conjugation::with_c(outer, inner).apply_controlled(circuit, controls, target)
}

/// Emit `outer → controlled(adjoint(inner)) → adjoint(outer)` on `target`.
pub fn apply_with_controlled_adjoint<T, U, V>(
    outer: &U,
    inner: &V,
    circuit: &mut Circuit,
    controls: &[QubitId],
    target: &T,
) -> OpResult<()>
where
    T: ?Sized,
    U: Adjoint<T>,
    V: ControlledAdjoint<T>,
{
    Conjugation::with_ca(outer, inner).apply_controlled_adjoint(circuit, controls, target)
}
