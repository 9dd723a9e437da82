//! Type-erased operations with runtime capability checks.
//!
//! [`Conjugation`](crate::Conjugation) rejects a missing capability at
//! compile time. When operations are picked at runtime (from a table, a
//! plugin, user input) their types are erased, so [`DynOperation`] carries
//! its [`Capabilities`] as data and [`conjugate`] checks them when the
//! composite is built. Using an undeclared form fails immediately with
//! [`OpError::CapabilityMismatch`].

use std::fmt;
use std::sync::Arc;

use phasekit_ir::{Circuit, QubitId};
use tracing::debug;

use crate::capability::{Capabilities, Capability};
use crate::error::{OpError, OpResult};
use crate::operation::{Adjoint, Controlled, ControlledAdjoint, Operation};

type ApplyFn<T> = Arc<dyn Fn(&mut Circuit, &T) -> OpResult<()> + Send + Sync>;
type ControlledFn<T> = Arc<dyn Fn(&mut Circuit, &[QubitId], &T) -> OpResult<()> + Send + Sync>;

/// A type-erased operation with a runtime capability descriptor.
pub struct DynOperation<T: ?Sized + 'static> {
    name: String,
    body: ApplyFn<T>,
    adjoint: Option<ApplyFn<T>>,
    controlled: Option<ControlledFn<T>>,
    controlled_adjoint: Option<ControlledFn<T>>,
}

impl<T: ?Sized + 'static> DynOperation<T> {
    /// Erase an operation with no optional capability.
    pub fn from_op<O>(op: O) -> Self
    where
        O: Operation<T> + Send + Sync + 'static,
    {
        let op = Arc::new(op);
        Self {
            name: op.name().to_string(),
            body: body_fn(&op),
            adjoint: None,
            controlled: None,
            controlled_adjoint: None,
        }
    }

    /// Erase an invertible operation.
    pub fn from_adjoint<O>(op: O) -> Self
    where
        O: Adjoint<T> + Send + Sync + 'static,
    {
        let op = Arc::new(op);
        Self {
            name: op.name().to_string(),
            body: body_fn(&op),
            adjoint: Some(adjoint_fn(&op)),
            controlled: None,
            controlled_adjoint: None,
        }
    }

    /// Erase a controllable operation.
    pub fn from_controlled<O>(op: O) -> Self
    where
        O: Controlled<T> + Send + Sync + 'static,
    {
        let op = Arc::new(op);
        Self {
            name: op.name().to_string(),
            body: body_fn(&op),
            adjoint: None,
            controlled: Some(controlled_fn(&op)),
            controlled_adjoint: None,
        }
    }

    /// Erase an operation supporting every form.
    pub fn from_controlled_adjoint<O>(op: O) -> Self
    where
        O: ControlledAdjoint<T> + Send + Sync + 'static,
    {
        let op = Arc::new(op);
        let ca = Arc::clone(&op);
        Self {
            name: op.name().to_string(),
            body: body_fn(&op),
            adjoint: Some(adjoint_fn(&op)),
            controlled: Some(controlled_fn(&op)),
            controlled_adjoint: Some(Arc::new(
                move |circuit: &mut Circuit, controls: &[QubitId], target: &T| {
                    ca.apply_controlled_adjoint(circuit, controls, target)
                },
            )),
        }
    }

    /// Rename the operation.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The declared capabilities.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            adjoint: self.adjoint.is_some(),
            controlled: self.controlled.is_some(),
        }
    }

    fn mismatch(&self, capability: Capability) -> OpError {
        OpError::CapabilityMismatch {
            operation: self.name.clone(),
            capability,
        }
    }

    /// Emit the inverse, if declared.
    pub fn try_apply_adjoint(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        let adjoint = self
            .adjoint
            .as_ref()
            .ok_or_else(|| self.mismatch(Capability::Adjoint))?;
        adjoint(circuit, target)
    }

    /// Emit the controlled form, if declared.
    pub fn try_apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        let controlled = self
            .controlled
            .as_ref()
            .ok_or_else(|| self.mismatch(Capability::Controlled))?;
        controlled(circuit, controls, target)
    }

    /// Emit the controlled inverse, if both capabilities are declared.
    pub fn try_apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &T,
    ) -> OpResult<()> {
        if let Some(missing) = self.capabilities().missing(Capabilities::ALL) {
            return Err(self.mismatch(missing));
        }
        let controlled_adjoint = self
            .controlled_adjoint
            .as_ref()
            .ok_or_else(|| self.mismatch(Capability::Adjoint))?;
        controlled_adjoint(circuit, controls, target)
    }
}

fn body_fn<T, O>(op: &Arc<O>) -> ApplyFn<T>
where
    T: ?Sized + 'static,
    O: Operation<T> + Send + Sync + 'static,
{
    let op = Arc::clone(op);
    Arc::new(move |circuit: &mut Circuit, target: &T| op.apply(circuit, target))
}

fn adjoint_fn<T, O>(op: &Arc<O>) -> ApplyFn<T>
where
    T: ?Sized + 'static,
    O: Adjoint<T> + Send + Sync + 'static,
{
    let op = Arc::clone(op);
    Arc::new(move |circuit: &mut Circuit, target: &T| op.apply_adjoint(circuit, target))
}

fn controlled_fn<T, O>(op: &Arc<O>) -> ControlledFn<T>
where
    T: ?Sized + 'static,
    O: Controlled<T> + Send + Sync + 'static,
{
    let op = Arc::clone(op);
    Arc::new(
        move |circuit: &mut Circuit, controls: &[QubitId], target: &T| {
            op.apply_controlled(circuit, controls, target)
        },
    )
}

impl<T: ?Sized + 'static> Clone for DynOperation<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            body: Arc::clone(&self.body),
            adjoint: self.adjoint.clone(),
            controlled: self.controlled.clone(),
            controlled_adjoint: self.controlled_adjoint.clone(),
        }
    }
}

impl<T: ?Sized + 'static> fmt::Debug for DynOperation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynOperation")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

impl<T: ?Sized + 'static> Operation<T> for DynOperation<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, circuit: &mut Circuit, target: &T) -> OpResult<()> {
        (self.body)(circuit, target)
    }
}

/// Conjugate `inner` by `outer`, requiring the result to declare `required`.
///
/// Fails at construction if `outer` is not invertible or `inner` lacks any
/// capability in `required`. The result declares exactly `required`.
pub fn conjugate<T: ?Sized + 'static>(
    outer: DynOperation<T>,
    inner: DynOperation<T>,
    required: Capabilities,
) -> OpResult<DynOperation<T>> {
    if !outer.capabilities().adjoint {
        return Err(outer.mismatch(Capability::Adjoint));
    }
    if let Some(missing) = inner.capabilities().missing(required) {
        return Err(inner.mismatch(missing));
    }

    let name = format!("apply_with({}, {})", outer.name, inner.name);
    debug!(operation = %name, capabilities = %required, "built runtime conjugation");

    let body: ApplyFn<T> = {
        let (outer, inner) = (outer.clone(), inner.clone());
        Arc::new(move |circuit: &mut Circuit, target: &T| {
            outer.apply(circuit, target)?;
            inner.apply(circuit, target)?;
            outer.try_apply_adjoint(circuit, target)
        })
    };

    let adjoint: Option<ApplyFn<T>> = required.adjoint.then(|| {
        let (outer, inner) = (outer.clone(), inner.clone());
        Arc::new(move |circuit: &mut Circuit, target: &T| {
            outer.apply(circuit, target)?;
            inner.try_apply_adjoint(circuit, target)?;
            outer.try_apply_adjoint(circuit, target)
        }) as ApplyFn<T>
    });

    let controlled: Option<ControlledFn<T>> = required.controlled.then(|| {
        let (outer, inner) = (outer.clone(), inner.clone());
        Arc::new(
            move |circuit: &mut Circuit, controls: &[QubitId], target: &T| {
                outer.apply(circuit, target)?;
                inner.try_apply_controlled(circuit, controls, target)?;
                outer.try_apply_adjoint(circuit, target)
            },
        ) as ControlledFn<T>
    });

    let controlled_adjoint: Option<ControlledFn<T>> =
        (required.adjoint && required.controlled).then(|| {
            let (outer, inner) = (outer.clone(), inner.clone());
            Arc::new(
                move |circuit: &mut Circuit, controls: &[QubitId], target: &T| {
                    outer.apply(circuit, target)?;
                    inner.try_apply_controlled_adjoint(circuit, controls, target)?;
                    outer.try_apply_adjoint(circuit, target)
                },
            ) as ControlledFn<T>
        });

    Ok(DynOperation {
        name,
        body,
        adjoint,
        controlled,
        controlled_adjoint,
    })
}

/// Conjugate `inner` by `outer`, deriving the result's capabilities from
/// `inner`.
pub fn conjugate_derived<T: ?Sized + 'static>(
    outer: DynOperation<T>,
    inner: DynOperation<T>,
) -> OpResult<DynOperation<T>> {
    let derived = inner.capabilities();
    conjugate(outer, inner, derived)
}
