//! Increment of a register by a classical constant.
//!
//! In the phase representation, cell `j` of an `n`-cell register holding `x`
//! carries `exp(2πi·x / 2^(n-j))`. Adding `a` therefore multiplies that cell
//! by `exp(2πi·a / 2^(n-j))`: one phase rotation per cell, no carries, no
//! ancillas and no gate touching two cells.
//!
//! [`PhaseIncrement`] is that rotation layer. [`increment_by_integer`]
//! conjugates it with the QFT to act on the computational representation,
//! and [`BigEndianAdapter`] reorders cells for big-endian registers.

use std::f64::consts::TAU;

use phasekit_ir::{Circuit, Instruction, QubitId, StandardGate};
use phasekit_ops::{Adjoint, Conjugation, Controlled, ControlledAdjoint, OpResult, Operation};
use tracing::debug;

use crate::qft::{OnPhaseRegister, QuantumFourierTransform};
use crate::register::{BigEndian, LittleEndian, PhaseLittleEndian};

/// Adds a classical constant, modulo `2^n`, to a [`PhaseLittleEndian`]
/// register.
///
/// The register must already be in the phase representation; this is not
/// checked. Adjoint subtracts the constant and the controlled form gates
/// every rotation on the same controls.
///
/// # Example
///
/// ```rust
/// use phasekit_arith::{PhaseIncrement, PhaseLittleEndian};
/// use phasekit_ir::Circuit;
/// use phasekit_ops::Operation;
///
/// let mut circuit = Circuit::new("inc");
/// let reg = PhaseLittleEndian::allocate(&mut circuit, "x", 3);
/// PhaseIncrement::new(3).apply(&mut circuit, &reg).unwrap();
///
/// // One rotation per cell.
/// assert_eq!(circuit.num_ops(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseIncrement {
    amount: u64,
    decrement: bool,
}

impl PhaseIncrement {
    /// Increment by `amount`.
    pub fn new(amount: u64) -> Self {
        Self {
            amount,
            decrement: false,
        }
    }

    /// Increment by a signed amount. A negative amount decrements by its
    /// magnitude.
    pub fn signed(amount: i64) -> Self {
        if amount < 0 {
            Self::decrement(amount.unsigned_abs())
        } else {
            Self::new(amount.unsigned_abs())
        }
    }

    /// Decrement by `amount`.
    ///
    /// Every rotation angle is negated, so this is exact at any register
    /// width.
    pub fn decrement(amount: u64) -> Self {
        Self {
            amount,
            decrement: true,
        }
    }

    /// Magnitude of the constant being added or subtracted.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Whether the constant is subtracted.
    pub fn is_decrement(&self) -> bool {
        self.decrement
    }

    /// Rotation angle for `cell` of a `width`-cell register:
    /// `±2π · (a mod 2^(width-cell)) / 2^(width-cell)`, negative for a
    /// decrement.
    ///
    /// Reducing `a` per cell keeps the angle within `(-2π, 2π)` without losing
    /// precision to large multiples of `2π`. Cells at or past `width` get `0`.
    pub fn rotation_angle(&self, width: usize, cell: usize) -> f64 {
        let Some(span) = width.checked_sub(cell) else {
            return 0.0;
        };
        let theta = if span >= 64 {
            TAU * self.amount as f64 / 2f64.powi(span.min(i32::MAX as usize) as i32)
        } else {
            let modulus = 1u64 << span;
            TAU * (self.amount % modulus) as f64 / modulus as f64
        };
        if self.decrement { -theta } else { theta }
    }

    fn emit(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        reg: &PhaseLittleEndian,
        adjoint: bool,
    ) -> OpResult<()> {
        let width = reg.len();
        debug!(
            amount = self.amount,
            decrement = self.decrement,
            width,
            controls = controls.len(),
            adjoint,
            "phase increment"
        );

        let rotation = |cell: usize| {
            let theta = self.rotation_angle(width, cell);
            let theta = if adjoint { -theta } else { theta };
            Instruction::single_qubit_gate(StandardGate::P(theta), reg.qubits()[cell])
                .with_controls(controls.iter().copied())
        };

        if adjoint {
            for cell in (0..width).rev() {
                circuit.apply(rotation(cell))?;
            }
        } else {
            for cell in 0..width {
                circuit.apply(rotation(cell))?;
            }
        }
        Ok(())
    }
}

impl Operation<PhaseLittleEndian> for PhaseIncrement {
    fn name(&self) -> &str {
        "increment_phase_by_integer"
    }

    fn apply(&self, circuit: &mut Circuit, target: &PhaseLittleEndian) -> OpResult<()> {
        self.emit(circuit, &[], target, false)
    }
}

impl Adjoint<PhaseLittleEndian> for PhaseIncrement {
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &PhaseLittleEndian) -> OpResult<()> {
        self.emit(circuit, &[], target, true)
    }
}

impl Controlled<PhaseLittleEndian> for PhaseIncrement {
    fn apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &PhaseLittleEndian,
    ) -> OpResult<()> {
        self.emit(circuit, controls, target, false)
    }
}

impl ControlledAdjoint<PhaseLittleEndian> for PhaseIncrement {
    fn apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &PhaseLittleEndian,
    ) -> OpResult<()> {
        self.emit(circuit, controls, target, true)
    }
}

// =============================================================================
// Computational-basis variants
// =============================================================================

/// Increment of a [`LittleEndian`] register in the computational basis:
/// QFT, phase increment, inverse QFT.
pub type IncrementByInteger =
    Conjugation<LittleEndian, QuantumFourierTransform, OnPhaseRegister<PhaseIncrement>>;

/// Adapts an operation on [`LittleEndian`] registers to [`BigEndian`] ones.
///
/// The cell order is reversed on the way in; no gates are emitted for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigEndianAdapter<O>(pub O);

impl<O: Operation<LittleEndian>> Operation<BigEndian> for BigEndianAdapter<O> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn apply(&self, circuit: &mut Circuit, target: &BigEndian) -> OpResult<()> {
        self.0.apply(circuit, &target.to_little_endian())
    }
}

impl<O: Adjoint<LittleEndian>> Adjoint<BigEndian> for BigEndianAdapter<O> {
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &BigEndian) -> OpResult<()> {
        self.0.apply_adjoint(circuit, &target.to_little_endian())
    }
}

impl<O: Controlled<LittleEndian>> Controlled<BigEndian> for BigEndianAdapter<O> {
    fn apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &BigEndian,
    ) -> OpResult<()> {
        self.0
            .apply_controlled(circuit, controls, &target.to_little_endian())
    }
}

impl<O: ControlledAdjoint<LittleEndian>> ControlledAdjoint<BigEndian> for BigEndianAdapter<O> {
    fn apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &BigEndian,
    ) -> OpResult<()> {
        self.0
            .apply_controlled_adjoint(circuit, controls, &target.to_little_endian())
    }
}

/// Increment a phase-represented register by `amount`.
pub fn increment_phase_by_integer(amount: u64) -> PhaseIncrement {
    PhaseIncrement::new(amount)
}

/// Increment a computational-basis little-endian register by `amount`.
///
/// The result is adjoint and controlled: only the phase rotations are gated
/// when it is controlled, the QFT pair around them is not.
pub fn increment_by_integer(amount: u64) -> IncrementByInteger {
    Conjugation::with_ca(
        QuantumFourierTransform,
        OnPhaseRegister(PhaseIncrement::new(amount)),
    )
}

/// Increment a computational-basis big-endian register by `amount`.
pub fn increment_by_integer_be(amount: u64) -> BigEndianAdapter<IncrementByInteger> {
    BigEndianAdapter(increment_by_integer(amount))
}
