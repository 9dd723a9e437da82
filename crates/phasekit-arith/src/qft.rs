//! Quantum Fourier transform between the computational and phase
//! representations of a little-endian register.

use std::f64::consts::TAU;

use phasekit_ir::{Circuit, Instruction, QubitId, StandardGate};
use phasekit_ops::{Adjoint, Controlled, ControlledAdjoint, OpResult, Operation};
use tracing::trace;

use crate::register::{LittleEndian, PhaseLittleEndian};

/// The quantum Fourier transform on a [`LittleEndian`] register.
///
/// Maps `|x⟩` to the phase representation of `x`: afterwards cell `j` carries
/// `exp(2πi·x / 2^(n-j))`, which is what [`PhaseLittleEndian`] operations
/// expect. The adjoint maps back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuantumFourierTransform;

impl QuantumFourierTransform {
    /// The forward gate sequence for `reg`.
    fn gates(reg: &LittleEndian) -> Vec<Instruction> {
        let q = reg.qubits();
        let n = q.len();
        let mut gates = Vec::with_capacity(n * (n + 1) / 2 + n / 2);

        // Most significant cell first, so each CP reads a control that has
        // not been transformed yet.
        for k in (0..n).rev() {
            gates.push(Instruction::single_qubit_gate(StandardGate::H, q[k]));
            for m in 0..k {
                let theta = TAU / 2f64.powi((k - m + 1) as i32);
                gates.push(Instruction::two_qubit_gate(
                    StandardGate::CP(theta),
                    q[m],
                    q[k],
                ));
            }
        }

        for i in 0..n / 2 {
            gates.push(Instruction::two_qubit_gate(
                StandardGate::Swap,
                q[i],
                q[n - 1 - i],
            ));
        }

        gates
    }

    fn emit(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        reg: &LittleEndian,
        adjoint: bool,
    ) -> OpResult<()> {
        trace!(width = reg.len(), controls = controls.len(), adjoint, "qft");
        let gates = Self::gates(reg);
        if adjoint {
            for inst in gates.iter().rev() {
                circuit.apply(inst.inverse().with_controls(controls.iter().copied()))?;
            }
        } else {
            for inst in gates {
                circuit.apply(inst.with_controls(controls.iter().copied()))?;
            }
        }
        Ok(())
    }
}

impl Operation<LittleEndian> for QuantumFourierTransform {
    fn name(&self) -> &str {
        "qft"
    }

    fn apply(&self, circuit: &mut Circuit, target: &LittleEndian) -> OpResult<()> {
        self.emit(circuit, &[], target, false)
    }
}

impl Adjoint<LittleEndian> for QuantumFourierTransform {
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &LittleEndian) -> OpResult<()> {
        self.emit(circuit, &[], target, true)
    }
}

impl Controlled<LittleEndian> for QuantumFourierTransform {
    fn apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &LittleEndian,
    ) -> OpResult<()> {
        self.emit(circuit, controls, target, false)
    }
}

impl ControlledAdjoint<LittleEndian> for QuantumFourierTransform {
    fn apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &LittleEndian,
    ) -> OpResult<()> {
        self.emit(circuit, controls, target, true)
    }
}

/// Run an operation on the phase representation of a [`LittleEndian`]
/// register.
///
/// No basis change happens here: the wrapped operation sees the same qubits
/// as a [`PhaseLittleEndian`]. Pair it with [`QuantumFourierTransform`] in a
/// conjugation to get an operation on the computational representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnPhaseRegister<O>(pub O);

impl<O: Operation<PhaseLittleEndian>> Operation<LittleEndian> for OnPhaseRegister<O> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn apply(&self, circuit: &mut Circuit, target: &LittleEndian) -> OpResult<()> {
        self.0.apply(circuit, &target.as_phase())
    }
}

impl<O: Adjoint<PhaseLittleEndian>> Adjoint<LittleEndian> for OnPhaseRegister<O> {
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &LittleEndian) -> OpResult<()> {
        self.0.apply_adjoint(circuit, &target.as_phase())
    }
}

impl<O: Controlled<PhaseLittleEndian>> Controlled<LittleEndian> for OnPhaseRegister<O> {
    fn apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &LittleEndian,
    ) -> OpResult<()> {
        self.0.apply_controlled(circuit, controls, &target.as_phase())
    }
}

impl<O: ControlledAdjoint<PhaseLittleEndian>> ControlledAdjoint<LittleEndian>
    for OnPhaseRegister<O>
{
    fn apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &LittleEndian,
    ) -> OpResult<()> {
        self.0
            .apply_controlled_adjoint(circuit, controls, &target.as_phase())
    }
}
