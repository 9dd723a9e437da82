//! Property-based tests: arbitrarily nested runtime conjugations stay exact.

use phasekit_ir::{Circuit, Instruction, QubitId, StandardGate};
use phasekit_ops::dynamic::conjugate;
use phasekit_ops::{
    Adjoint, Capabilities, Controlled, ControlledAdjoint, DynOperation, OpResult, Operation,
};
use phasekit_sim::{Simulator, Statevector};
use proptest::prelude::*;

const WIDTH: u32 = 2;

/// H on one qubit of the register.
struct HadamardOn(usize);

impl Operation<[QubitId]> for HadamardOn {
    fn apply(&self, circuit: &mut Circuit, target: &[QubitId]) -> OpResult<()> {
        circuit.h(target[self.0])?;
        Ok(())
    }
}

impl Adjoint<[QubitId]> for HadamardOn {
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &[QubitId]) -> OpResult<()> {
        self.apply(circuit, target)
    }
}

/// P(θ) on one qubit of the register, with every capability.
struct PhaseOn(usize, f64);

impl PhaseOn {
    fn emit(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &[QubitId],
        theta: f64,
    ) -> OpResult<()> {
        circuit.apply(
            Instruction::single_qubit_gate(StandardGate::P(theta), target[self.0])
                .with_controls(controls.iter().copied()),
        )?;
        Ok(())
    }
}

impl Operation<[QubitId]> for PhaseOn {
    fn apply(&self, circuit: &mut Circuit, target: &[QubitId]) -> OpResult<()> {
        self.emit(circuit, &[], target, self.1)
    }
}

impl Adjoint<[QubitId]> for PhaseOn {
    fn apply_adjoint(&self, circuit: &mut Circuit, target: &[QubitId]) -> OpResult<()> {
        self.emit(circuit, &[], target, -self.1)
    }
}

impl Controlled<[QubitId]> for PhaseOn {
    fn apply_controlled(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &[QubitId],
    ) -> OpResult<()> {
        self.emit(circuit, controls, target, self.1)
    }
}

impl ControlledAdjoint<[QubitId]> for PhaseOn {
    fn apply_controlled_adjoint(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        target: &[QubitId],
    ) -> OpResult<()> {
        self.emit(circuit, controls, target, -self.1)
    }
}

fn nested(layers: &[usize], cell: usize, theta: f64) -> DynOperation<[QubitId]> {
    let mut op = DynOperation::from_controlled_adjoint(PhaseOn(cell, theta));
    for &outer in layers {
        op = conjugate(
            DynOperation::from_adjoint(HadamardOn(outer)),
            op,
            Capabilities::ALL,
        )
        .unwrap();
    }
    op
}

proptest! {
    #[test]
    fn nested_conjugation_then_adjoint_is_identity(
        layers in prop::collection::vec(0..WIDTH as usize, 0..6),
        cell in 0..WIDTH as usize,
        theta in -6.3f64..6.3,
        start in 0usize..(1 << (WIDTH + 1)),
    ) {
        let op = nested(&layers, cell, theta);
        let mut circuit = Circuit::new("nested");
        let target = circuit.add_qreg("t", WIDTH);
        let control = circuit.add_qubit();
        op.try_apply_controlled(&mut circuit, &[control], &target[..]).unwrap();
        op.try_apply_controlled_adjoint(&mut circuit, &[control], &target[..]).unwrap();
        prop_assert_eq!(circuit.num_controlled_ops(), 2);

        let sim = Simulator::new();
        let initial = Statevector::basis_state(WIDTH as usize + 1, start);
        let sv = sim.run_from(&circuit, initial.clone()).unwrap();
        prop_assert!(sim.equivalent(&sv, &initial));
    }

    #[test]
    fn controls_off_is_identity(
        layers in prop::collection::vec(0..WIDTH as usize, 0..6),
        cell in 0..WIDTH as usize,
        theta in -6.3f64..6.3,
        start in 0usize..(1 << WIDTH),
    ) {
        let op = nested(&layers, cell, theta);
        let mut circuit = Circuit::new("nested");
        let target = circuit.add_qreg("t", WIDTH);
        let control = circuit.add_qubit();
        op.try_apply_controlled(&mut circuit, &[control], &target[..]).unwrap();

        let sim = Simulator::new();
        let initial = Statevector::basis_state(WIDTH as usize + 1, start);
        let sv = sim.run_from(&circuit, initial.clone()).unwrap();
        prop_assert!(sim.equivalent(&sv, &initial));
    }
}
