//! Behavioral tests for register increments, checked on the statevector
//! simulator.

use phasekit_arith::{
    BigEndian, LittleEndian, PhaseIncrement, PhaseLittleEndian, QuantumFourierTransform,
    increment_by_integer, increment_by_integer_be, increment_phase_by_integer,
};
use phasekit_ir::Circuit;
use phasekit_ops::{Adjoint, Controlled, ControlledAdjoint, Operation};
use phasekit_sim::{Simulator, Statevector};

fn phase_register(n: u32) -> (Circuit, PhaseLittleEndian) {
    let mut circuit = Circuit::new("phase");
    let reg = PhaseLittleEndian::allocate(&mut circuit, "x", n);
    (circuit, reg)
}

fn modulus(n: u32) -> u64 {
    1 << n
}

// ============================================================================
// Phase representation
// ============================================================================

#[test]
fn test_phase_increment_exhaustive() {
    let sim = Simulator::new();
    for n in 1..=8u32 {
        for a in 0..modulus(n) {
            let (mut circuit, reg) = phase_register(n);
            increment_phase_by_integer(a)
                .apply(&mut circuit, &reg)
                .unwrap();

            for x in 0..modulus(n) {
                let sv = sim
                    .run_from(&circuit, Statevector::fourier_state(n as usize, x))
                    .unwrap();
                let expected = Statevector::fourier_state(n as usize, (x + a) % modulus(n));
                assert!(sim.equivalent(&sv, &expected), "n={n} a={a} x={x}");
            }
        }
    }
}

#[test]
fn test_phase_scenario_five_plus_three() {
    let sim = Simulator::new();
    let (mut circuit, reg) = phase_register(3);
    PhaseIncrement::new(3).apply(&mut circuit, &reg).unwrap();

    let sv = sim
        .run_from(&circuit, Statevector::fourier_state(3, 5))
        .unwrap();
    assert!(sim.equivalent(&sv, &Statevector::fourier_state(3, 0)));
}

#[test]
fn test_zero_increment_is_identity() {
    let sim = Simulator::new();
    let (mut circuit, reg) = phase_register(4);
    PhaseIncrement::new(0).apply(&mut circuit, &reg).unwrap();
    assert_eq!(circuit.num_ops(), 4);

    for x in 0..16 {
        let initial = Statevector::fourier_state(4, x);
        let sv = sim.run_from(&circuit, initial.clone()).unwrap();
        assert!(sim.equivalent(&sv, &initial));
    }
}

#[test]
fn test_empty_register_is_identity() {
    let sim = Simulator::new();
    let (mut circuit, reg) = phase_register(0);
    PhaseIncrement::new(7).apply(&mut circuit, &reg).unwrap();

    assert_eq!(circuit.num_ops(), 0);
    let sv = sim.run(&circuit).unwrap();
    assert!(sim.equivalent(&sv, &Statevector::new(0)));
}

#[test]
fn test_amount_wider_than_register() {
    let sim = Simulator::new();
    let (mut wide, reg) = phase_register(3);
    PhaseIncrement::new(8 * 11 + 6)
        .apply(&mut wide, &reg)
        .unwrap();
    let (mut narrow, reg) = phase_register(3);
    PhaseIncrement::new(6).apply(&mut narrow, &reg).unwrap();

    for x in 0..8 {
        let a = sim
            .run_from(&wide, Statevector::fourier_state(3, x))
            .unwrap();
        let b = sim
            .run_from(&narrow, Statevector::fourier_state(3, x))
            .unwrap();
        assert!(sim.equivalent(&a, &b));
    }
}

#[test]
fn test_decrement() {
    let sim = Simulator::new();
    let (mut circuit, reg) = phase_register(4);
    PhaseIncrement::decrement(5).apply(&mut circuit, &reg).unwrap();

    let sv = sim
        .run_from(&circuit, Statevector::fourier_state(4, 2))
        .unwrap();
    assert!(sim.equivalent(&sv, &Statevector::fourier_state(4, 13)));
}

#[test]
fn test_controlled_phase_increment() {
    let sim = Simulator::new();
    for control_on in [false, true] {
        let mut circuit = Circuit::new("ctl");
        let reg = LittleEndian::allocate(&mut circuit, "x", 3);
        let ctl = circuit.add_qubit();
        if control_on {
            circuit.x(ctl).unwrap();
        }
        reg.prepare(&mut circuit, 1).unwrap();
        QuantumFourierTransform.apply(&mut circuit, &reg).unwrap();
        PhaseIncrement::new(3)
            .apply_controlled(&mut circuit, &[ctl], &reg.as_phase())
            .unwrap();
        QuantumFourierTransform
            .apply_adjoint(&mut circuit, &reg)
            .unwrap();

        // The gated rotations are in the circuit either way.
        assert_eq!(circuit.num_controlled_ops(), 3);

        let value = if control_on { 4 } else { 1 };
        let expected = value | (usize::from(control_on) << 3);
        let sv = sim.run(&circuit).unwrap();
        assert!(
            sim.equivalent(&sv, &Statevector::basis_state(4, expected)),
            "control_on={control_on}"
        );
    }
}

// ============================================================================
// Computational representation
// ============================================================================

fn run_le_increment(n: u32, x: u64, a: u64) -> Statevector {
    let mut circuit = Circuit::new("le");
    let reg = LittleEndian::allocate(&mut circuit, "x", n);
    reg.prepare(&mut circuit, x).unwrap();
    increment_by_integer(a).apply(&mut circuit, &reg).unwrap();
    Simulator::new().run(&circuit).unwrap()
}

#[test]
fn test_little_endian_increment() {
    let sim = Simulator::new();
    for n in 1..=4u32 {
        for a in 0..modulus(n) {
            for x in 0..modulus(n) {
                let sv = run_le_increment(n, x, a);
                let expected =
                    Statevector::basis_state(n as usize, ((x + a) % modulus(n)) as usize);
                assert!(sim.equivalent(&sv, &expected), "n={n} a={a} x={x}");
            }
        }
    }
}

#[test]
fn test_little_endian_scenario_five_plus_three() {
    let sv = run_le_increment(3, 5, 3);
    assert_eq!(sv.most_likely(), 0);
    assert!((sv.probability(0) - 1.0).abs() < 1e-9);
}

#[test]
fn test_little_endian_adjoint_subtracts() {
    let sim = Simulator::new();
    let mut circuit = Circuit::new("le");
    let reg = LittleEndian::allocate(&mut circuit, "x", 3);
    reg.prepare(&mut circuit, 1).unwrap();
    increment_by_integer(3)
        .apply_adjoint(&mut circuit, &reg)
        .unwrap();

    let sv = sim.run(&circuit).unwrap();
    assert!(sim.equivalent(&sv, &Statevector::basis_state(3, 6)));
}

#[test]
fn test_big_endian_increment() {
    let sim = Simulator::new();
    for x in 0..8 {
        for a in 0..8 {
            let mut circuit = Circuit::new("be");
            let reg = BigEndian::allocate(&mut circuit, "x", 3);
            reg.prepare(&mut circuit, x).unwrap();
            increment_by_integer_be(a)
                .apply(&mut circuit, &reg)
                .unwrap();

            let mut expected = Circuit::new("be");
            let reg = BigEndian::allocate(&mut expected, "x", 3);
            reg.prepare(&mut expected, (x + a) % 8).unwrap();

            let sv = sim.run(&circuit).unwrap();
            assert!(
                sim.equivalent(&sv, &sim.run(&expected).unwrap()),
                "x={x} a={a}"
            );
        }
    }
}

#[test]
fn test_controlled_increment_by_integer() {
    let sim = Simulator::new();
    for control_on in [false, true] {
        for x in 0..8u64 {
            let mut circuit = Circuit::new("ctl");
            let reg = LittleEndian::allocate(&mut circuit, "x", 3);
            let ctl = circuit.add_qubit();
            increment_by_integer(5)
                .apply_controlled(&mut circuit, &[ctl], &reg)
                .unwrap();

            let start = x as usize | (usize::from(control_on) << 3);
            let sv = sim
                .run_from(&circuit, Statevector::basis_state(4, start))
                .unwrap();

            let value = if control_on { (x + 5) % 8 } else { x };
            let expected = value as usize | (usize::from(control_on) << 3);
            assert!(
                sim.equivalent(&sv, &Statevector::basis_state(4, expected)),
                "control_on={control_on} x={x}"
            );
        }
    }
}

#[test]
fn test_controlled_adjoint_increment_by_integer() {
    let sim = Simulator::new();
    let mut circuit = Circuit::new("ctl");
    let reg = LittleEndian::allocate(&mut circuit, "x", 3);
    let ctl = circuit.add_qubit();
    increment_by_integer(2)
        .apply_controlled_adjoint(&mut circuit, &[ctl], &reg)
        .unwrap();

    let sv = sim
        .run_from(&circuit, Statevector::basis_state(4, 0b1_001))
        .unwrap();
    assert!(sim.equivalent(&sv, &Statevector::basis_state(4, 0b1_111)));
}

#[test]
fn test_hand_written_conjugation_matches() {
    let sim = Simulator::new();
    let mut circuit = Circuit::new("custom");
    let reg = LittleEndian::allocate(&mut circuit, "x", 3);
    reg.prepare(&mut circuit, 6).unwrap();

    let qft = QuantumFourierTransform;
    qft.apply(&mut circuit, &reg).unwrap();
    PhaseIncrement::new(1)
        .apply(&mut circuit, &reg.as_phase())
        .unwrap();
    qft.apply_adjoint(&mut circuit, &reg).unwrap();

    let sv = sim.run(&circuit).unwrap();
    assert!(sim.equivalent(&sv, &Statevector::basis_state(3, 7)));
}
