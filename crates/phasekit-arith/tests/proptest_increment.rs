//! Property-based tests for the phase-domain increment.

use phasekit_arith::{LittleEndian, PhaseIncrement, PhaseLittleEndian, increment_by_integer};
use phasekit_ir::Circuit;
use phasekit_ops::{Adjoint, Operation};
use phasekit_sim::{Simulator, Statevector};
use proptest::prelude::*;

fn reduce(value: u128, n: u32) -> u64 {
    (value % (1u128 << n)) as u64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Increment by `a1` then `a2` is increment by `a1 + a2`.
    #[test]
    fn increments_add(n in 1u32..=8, a1: u64, a2: u64, x: u64) {
        let x = reduce(x.into(), n);
        let mut circuit = Circuit::new("additive");
        let reg = PhaseLittleEndian::allocate(&mut circuit, "x", n);
        PhaseIncrement::new(a1).apply(&mut circuit, &reg).unwrap();
        PhaseIncrement::new(a2).apply(&mut circuit, &reg).unwrap();

        let sim = Simulator::new();
        let sv = sim
            .run_from(&circuit, Statevector::fourier_state(n as usize, x))
            .unwrap();
        let sum = reduce(u128::from(x) + u128::from(a1) + u128::from(a2), n);
        let expected = Statevector::fourier_state(n as usize, sum);
        prop_assert!(sim.equivalent(&sv, &expected));
    }

    /// Increment by `a` then by `2^n - a` is the identity.
    #[test]
    fn complement_undoes_increment(n in 1u32..=8, a: u64, x: u64) {
        let x = reduce(x.into(), n);
        let a = reduce(a.into(), n);
        let complement = reduce((1u128 << n) - u128::from(a), n);

        let mut circuit = Circuit::new("complement");
        let reg = PhaseLittleEndian::allocate(&mut circuit, "x", n);
        PhaseIncrement::new(a).apply(&mut circuit, &reg).unwrap();
        PhaseIncrement::new(complement).apply(&mut circuit, &reg).unwrap();

        let sim = Simulator::new();
        let initial = Statevector::fourier_state(n as usize, x);
        let sv = sim.run_from(&circuit, initial.clone()).unwrap();
        prop_assert!(sim.equivalent(&sv, &initial));
    }

    /// The adjoint undoes the increment, for any amount.
    #[test]
    fn adjoint_undoes_increment(n in 1u32..=8, a: u64, x: u64) {
        let x = reduce(x.into(), n);
        let mut circuit = Circuit::new("adjoint");
        let reg = PhaseLittleEndian::allocate(&mut circuit, "x", n);
        let inc = PhaseIncrement::new(a);
        inc.apply(&mut circuit, &reg).unwrap();
        inc.apply_adjoint(&mut circuit, &reg).unwrap();

        let sim = Simulator::new();
        let initial = Statevector::fourier_state(n as usize, x);
        let sv = sim.run_from(&circuit, initial.clone()).unwrap();
        prop_assert!(sim.equivalent(&sv, &initial));
    }

    /// A signed increment matches the unsigned one on its residue.
    #[test]
    fn signed_matches_residue(n in 1u32..=8, a: i64, x: u64) {
        let x = reduce(x.into(), n);
        let residue = a.rem_euclid(1i64 << n) as u64;

        let sim = Simulator::new();
        let run = |inc: PhaseIncrement| {
            let mut circuit = Circuit::new("signed");
            let reg = PhaseLittleEndian::allocate(&mut circuit, "x", n);
            inc.apply(&mut circuit, &reg).unwrap();
            sim.run_from(&circuit, Statevector::fourier_state(n as usize, x)).unwrap()
        };
        prop_assert!(sim.equivalent(&run(PhaseIncrement::signed(a)), &run(PhaseIncrement::new(residue))));
    }

    /// The computational-basis increment adds modulo `2^n`.
    #[test]
    fn basis_increment_adds(n in 1u32..=6, a: u64, x: u64) {
        let x = reduce(x.into(), n);
        let mut circuit = Circuit::new("basis");
        let reg = LittleEndian::allocate(&mut circuit, "x", n);
        reg.prepare(&mut circuit, x).unwrap();
        increment_by_integer(a).apply(&mut circuit, &reg).unwrap();

        let sim = Simulator::new();
        let sv = sim.run(&circuit).unwrap();
        let expected = reduce(u128::from(x) + u128::from(a), n) as usize;
        prop_assert!(sim.equivalent(&sv, &Statevector::basis_state(n as usize, expected)));
    }
}
