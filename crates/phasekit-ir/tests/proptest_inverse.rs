//! Property-based tests for circuit adjoints.

use phasekit_ir::{Circuit, Instruction, QubitId, StandardGate};
use proptest::prelude::*;

fn arb_gate() -> impl Strategy<Value = StandardGate> {
    prop_oneof![
        Just(StandardGate::H),
        Just(StandardGate::X),
        Just(StandardGate::S),
        Just(StandardGate::T),
        (-3.0_f64..3.0).prop_map(StandardGate::P),
        (-3.0_f64..3.0).prop_map(StandardGate::Rz),
    ]
}

/// Random single-qubit gates on a 3-qubit circuit, some of them controlled
/// on a qubit other than their target.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    prop::collection::vec((arb_gate(), 0_u32..3, prop::option::of(1_u32..3)), 0..12).prop_map(
        |ops| {
            let mut circuit = Circuit::with_size("random", 3);
            for (gate, target, control_offset) in ops {
                let mut inst = Instruction::single_qubit_gate(gate, QubitId(target));
                if let Some(offset) = control_offset {
                    inst = inst.with_controls([QubitId((target + offset) % 3)]);
                }
                circuit.apply(inst).unwrap();
            }
            circuit
        },
    )
}

proptest! {
    #[test]
    fn double_inverse_is_original(circuit in arb_circuit()) {
        let twice = circuit.inverse().inverse();
        prop_assert_eq!(twice.instructions(), circuit.instructions());
    }

    #[test]
    fn inverse_preserves_size_and_controls(circuit in arb_circuit()) {
        let inv = circuit.inverse();
        prop_assert_eq!(inv.num_ops(), circuit.num_ops());
        prop_assert_eq!(inv.num_controlled_ops(), circuit.num_controlled_ops());
        prop_assert_eq!(inv.depth(), circuit.depth());
    }
}
