//! Circuit instructions combining gates with operands and control lines.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, StandardGate};
use crate::qubit::QubitId;

/// A gate applied to operand qubits, optionally gated on control qubits.
///
/// A controlled instruction acts as its gate on the subspace where every
/// control qubit is `|1⟩` and as the identity elsewhere. Controls are a
/// structural property of the instruction; nothing is decided at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate.
    pub gate: Gate,
    /// Qubits the gate operates on.
    pub qubits: Vec<QubitId>,
    /// Control qubits. Empty for an uncontrolled instruction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: impl Into<Gate>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate: gate.into(),
            qubits: qubits.into_iter().collect(),
            controls: vec![],
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Add control qubits to this instruction.
    #[must_use]
    pub fn with_controls(mut self, controls: impl IntoIterator<Item = QubitId>) -> Self {
        self.controls.extend(controls);
        self
    }

    /// Label the gate of this instruction.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.gate.label = Some(label.into());
        self
    }

    /// Get the gate name.
    pub fn name(&self) -> &str {
        self.gate.name()
    }

    /// Check if this instruction carries control qubits.
    pub fn is_controlled(&self) -> bool {
        !self.controls.is_empty()
    }

    /// All qubits touched by this instruction: controls first, then operands.
    pub fn all_qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.controls.iter().chain(self.qubits.iter()).copied()
    }

    /// The adjoint of this instruction. Controls are unchanged.
    pub fn inverse(&self) -> Instruction {
        Instruction {
            gate: self.gate.inverse(),
            qubits: self.qubits.clone(),
            controls: self.controls.clone(),
        }
    }

    /// Check operand arity and that no qubit appears twice.
    pub fn validate(&self) -> IrResult<()> {
        let expected = self.gate.num_qubits();
        let got = self.qubits.len() as u32;
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: self.name().to_string(),
                expected,
                got,
            });
        }

        let mut seen = FxHashSet::default();
        for qubit in self.all_qubits() {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(self.name().to_string()),
                });
            }
        }
        Ok(())
    }
}
