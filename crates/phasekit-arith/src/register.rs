//! Integer registers: an ordered list of qubits read as an unsigned integer.
//!
//! The three register types share the same physical layout and differ in how
//! cells are interpreted:
//!
//! - [`LittleEndian`]: cell 0 is the least significant bit.
//! - [`BigEndian`]: cell 0 is the most significant bit.
//! - [`PhaseLittleEndian`]: a [`LittleEndian`] register after the Fourier
//!   basis change. Cell `j` carries the phase `exp(2πi·x / 2^(n-j))`.
//!
//! Conversions between them only reorder or relabel the qubit list. They never
//! emit gates; changing basis is the job of
//! [`QuantumFourierTransform`](crate::QuantumFourierTransform).

use phasekit_ir::{Circuit, QubitId};
use serde::{Deserialize, Serialize};

use crate::error::{ArithError, ArithResult};

macro_rules! register_common {
    ($ty:ident) => {
        impl $ty {
            /// Allocate a fresh register of `width` qubits in `circuit`.
            ///
            /// The register starts in `|0...0⟩`.
            pub fn allocate(circuit: &mut Circuit, name: impl Into<String>, width: u32) -> Self {
                Self {
                    qubits: circuit.add_qreg(name, width),
                }
            }

            /// Wrap existing qubits, cell 0 first.
            pub fn from_qubits(qubits: impl IntoIterator<Item = QubitId>) -> Self {
                Self {
                    qubits: qubits.into_iter().collect(),
                }
            }

            /// Number of cells.
            pub fn len(&self) -> usize {
                self.qubits.len()
            }

            /// Whether the register has no cells.
            pub fn is_empty(&self) -> bool {
                self.qubits.is_empty()
            }

            /// The qubits, cell 0 first.
            pub fn qubits(&self) -> &[QubitId] {
                &self.qubits
            }

            /// The qubit of cell `index`.
            pub fn qubit(&self, index: usize) -> Option<QubitId> {
                self.qubits.get(index).copied()
            }
        }
    };
}

/// A register read least significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LittleEndian {
    qubits: Vec<QubitId>,
}

/// A register read most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BigEndian {
    qubits: Vec<QubitId>,
}

/// A little-endian register in the phase (Fourier) representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhaseLittleEndian {
    qubits: Vec<QubitId>,
}

register_common!(LittleEndian);
register_common!(BigEndian);
register_common!(PhaseLittleEndian);

impl LittleEndian {
    /// Set the register from `|0...0⟩` to `|value⟩` with X gates.
    pub fn prepare(&self, circuit: &mut Circuit, value: u64) -> ArithResult<()> {
        check_fits(value, self.len())?;
        for (i, &qubit) in self.qubits.iter().enumerate().take(64) {
            if (value >> i) & 1 == 1 {
                circuit.x(qubit)?;
            }
        }
        Ok(())
    }

    /// The same qubits read most significant bit first.
    pub fn to_big_endian(&self) -> BigEndian {
        BigEndian {
            qubits: self.qubits.iter().rev().copied().collect(),
        }
    }

    /// Reinterpret the qubits as holding the phase representation.
    pub fn as_phase(&self) -> PhaseLittleEndian {
        PhaseLittleEndian {
            qubits: self.qubits.clone(),
        }
    }
}

impl BigEndian {
    /// Set the register from `|0...0⟩` to `|value⟩` with X gates.
    pub fn prepare(&self, circuit: &mut Circuit, value: u64) -> ArithResult<()> {
        self.to_little_endian().prepare(circuit, value)
    }

    /// The same qubits read least significant bit first.
    pub fn to_little_endian(&self) -> LittleEndian {
        LittleEndian {
            qubits: self.qubits.iter().rev().copied().collect(),
        }
    }
}

impl PhaseLittleEndian {
    /// Reinterpret the qubits as holding the computational representation.
    pub fn as_little_endian(&self) -> LittleEndian {
        LittleEndian {
            qubits: self.qubits.clone(),
        }
    }
}

impl From<LittleEndian> for BigEndian {
    fn from(reg: LittleEndian) -> Self {
        reg.to_big_endian()
    }
}

impl From<BigEndian> for LittleEndian {
    fn from(reg: BigEndian) -> Self {
        reg.to_little_endian()
    }
}

fn check_fits(value: u64, width: usize) -> ArithResult<()> {
    if width < 64 && value >> width != 0 {
        return Err(ArithError::Overflow { value, width });
    }
    Ok(())
}
