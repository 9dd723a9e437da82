//! Register increment demo: prepare, add a constant, simulate, read back.

use anyhow::{Context, ensure};
use serde::Serialize;
use tracing::info;

use phasekit_arith::{BigEndian, LittleEndian, increment_by_integer, increment_by_integer_be};
use phasekit_ir::Circuit;
use phasekit_ops::{Adjoint, Controlled, ControlledAdjoint, Operation};
use phasekit_sim::{Simulator, SimulatorConfig};

/// Register ordering used by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ordering {
    /// Least significant qubit first.
    LittleEndian,
    /// Most significant qubit first.
    BigEndian,
}

/// Inputs of one demo run.
#[derive(Debug, Clone, Serialize)]
pub struct IncrementDemo {
    /// Register width in qubits.
    pub width: u32,
    /// Initial register value.
    pub value: u64,
    /// Constant to add.
    pub amount: u64,
    /// Register ordering.
    pub ordering: Ordering,
    /// Subtract instead of add.
    pub adjoint: bool,
    /// Gate the increment on an extra control qubit set to `|1⟩`.
    pub controlled: bool,
}

/// What the demo observed.
#[derive(Debug, Clone, Serialize)]
pub struct IncrementReport {
    /// The inputs.
    pub demo: IncrementDemo,
    /// Classically computed result.
    pub expected: u64,
    /// Most likely register value after simulation.
    pub measured: u64,
    /// Probability of the measured value.
    pub probability: f64,
    /// Number of emitted instructions.
    pub num_ops: usize,
    /// Number of instructions carrying controls.
    pub num_controlled_ops: usize,
    /// Circuit depth.
    pub depth: usize,
}

impl IncrementDemo {
    /// The classically expected register value.
    pub fn expected(&self) -> u64 {
        let modulus = 1u128 << self.width;
        let value = u128::from(self.value);
        let amount = u128::from(self.amount) % modulus;
        let result = if self.adjoint {
            (value + modulus - amount) % modulus
        } else {
            (value + amount) % modulus
        };
        result as u64
    }

    /// Build the circuit: register (plus control qubit when controlled),
    /// preparation, increment.
    pub fn build(&self) -> anyhow::Result<Circuit> {
        let mut circuit = Circuit::new("increment");
        match self.ordering {
            Ordering::LittleEndian => {
                let reg = LittleEndian::allocate(&mut circuit, "x", self.width);
                reg.prepare(&mut circuit, self.value)?;
                let op = increment_by_integer(self.amount);
                self.emit(&mut circuit, &op, &reg)?;
            }
            Ordering::BigEndian => {
                let reg = BigEndian::allocate(&mut circuit, "x", self.width);
                reg.prepare(&mut circuit, self.value)?;
                let op = increment_by_integer_be(self.amount);
                self.emit(&mut circuit, &op, &reg)?;
            }
        }
        Ok(circuit)
    }

    fn emit<T, O>(&self, circuit: &mut Circuit, op: &O, target: &T) -> anyhow::Result<()>
    where
        O: ControlledAdjoint<T>,
    {
        if self.controlled {
            let ctl = circuit.add_qubit();
            circuit.x(ctl)?;
            if self.adjoint {
                op.apply_controlled_adjoint(circuit, &[ctl], target)?;
            } else {
                op.apply_controlled(circuit, &[ctl], target)?;
            }
        } else if self.adjoint {
            op.apply_adjoint(circuit, target)?;
        } else {
            op.apply(circuit, target)?;
        }
        Ok(())
    }

    /// Build, simulate and read back the register.
    pub fn run(&self, config: SimulatorConfig) -> anyhow::Result<IncrementReport> {
        ensure!(self.width < 64, "register width must be below 64 qubits");
        ensure!(
            self.value >> self.width == 0,
            "value {} does not fit in {} qubits",
            self.value,
            self.width
        );

        info!(
            width = self.width,
            value = self.value,
            amount = self.amount,
            ordering = ?self.ordering,
            "running increment demo"
        );
        let circuit = self.build().context("building increment circuit")?;
        let state = Simulator::with_config(config)
            .run(&circuit)
            .context("simulating increment circuit")?;

        let index = state.most_likely();
        let register_bits = index & ((1usize << self.width) - 1);
        let measured = match self.ordering {
            Ordering::LittleEndian => register_bits as u64,
            Ordering::BigEndian => reverse_bits(register_bits as u64, self.width),
        };

        Ok(IncrementReport {
            demo: self.clone(),
            expected: self.expected(),
            measured,
            probability: state.probability(index),
            num_ops: circuit.num_ops(),
            num_controlled_ops: circuit.num_controlled_ops(),
            depth: circuit.depth(),
        })
    }
}

fn reverse_bits(value: u64, width: u32) -> u64 {
    (0..width).fold(0, |acc, i| (acc << 1) | ((value >> i) & 1))
}
