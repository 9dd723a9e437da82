//! Circuit runner on top of [`Statevector`].

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, instrument};

use phasekit_ir::Circuit;

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Simulator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Widest circuit the simulator accepts.
    pub max_qubits: u32,
    /// Amplitude tolerance used by [`Simulator::equivalent`].
    pub tolerance: f64,
}

impl SimulatorConfig {
    /// Set the maximum circuit width.
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set the comparison tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 20,
            tolerance: 1e-9,
        }
    }
}

/// Exact statevector simulator.
///
/// Memory grows as `2^n`; the default limit of 20 qubits keeps a state
/// around 16 MB.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator with a custom configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run `circuit` starting from `|0...0⟩`.
    pub fn run(&self, circuit: &Circuit) -> SimResult<Statevector> {
        self.check_width(circuit.num_qubits())?;
        self.run_from(circuit, Statevector::new(circuit.num_qubits()))
    }

    /// Run `circuit` starting from `initial`.
    #[instrument(skip(self, circuit, initial), fields(name = circuit.name()))]
    pub fn run_from(&self, circuit: &Circuit, initial: Statevector) -> SimResult<Statevector> {
        self.check_width(circuit.num_qubits())?;
        if initial.num_qubits() != circuit.num_qubits() {
            return Err(SimError::WidthMismatch {
                state: initial.num_qubits(),
                circuit: circuit.num_qubits(),
            });
        }

        let start = Instant::now();
        debug!(
            "Starting simulation: {} qubits, {} instructions",
            circuit.num_qubits(),
            circuit.num_ops()
        );

        let mut sv = initial;
        for inst in circuit.instructions() {
            sv.apply(inst);
        }

        debug!("Simulation completed in {:?}", start.elapsed());
        Ok(sv)
    }

    /// Whether two states agree amplitude-wise within the configured tolerance.
    pub fn equivalent(&self, a: &Statevector, b: &Statevector) -> bool {
        a.approx_eq(b, self.config.tolerance)
    }

    fn check_width(&self, num_qubits: usize) -> SimResult<()> {
        if num_qubits > self.config.max_qubits as usize {
            return Err(SimError::TooManyQubits {
                num_qubits,
                max_qubits: self.config.max_qubits,
            });
        }
        Ok(())
    }
}
