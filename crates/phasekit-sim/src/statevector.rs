//! Statevector simulation engine.
//!
//! Qubit `q` is bit `q` of the amplitude index, so a little-endian register
//! on qubits `0..n` holding value `x` is the basis state with index `x`.

use num_complex::Complex64;
use std::f64::consts::{PI, TAU};

use phasekit_ir::{Instruction, StandardGate};

/// A statevector representing a quantum state.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        Self::basis_state(num_qubits, 0)
    }

    /// The computational basis state `|index⟩`.
    ///
    /// `index` is taken modulo `2^num_qubits`.
    pub fn basis_state(num_qubits: usize, index: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[index & (size - 1)] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// The Fourier (phase) encoding of `value` on qubits `0..num_qubits`.
    ///
    /// Qubit `j` carries the relative phase `exp(2πi·value / 2^(n-j))`, so
    /// the amplitude of basis state `k` is `exp(2πi·value·k / 2^n) / √2^n`.
    pub fn fourier_state(num_qubits: usize, value: u64) -> Self {
        let size = 1usize << num_qubits;
        let norm = 1.0 / (size as f64).sqrt();
        let amplitudes = (0..size)
            .map(|k| {
                let turns = (u128::from(value) * k as u128) % size as u128;
                Complex64::from_polar(norm, TAU * turns as f64 / size as f64)
            })
            .collect();
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// All amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude of one basis state.
    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    /// Probability of measuring basis state `index`.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// The basis state with the largest probability.
    pub fn most_likely(&self) -> usize {
        self.amplitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.norm_sqr().total_cmp(&b.norm_sqr()))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// `⟨self|other⟩`.
    pub fn inner_product(&self, other: &Statevector) -> Complex64 {
        self.amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    /// `|⟨self|other⟩|²`: 1 for states equal up to a global phase.
    pub fn fidelity(&self, other: &Statevector) -> f64 {
        self.inner_product(other).norm_sqr()
    }

    /// Amplitude-wise equality within `tolerance`, global phase included.
    pub fn approx_eq(&self, other: &Statevector, tolerance: f64) -> bool {
        self.num_qubits == other.num_qubits
            && self
                .amplitudes
                .iter()
                .zip(&other.amplitudes)
                .all(|(a, b)| (a - b).norm() < tolerance)
    }

    /// Apply an instruction to the statevector.
    ///
    /// Control qubits restrict the gate to the subspace where all of them
    /// are `|1⟩`.
    pub fn apply(&mut self, instruction: &Instruction) {
        let ctrl = instruction
            .controls
            .iter()
            .fold(0usize, |mask, q| mask | (1 << q.index()));
        let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.index()).collect();
        self.apply_standard_gate(&instruction.gate.kind, &qubits, ctrl);
    }

    /// Apply a standard gate under a control mask.
    fn apply_standard_gate(&mut self, gate: &StandardGate, qubits: &[usize], ctrl: usize) {
        match gate {
            StandardGate::I => {}
            StandardGate::X => self.apply_x(qubits[0], ctrl),
            StandardGate::Y => self.apply_y(qubits[0], ctrl),
            StandardGate::Z => self.apply_phase(qubits[0], PI, ctrl),
            StandardGate::H => self.apply_h(qubits[0], ctrl),
            StandardGate::S => self.apply_phase(qubits[0], PI / 2.0, ctrl),
            StandardGate::Sdg => self.apply_phase(qubits[0], -PI / 2.0, ctrl),
            StandardGate::T => self.apply_phase(qubits[0], PI / 4.0, ctrl),
            StandardGate::Tdg => self.apply_phase(qubits[0], -PI / 4.0, ctrl),
            StandardGate::Rz(theta) => self.apply_rz(qubits[0], *theta, ctrl),
            StandardGate::P(theta) => self.apply_phase(qubits[0], *theta, ctrl),

            // The first operand of a controlled gate is one more control line.
            StandardGate::CX => self.apply_x(qubits[1], ctrl | (1 << qubits[0])),
            StandardGate::CZ => self.apply_phase(qubits[1], PI, ctrl | (1 << qubits[0])),
            StandardGate::CP(theta) => {
                self.apply_phase(qubits[1], *theta, ctrl | (1 << qubits[0]));
            }
            StandardGate::Swap => self.apply_swap(qubits[0], qubits[1], ctrl),
        }
    }

    // =========================================================================
    // Gate kernels
    // =========================================================================

    fn apply_x(&mut self, qubit: usize, ctrl: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 && i & ctrl == ctrl {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize, ctrl: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 && i & ctrl == ctrl {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_h(&mut self, qubit: usize, ctrl: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 && i & ctrl == ctrl {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64, ctrl: usize) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 && i & ctrl == ctrl {
                *amp *= phase;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64, ctrl: usize) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & ctrl != ctrl {
                continue;
            }
            if i & mask == 0 {
                *amp *= phase_0;
            } else {
                *amp *= phase_1;
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize, ctrl: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            if i & mask1 != 0 && i & mask2 == 0 && i & ctrl == ctrl {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }
}
