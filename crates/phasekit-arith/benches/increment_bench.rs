//! Benchmarks for register increments
//!
//! Run with: cargo bench -p phasekit-arith

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use phasekit_arith::{LittleEndian, PhaseIncrement, PhaseLittleEndian, increment_by_integer};
use phasekit_ir::Circuit;
use phasekit_ops::{Controlled, Operation};
use phasekit_sim::Simulator;

/// Benchmark emitting the phase rotations alone
fn bench_phase_increment(c: &mut Criterion) {
    let mut group = c.benchmark_group("phase_increment");

    for width in &[4u32, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("emit", width), width, |b, &n| {
            b.iter(|| {
                let mut circuit = Circuit::new("bench");
                let reg = PhaseLittleEndian::allocate(&mut circuit, "x", n);
                PhaseIncrement::new(black_box(0x5555_5555))
                    .apply(&mut circuit, &reg)
                    .unwrap();
                circuit
            });
        });
    }

    group.finish();
}

/// Benchmark emitting the QFT-conjugated increment, plain and controlled
fn bench_increment_by_integer(c: &mut Criterion) {
    let mut group = c.benchmark_group("increment_by_integer");

    for width in &[4u32, 16, 64] {
        group.bench_with_input(BenchmarkId::new("emit", width), width, |b, &n| {
            b.iter(|| {
                let mut circuit = Circuit::new("bench");
                let reg = LittleEndian::allocate(&mut circuit, "x", n);
                increment_by_integer(black_box(7))
                    .apply(&mut circuit, &reg)
                    .unwrap();
                circuit
            });
        });

        group.bench_with_input(BenchmarkId::new("emit_controlled", width), width, |b, &n| {
            b.iter(|| {
                let mut circuit = Circuit::new("bench");
                let reg = LittleEndian::allocate(&mut circuit, "x", n);
                let ctl = circuit.add_qubit();
                increment_by_integer(black_box(7))
                    .apply_controlled(&mut circuit, &[ctl], &reg)
                    .unwrap();
                circuit
            });
        });
    }

    group.finish();
}

/// Benchmark simulating the increment end to end
fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_increment");
    let sim = Simulator::new();

    for width in &[4u32, 8, 12] {
        let mut circuit = Circuit::new("bench");
        let reg = LittleEndian::allocate(&mut circuit, "x", *width);
        reg.prepare(&mut circuit, 1).unwrap();
        increment_by_integer(3).apply(&mut circuit, &reg).unwrap();

        group.bench_with_input(BenchmarkId::new("run", width), &circuit, |b, circuit| {
            b.iter(|| sim.run(black_box(circuit)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_phase_increment,
    bench_increment_by_integer,
    bench_simulation
);
criterion_main!(benches);
