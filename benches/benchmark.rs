//! Benchmarks for the rotor machine.
//!
//! Measures setting-line configuration, single-symbol stepping and
//! message throughput across message lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{Machine, MachineConfig};

/// Setting used consistently across all benchmarks.
const BENCH_SETTING: &str = "* B Beta III IV I AXLE AAAA (HQ) (EX) (IP) (TR) (BY)";

fn configured_machine() -> Machine {
    let mut machine = MachineConfig::naval().unwrap().build_machine().unwrap();
    machine.setup(BENCH_SETTING).unwrap();
    machine
}

/// Benchmarks parsing the naval machine description.
fn bench_config_parse(c: &mut Criterion) {
    c.bench_function("config_parse", |b| {
        b.iter(|| MachineConfig::parse(black_box(enigma::config::NAVAL_CONFIG)).unwrap());
    });
}

/// Benchmarks `Machine::setup()`: rotor loading, pawl wiring, positions,
/// rings and plugboard.
fn bench_setup(c: &mut Criterion) {
    let mut machine = MachineConfig::naval().unwrap().build_machine().unwrap();
    c.bench_function("setup", |b| {
        b.iter(|| machine.setup(black_box(BENCH_SETTING)).unwrap());
    });
}

/// Benchmarks one `step_and_convert()` call. Rotor state advances
/// naturally between iterations.
fn bench_step_and_convert(c: &mut Criterion) {
    let mut machine = configured_machine();
    let mut group = c.benchmark_group("step_and_convert");
    group.throughput(Throughput::Elements(1));
    group.bench_function("single_symbol", |b| {
        b.iter(|| machine.step_and_convert(black_box(7)).unwrap());
    });
    group.finish();
}

/// Benchmarks `convert_text()` throughput for several message lengths.
fn bench_convert_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_text");

    for len in [16usize, 256, 4096] {
        let message: String = "FROMHISSHOULDERHIAWATHA".chars().cycle().take(len).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &message, |b, message| {
            let mut machine = configured_machine();
            b.iter(|| machine.convert_text(black_box(message)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_config_parse,
    bench_setup,
    bench_step_and_convert,
    bench_convert_text
);
criterion_main!(benches);
