//! Encoder hot-path micro-benchmark.
//!
//! `accumulate` runs once per segment load event and `read` from status
//! reporting; both must stay allocation-free and well under a microsecond.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use step_encoder::{EncoderConfig, EncoderSet, LinearKinematics, AXIS_COUNT, MOTOR_COUNT};

fn bench_accumulate(c: &mut Criterion) {
    let set = EncoderSet::new(&EncoderConfig::default());
    c.bench_function("accumulate_one_channel", |b| {
        b.iter(|| set.accumulate(black_box(0), black_box(7)).unwrap())
    });
}

fn bench_read(c: &mut Criterion) {
    let set = EncoderSet::new(&EncoderConfig::default());
    set.accumulate(0, 123_456).unwrap();
    c.bench_function("read_one_channel", |b| {
        b.iter(|| set.read(black_box(0)).unwrap())
    });
}

fn bench_align(c: &mut Criterion) {
    let set = EncoderSet::new(&EncoderConfig::default());
    let kin = LinearKinematics::new([80.0; MOTOR_COUNT]);
    let axis_position = [12.5, -3.25, 100.0, 0.0, 45.0, -45.0];
    assert_eq!(axis_position.len(), AXIS_COUNT);
    c.bench_function("align_all_channels", |b| {
        b.iter(|| set.align(&kin, black_box(&axis_position)).unwrap())
    });
}

criterion_group!(benches, bench_accumulate, bench_read, bench_align);
criterion_main!(benches);
