// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, Criterion};
use sensor_display_core::{format_reading, SensorSample};
use std::hint::black_box;

fn bench_format_reading(c: &mut Criterion) {
    c.bench_function("format_reading", |b| {
        b.iter(|| format_reading(black_box(-12.345_678)));
    });
}

fn bench_decode_payload(c: &mut Criterion) {
    let payload = SensorSample::new(0.25, -1.5, 9.81).to_payload();

    c.bench_function("decode_payload", |b| {
        b.iter(|| SensorSample::from_payload(black_box(&payload)));
    });
}

criterion_group!(benches, bench_format_reading, bench_decode_payload);
criterion_main!(benches);
