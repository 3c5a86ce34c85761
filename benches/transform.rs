//! Benchmarks for the transforms and filters.
//!
//! Run with: cargo bench
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use chfourier::{CFft1D, CFft2D, Field2D, FilterMode, GaussianFilter, Nft1D};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex;
use std::hint::black_box;

fn test_signal(len: usize) -> Vec<Complex<f64>> {
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            Complex::new(
                (t * 5.0 * std::f64::consts::TAU).sin(),
                (t * 13.0 * std::f64::consts::TAU).cos() * 0.5,
            )
        })
        .collect()
}

fn test_image(size: usize) -> Field2D<f64> {
    let pixels = (0..size * size)
        .map(|i| ((i % size) ^ (i / size)) as f64 / size as f64)
        .collect::<Vec<_>>();
    Field2D::from_real(size, size, &pixels).unwrap()
}

fn bench_fft_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_1d");
    for log2 in [6, 10, 12] {
        let len = 1 << log2;
        let signal = test_signal(len);
        let mut fft = CFft1D::<f64>::with_len(len).unwrap();

        group.bench_with_input(BenchmarkId::new("recursive", len), &signal, |b, s| {
            b.iter(|| black_box(fft.forward(s).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("in_place", len), &signal, |b, s| {
            let mut buf = s.clone();
            b.iter(|| {
                fft.forwardi(&mut buf).unwrap();
                black_box(&buf);
            });
        });
    }
    group.finish();
}

fn bench_nft_1d(c: &mut Criterion) {
    let signal = test_signal(256);
    let mut nft = Nft1D::<f64>::with_len(256).unwrap();

    c.bench_function("nft_256", |b| {
        b.iter(|| black_box(nft.forward(&signal).unwrap()));
    });
}

fn bench_fft_2d(c: &mut Criterion) {
    let image = test_image(256);
    let mut fft = CFft2D::<f64>::with_len(256, 256).unwrap();

    c.bench_function("fft_2d_256x256", |b| {
        b.iter(|| {
            let mut field = image.clone();
            fft.forward(&mut field).unwrap();
            black_box(field);
        });
    });
}

fn bench_filter(c: &mut Criterion) {
    let image = test_image(256);
    let filter = GaussianFilter::<f64>::default();

    c.bench_function("low_pass_256x256", |b| {
        b.iter(|| {
            let mut field = image.clone();
            filter.process(&mut field, FilterMode::LowPass).unwrap();
            black_box(field);
        });
    });
}

criterion_group!(
    benches,
    bench_fft_1d,
    bench_nft_1d,
    bench_fft_2d,
    bench_filter
);
criterion_main!(benches);
