//! Throughput of elementwise and axis-reducing activations.
//!
//! Compares:
//! - cheap rectifiers against transcendental activations
//! - exact GELU against the tanh approximation
//! - softmax over the last axis against a joint reduction over two axes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array3;
use synapse::activations::{self, Activation, ReluOptions};

fn sample(batch: usize) -> Array3<f32> {
    Array3::from_shape_fn((batch, 32, 128), |(b, t, c)| {
        ((b * 31 + t * 7 + c) % 97) as f32 / 97.0 * 8.0 - 4.0
    })
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");
    let activations_under_test = [
        Activation::Relu(ReluOptions::default()),
        Activation::Sigmoid,
        Activation::Silu,
        Activation::Mish,
        Activation::Gelu { approximate: false },
        Activation::Gelu { approximate: true },
    ];

    // Batch 2 stays below the parallel threshold, batch 64 is well above it.
    for &batch in [2usize, 64].iter() {
        let input = sample(batch);
        for activation in activations_under_test.iter() {
            let id = format!("{:?}", activation);
            group.bench_with_input(BenchmarkId::new(id, batch), &input, |b, x| {
                b.iter(|| activation.apply(black_box(x)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_softmax(c: &mut Criterion) {
    let mut group = c.benchmark_group("softmax");
    for &batch in [2usize, 64].iter() {
        let input = sample(batch);
        group.bench_with_input(BenchmarkId::new("last_axis", batch), &input, |b, x| {
            b.iter(|| activations::softmax(black_box(x), -1).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("joint_axes", batch), &input, |b, x| {
            b.iter(|| activations::softmax(black_box(x), [1, 2]).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("log_softmax", batch), &input, |b, x| {
            b.iter(|| activations::log_softmax(black_box(x), -1).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_elementwise, bench_softmax);
criterion_main!(benches);
