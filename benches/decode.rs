//! Benchmarks for record decoding and matrix arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vision::cifar::RecordLayout;
use vision::prelude::*;

fn synthetic_records(count: usize) -> Vec<u8> {
    let layout = RecordLayout::default();
    (0..count * layout.record_size())
        .map(|i| (i % 251) as u8)
        .collect()
}

fn bench_decoder_views(c: &mut Criterion) {
    let decoder = RecordDecoder::from_bytes(synthetic_records(64), RecordLayout::default())
        .expect("whole records");
    let mut group = c.benchmark_group("decoder_views");

    group.bench_function("planar", |b| {
        b.iter(|| decoder.planar(black_box(17)).expect("in range"));
    });
    group.bench_function("interleaved", |b| {
        b.iter(|| decoder.interleaved(black_box(17)).expect("in range"));
    });
    group.bench_function("channel", |b| {
        b.iter(|| decoder.channel(black_box(17), Channel::Green).expect("in range"));
    });

    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    for size in [8, 32, 64].iter() {
        let data: Vec<f32> = (0..size * size).map(|i| (i % 17) as f32).collect();
        let a = Matrix::from_vec(*size, *size, data).expect("square");
        let b = a.transpose();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| black_box(&a).matmul(black_box(&b)).expect("square"));
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let decoder = RecordDecoder::from_bytes(synthetic_records(4), RecordLayout::default())
        .expect("whole records");
    let model = make_classifier::<f32>(20, 3072, ClassifierKind::Linear);
    let input: Matrix<f32> = decoder.planar(0).expect("record 0").cast();

    c.bench_function("score_coarse", |b| {
        b.iter(|| model.score(black_box(&input)).expect("3072 features"));
    });
}

criterion_group!(benches, bench_decoder_views, bench_matmul, bench_classify);
criterion_main!(benches);
