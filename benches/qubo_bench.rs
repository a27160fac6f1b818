//! Criterion benchmarks for model construction and sampling.
//!
//! Uses generated instances at the default value/weight/category ranges.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_qubo::instance::{Instance, InstanceConfig, InstanceGenerator};
use u_qubo::model::{Calibration, CostModel, ModelBuilder, ModelConfig};
use u_qubo::sa::{SaConfig, SaSampler};
use u_qubo::solver::{ExhaustiveSampler, Sampler};

fn instance(n: usize) -> Instance {
    InstanceGenerator::generate(&InstanceConfig::default().with_num_items(n).with_seed(42))
        .expect("valid instance config")
}

fn model(instance: &Instance) -> CostModel {
    let config = Calibration::default()
        .calibrate(instance, &ModelConfig::default())
        .expect("calibration");
    ModelBuilder::new(instance, &config).build().expect("model")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_model");
    group.sample_size(20);

    for &n in &[25, 100, 400] {
        let inst = instance(n);
        let config = Calibration::default()
            .calibrate(&inst, &ModelConfig::default())
            .expect("calibration");
        group.bench_with_input(BenchmarkId::from_parameter(n), &(inst, config), |b, (i, c)| {
            b.iter(|| {
                let model = ModelBuilder::new(black_box(i), black_box(c)).build();
                black_box(model)
            })
        });
    }
    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_sample");
    group.sample_size(10);

    for &n in &[25, 100] {
        let m = model(&instance(n));
        let sampler = SaSampler::new(SaConfig::default().with_num_reads(4).with_seed(42));
        group.bench_with_input(BenchmarkId::from_parameter(n), &(m, sampler), |b, (m, s)| {
            b.iter(|| {
                let samples = s.sample(black_box(m));
                black_box(samples)
            })
        });
    }
    group.finish();
}

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_sample");
    group.sample_size(10);

    for &n in &[12, 16] {
        let m = model(&instance(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| {
                let samples = ExhaustiveSampler::new().sample(black_box(m));
                black_box(samples)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_sa, bench_exhaustive);
criterion_main!(benches);
