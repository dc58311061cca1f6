use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use overview_core::{numbers, project_annual, SampleConfig, SampleRng};

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbers");
    for &count in &[12usize, 10_000usize] {
        let cfg = SampleConfig { count, ..SampleConfig::default() };
        group.bench_with_input(BenchmarkId::from_parameter(count), &cfg, |b, cfg| {
            let mut rng = SampleRng::new(42);
            b.iter(|| black_box(numbers(&mut rng, cfg)));
        });
    }
    group.finish();
}

fn bench_project(c: &mut Criterion) {
    let budget = [100.0f64; 12];
    let actual = [90.0, 95.0, 105.0, 99.0, 101.0];
    c.bench_function("project_annual", |b| {
        b.iter(|| black_box(project_annual(black_box(&budget), black_box(&actual))))
    });
}

criterion_group!(benches, bench_numbers, bench_project);
criterion_main!(benches);
