use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use overview_chart::{AnnualChart, RenderOptions};
use overview_core::{numbers, SampleConfig, SampleRng};

fn build_chart(months: usize) -> AnnualChart {
    let mut rng = SampleRng::new(42);
    let cfg = SampleConfig { count: 12, min: 80.0, max: 120.0, decimals: 2, ..SampleConfig::default() };
    let budget: Vec<f64> = numbers(&mut rng, &cfg).unwrap().into_iter().map(Option::unwrap_or_default).collect();
    let actual = budget[..months].iter().map(|b| b * 1.05).collect::<Vec<_>>();
    AnnualChart::from_monthly(&budget, &actual).unwrap()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &months in &[1usize, 6, 12] {
        group.bench_function(format!("months_{months}"), |b| {
            let ch = build_chart(months);
            let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
