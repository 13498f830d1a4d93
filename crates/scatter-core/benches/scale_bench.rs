use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scatter_core::{scale, DataPoint, RenderOptions, ScatterChart, XAxisField};

fn synth_states(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| {
            let f = i as f64;
            DataPoint {
                state: format!("State {i}"),
                abbr: format!("S{}", i % 100),
                poverty: 8.0 + (f * 0.37).sin().abs() * 14.0,
                healthcare: 5.0 + (f * 0.21).cos().abs() * 18.0,
                obesity: 20.0 + (f * 0.13).sin().abs() * 16.0,
            }
        })
        .collect()
}

fn bench_x_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("x_domain");
    for &n in &[1_000usize, 100_000usize] {
        let data = synth_states(n);
        group.bench_function(format!("poverty_{n}"), |b| {
            b.iter(|| black_box(scale::x_domain(&data, XAxisField::Poverty)));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    group.sample_size(20);
    let chart = ScatterChart::new(synth_states(500));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    group.bench_function("states_500", |b| {
        b.iter(|| {
            let bytes = chart.render_to_png_bytes(&opts).expect("render");
            black_box(bytes);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_x_domain, bench_render);
criterion_main!(benches);
