// File: crates/chart-core/benches/render_bench.rs
// Summary: Scene construction and SVG serialization throughput.

use chart_core::{render_svg, Chart, Record};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let year = 1990 + (i % 30) as i32;
            let seconds = 2200.0 + ((i * 37) % 180) as f64;
            let r = Record::new(year, seconds, format!("Rider {i}"), "FRA");
            if i % 3 == 0 { r.with_doping("EPO") } else { r }
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_svg");
    for &n in &[35usize, 5_000usize] {
        let chart = match Chart::new(build_records(n)) {
            Ok(chart) => chart,
            Err(e) => panic!("bench chart: {e}"),
        };
        group.bench_function(format!("scene_{n}"), |b| {
            b.iter(|| black_box(chart.scene()));
        });
        group.bench_function(format!("svg_{n}"), |b| {
            let scene = chart.scene();
            b.iter(|| black_box(render_svg(&scene)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
