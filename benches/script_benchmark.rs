//! Script rendering benchmarks.

use criterion::{criterion_group, criterion_main, Criterion};
use gnuviz::prelude::*;
use std::hint::black_box;

fn build_figure(points: usize) -> Figure {
    let x: Vec<f64> = (0..points).map(|i| i as f64 * 0.01).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();

    let mut fig = Figure::new();
    fig.autoclean(false);
    fig.x_range(0.0, points as f64 * 0.01);
    fig.draw(DrawStyle::Lines, &[&x, &y]).title("sin");
    fig.draw(DrawStyle::Points, &[&x, &y]).title("samples");
    fig
}

fn bench_render(c: &mut Criterion) {
    let fig = build_figure(10_000);
    c.bench_function("render_10k_points", |b| {
        b.iter(|| black_box(fig.render()));
    });
}

fn bench_draw(c: &mut Criterion) {
    c.bench_function("draw_10k_points", |b| {
        b.iter(|| black_box(build_figure(10_000)));
    });
}

criterion_group!(benches, bench_render, bench_draw);
criterion_main!(benches);
