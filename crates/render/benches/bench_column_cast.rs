use std::hint::black_box;
use std::time::Instant;

use gridray_common::Pose;
use gridray_kernel::GridMap;
use gridray_render::{ColumnCaster, FrameRenderer, RenderConfig};

fn bench_single_column(max_steps: u32, iterations: usize) {
    let grid = GridMap::bordered_box(64, 64).unwrap();
    let config = RenderConfig {
        fov_degrees: 80,
        max_steps,
        ..Default::default()
    };
    let caster = ColumnCaster::new(&grid, &config);
    let pose = Pose::at(32.0, 32.0);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(caster.cast(black_box(&pose), black_box(40)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  single cast (max_steps={max_steps}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_full_frame(fov: u32, iterations: usize) {
    let grid = GridMap::bordered_box(64, 64).unwrap();
    let config = RenderConfig {
        fov_degrees: fov,
        max_steps: 2000,
        ..Default::default()
    };
    let renderer = FrameRenderer::new(config).unwrap();
    let pose = Pose::at(32.0, 32.0);

    let start = Instant::now();
    for _ in 0..iterations {
        let count = renderer.render_frame(black_box(&pose), black_box(&grid)).count();
        black_box(count);
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  full frame (fov={fov}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Column Cast Benchmarks ===\n");

    println!("Single column:");
    bench_single_column(500, 10_000);
    bench_single_column(2000, 2_000);
    bench_single_column(10_000, 500);

    println!("\nFull frame:");
    bench_full_frame(30, 1_000);
    bench_full_frame(80, 500);
    bench_full_frame(120, 200);

    println!("\n=== Done ===");
}
