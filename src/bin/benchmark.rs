//! Throughput benchmark for the sparse generation engine

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use sparse_life::domain::{World, presets};

fn benchmark_soup(size: i64, iterations: u32) -> (f64, usize) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut world = World::random(size, size, 0.5, &mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        world = world.step();
    }
    let ms_per_gen = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms_per_gen, world.population())
}

fn benchmark_glider_gun(generations: u32) -> (f64, usize) {
    let mut world = presets::glider_gun().to_world(0, 0);

    let start = Instant::now();
    for _ in 0..generations {
        world = world.step();
    }
    let ms_per_gen = start.elapsed().as_secs_f64() * 1000.0 / generations as f64;
    (ms_per_gen, world.population())
}

fn main() {
    println!("=== Sparse Life Throughput Benchmark ===\n");

    let sizes = [30, 100, 300, 1000];
    let iterations = 50;

    println!("{:>12} {:>14} {:>14}", "Soup", "ms/gen", "Final pop");
    println!("{:-<42}", "");

    for size in sizes {
        let (ms, pop) = benchmark_soup(size, iterations);
        println!(
            "{:>12} {:>14.3} {:>14}",
            format!("{}x{}", size, size),
            ms,
            pop
        );
    }

    println!("\n=== Gosper Glider Gun (unbounded growth) ===\n");

    let generations = 1000;
    let (ms, pop) = benchmark_glider_gun(generations);
    println!("{generations} generations: {ms:.3} ms/gen, {pop} live cells at the end");
}
