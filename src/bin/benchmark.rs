//! Step timing for the serial and rayon neighbor counters

use std::time::Instant;

use pixel_life::{Algorithm, Generation, GridSpec};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(algorithm: Algorithm, seed_size: u32, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(0x11fe);
    let mut generation = Generation::random_square(GridSpec::default(), seed_size, &mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        generation = generation.step_with(algorithm);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Sparse step benchmark (board {0}x{0}) ===\n", GridSpec::DEFAULT_SIDE);

    let sizes = [90, 180, 360, 720];
    let iterations = 20;

    println!("{:>10} {:>12} {:>14} {:>10}", "Seed", "Sparse", "Sparse+Par", "Speedup");
    println!("{:-<50}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Sparse, size, iterations);
        let parallel_ms = benchmark(Algorithm::SparseParallel, size, iterations);

        println!(
            "{:>10} {:>12.2} {:>14.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
