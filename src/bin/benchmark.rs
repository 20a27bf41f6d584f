//! Generation and save/load throughput for growing grid sizes

use std::time::Instant;

use life_viewer::{Grid, persistence, step};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_step(grid: &Grid, iterations: u32) -> f64 {
    let mut grid = grid.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_round_trip(grid: &Grid, iterations: u32) -> Result<f64, persistence::PersistError> {
    let start = Instant::now();
    for _ in 0..iterations {
        let mut bytes = Vec::new();
        persistence::save(grid, &mut bytes)?;
        persistence::load(bytes.as_slice())?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), persistence::PersistError> {
    println!("=== Game of Life Benchmark ===\n");

    let sizes = [80, 160, 320, 640, 1280];
    let iterations = 20;
    let mut rng = StdRng::seed_from_u64(0x11fe);

    println!("{:>12} {:>12} {:>16} {:>14}", "Size", "Step ms", "Cells/sec", "Save+Load ms");
    println!("{:-<58}", "");

    for size in sizes {
        let grid = Grid::randomize(size, size, &mut rng);
        let step_ms = benchmark_step(&grid, iterations);
        let io_ms = benchmark_round_trip(&grid, iterations)?;
        let cells = (size * size) as f64;

        println!(
            "{:>12} {:>12.3} {:>15.1}M {:>14.3}",
            format!("{}x{}", size, size),
            step_ms,
            cells / (step_ms / 1000.0) / 1_000_000.0,
            io_ms
        );
    }

    Ok(())
}
