use std::{path::Path, time::Instant};

use pathmaze::{Generator, Grid, generate_maze, logging::init_file_logging, solve_maze};

const PROFILE_DIMENSION: u16 = 199;

fn main() -> pathmaze::Result<()> {
    let _guard = init_file_logging(Path::new("profile.log"), false);

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);

    let mut grid = Grid::new(PROFILE_DIMENSION, PROFILE_DIMENSION)?;
    for generator in Generator::ALL {
        let started = Instant::now();
        for seed in 0..num_iters as u64 {
            generate_maze(&mut grid, generator, Some(seed));
            solve_maze(&mut grid, (0, 0))?;
        }
        let elapsed = started.elapsed();
        tracing::info!("{} x{}: {:?}", generator, num_iters, elapsed);
        println!("{generator}: {num_iters} runs in {elapsed:?}");
    }
    Ok(())
}
