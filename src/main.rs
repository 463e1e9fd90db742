use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

use pathmaze::{
    Generator, Grid, generate_maze, logging::init_file_logging, maze::DEFAULT_DIMENSION,
    solve_maze,
};

/// Generate a perfect maze and solve it with breadth-first search.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Lattice rows, walls included (odd, at least 3)
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    rows: u16,

    /// Lattice columns, walls included (odd, at least 3)
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    cols: u16,

    /// Maze generation algorithm
    #[arg(long, value_enum, default_value_t = Generator::Backtrack)]
    generator: Generator,

    /// Seed for a reproducible maze
    #[arg(long)]
    seed: Option<u64>,

    /// Path-cell row to solve from
    #[arg(long, default_value_t = 0)]
    start_row: u16,

    /// Path-cell column to solve from
    #[arg(long, default_value_t = 0)]
    start_col: u16,

    /// Only generate, do not solve
    #[arg(long)]
    no_solve: bool,

    /// File that receives the log output
    #[arg(long, default_value = "pathmaze.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> pathmaze::Result<()> {
    let mut grid = Grid::new(args.rows, args.cols)?;

    println!("{}:", args.generator);
    generate_maze(&mut grid, args.generator, args.seed);
    println!("{grid}");

    if args.no_solve {
        return Ok(());
    }

    let start = (args.start_row, args.start_col);
    let path = solve_maze(&mut grid, start)?;
    println!("Breadth-first route from {:?}, {} steps:", start, path.len() - 1);
    println!("{grid}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = init_file_logging(&args.log_file, args.verbose);
    tracing::info!("Started with {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
