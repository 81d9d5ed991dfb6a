//! mazeview — carve a maze, show it, then solve it in place.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use warren_carve::{Algorithm, Carver};
use warren_core::Grid;

/// Generate, display and solve a box-drawing maze.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze height in rows (default: fit the terminal)
    #[arg(long)]
    height: Option<i32>,

    /// Maze width in columns (default: fit the terminal)
    #[arg(long)]
    width: Option<i32>,

    /// Frontier discipline for carving
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Backtracker)]
    algorithm: AlgorithmArg,

    /// Percentage of dead ends to open into loops (0 disables the pass)
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
    dead_ends: u8,

    /// Seed for reproducible mazes (default: OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Solve immediately instead of waiting for enter
    #[arg(long)]
    no_pause: bool,
}

/// CLI mirror of [`Algorithm`], so unknown selectors are rejected at
/// parse time instead of silently aliasing to a variant.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum AlgorithmArg {
    Backtracker,
    Prim,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Backtracker => Algorithm::Backtracker,
            AlgorithmArg::Prim => Algorithm::Prim,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let (fit_height, fit_width) = warren_term::suggested_size();
    let height = args.height.unwrap_or(fit_height);
    let width = args.width.unwrap_or(fit_width);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let grid = Grid::new(height, width)?;
    let mut carver = Carver::with_grid(grid, rng);

    let carve_start = Instant::now();
    carver.carve(args.algorithm.into());
    if args.dead_ends > 0 {
        let opened = carver.open_dead_ends(args.dead_ends);
        debug!("opened {opened} dead ends at {}%", args.dead_ends);
    }
    let carve_time = carve_start.elapsed();
    debug!("carved {height}x{width} in {carve_time:?}");

    let mut grid = carver.into_grid();
    let mut stdout = io::stdout();
    warren_term::draw(&grid, &mut stdout)?;

    if !args.no_pause {
        write!(stdout, "press enter to solve")?;
        stdout.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    let solve_start = Instant::now();
    let path_len = warren_solve::solve(&mut grid)?;
    let solve_time = solve_start.elapsed();
    debug!("solved in {solve_time:?}");

    warren_term::draw(&grid, &mut stdout)?;
    writeln!(
        stdout,
        "{height}x{width} path={path_len} cells  carve={carve_time:?} solve={solve_time:?}"
    )?;
    Ok(())
}
