// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point: solve a batch of textual grids.

use clap::Parser;
use harvest_planner::{Grid, Solver};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Plan push groups and adhesive materials for a batch of growth grids.
#[derive(Debug, Parser)]
#[command(name = "harvest", version, about)]
struct Args {
    /// Batch file: textual grids separated by blank lines.
    file: PathBuf,

    /// Number of randomized partition attempts per grid.
    #[arg(long, default_value_t = 1)]
    trials: usize,

    /// Fix the RNG seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let text = match fs::read_to_string(&args.file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{}: {}", args.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let mut solver = Solver::new().with_trials(args.trials);
    if let Some(seed) = args.seed {
        solver = solver.with_seed(seed);
    }

    for (index, grid) in Grid::parse_batch(&text).iter().enumerate() {
        match solver.solve(grid) {
            Ok(solution) => {
                println!(
                    "grid {}: {} groups, {:.1}% coverage, {} cells organized",
                    index,
                    solution.group_count(),
                    solution.coverage() * 100.0,
                    solution.organized_cell_count()
                );
                print!("{}", solution.render());
                for violation in solution.violations() {
                    eprintln!("  violation: {}", violation);
                }
            }
            Err(err) => {
                eprintln!("grid {}: {}", index, err);
                return ExitCode::FAILURE;
            }
        }
        println!();
    }
    ExitCode::SUCCESS
}
