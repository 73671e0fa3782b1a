use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use day10::{CLIArgs, Solver, SolverError};
use log::LevelFilter;
use num::BigUint;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    configure_logging(args.verbose);
    let machines = day10::read_machines(&args.input_path).with_context(|| {
        format!(
            "Failed to read machines from given file({}).",
            args.input_path.display()
        )
    })?;

    let solver = Solver::new(args.solver_config());
    let results = machines
        .par_iter()
        .map(|machine| solver.min_presses(machine))
        .collect::<Vec<_>>();
    let mut min_presses_sum = BigUint::default();
    for (ind, (machine, result)) in machines.iter().zip(results).enumerate() {
        match result {
            Ok(min_presses) => {
                println!("Machine {}: min presses = {}", ind + 1, min_presses);
                min_presses_sum += min_presses;
            }
            Err(SolverError::Infeasible) => {
                println!("Machine {}: no solution", ind + 1);
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to solve machine {}({}).", ind + 1, machine)
                })
            }
        }
    }

    println!(
        "The sum of minimum presses to configure joltage of given machines is {}.",
        min_presses_sum
    );

    Ok(())
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "{} {}", record.level(), record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
}
