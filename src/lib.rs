use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;

pub mod bounds;
pub mod elimination;
pub mod machine;
pub mod matrix;
pub mod search;
pub mod solver;

pub use machine::{read_machines, Button, Machine};
pub use solver::{solve, Solution, Solver, SolverConfig, SolverError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    NoTargets(String),
    InvalidButtonIndexText(String),
    InvalidTargetText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoTargets(s) => write!(
                f,
                "Expect a list of targets in braces, but can't find one in text({}).",
                s
            ),
            Error::InvalidButtonIndexText(s) => {
                write!(f, "Invalid text({}) for counter index of button.", s)
            }
            Error::InvalidTargetText(s) => write!(f, "Invalid text({}) for target.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Maximum number of free-variable combinations searched for one machine.
    #[arg(long, default_value_t = SolverConfig::DEFAULT_SEARCH_CAP)]
    pub search_cap: usize,
    /// Search free-variable combinations of one machine in parallel.
    #[arg(long)]
    pub parallel_search: bool,
    #[arg(short, long)]
    pub verbose: bool,
}

impl CLIArgs {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.search_cap, self.parallel_search)
    }
}
