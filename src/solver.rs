use std::{cmp::Ordering, error, fmt::Display};

use log::debug;
use num::BigUint;

use crate::{
    bounds::Bounds, elimination::ReducedForm, machine::Machine, matrix::CoefficientMatrix,
    search::BoundedSearch,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// No count of presses reaches every target exactly.
    Infeasible,
    /// Searching needs more free-variable assignments than the cap allows,
    /// holds the cap and the count of assignments.
    SearchTooLarge(usize, BigUint),
}

impl Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::Infeasible => write!(f, "No presses of buttons reach the targets."),
            SolverError::SearchTooLarge(cap, size) => write!(
                f,
                "Free-variable search is too large: {} combinations exceed the cap({}).",
                size, cap
            ),
        }
    }
}

impl error::Error for SolverError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    search_cap: usize,
    parallel_search: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEARCH_CAP, false)
    }
}

impl SolverConfig {
    pub const DEFAULT_SEARCH_CAP: usize = 5_000_000;

    pub fn new(search_cap: usize, parallel_search: bool) -> Self {
        Self {
            search_cap,
            parallel_search,
        }
    }

    pub fn search_cap(&self) -> usize {
        self.search_cap
    }

    pub fn parallel_search(&self) -> bool {
        self.parallel_search
    }
}

/// Press count of every button. Solutions order by total presses first, then
/// by the press counts themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    presses: Vec<BigUint>,
    total: BigUint,
}

impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total
            .cmp(&other.total)
            .then_with(|| self.presses.cmp(&other.presses))
    }
}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Solution {
    pub fn new(presses: Vec<BigUint>) -> Self {
        let total = presses.iter().sum();
        Self { presses, total }
    }

    pub fn presses(&self) -> &[BigUint] {
        &self.presses
    }

    pub fn total(&self) -> &BigUint {
        &self.total
    }

    pub fn into_total(self) -> BigUint {
        self.total
    }
}

#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn min_solution(&self, machine: &Machine) -> Result<Solution, SolverError> {
        let matrix = CoefficientMatrix::from(machine);
        let reduced = ReducedForm::eliminate(&matrix)?;
        let bounds = Bounds::from(&matrix);
        let solution = BoundedSearch::new(&matrix, &reduced, &bounds).min_solution(&self.config)?;
        debug!(
            "Machine {} takes at least {} presses.",
            machine,
            solution.total()
        );

        Ok(solution)
    }

    pub fn min_presses(&self, machine: &Machine) -> Result<BigUint, SolverError> {
        self.min_solution(machine).map(Solution::into_total)
    }
}

/// Minimum count of presses for given machine to reach its targets, with the
/// default solver configuration.
pub fn solve(machine: &Machine) -> Result<BigUint, SolverError> {
    Solver::default().min_presses(machine)
}
