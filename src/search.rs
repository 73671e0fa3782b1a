use log::{debug, warn};
use num::{BigInt, BigRational, BigUint, Zero};
use rayon::iter::{ParallelBridge, ParallelIterator};

use crate::{
    bounds::Bounds,
    elimination::ReducedForm,
    matrix::CoefficientMatrix,
    solver::{Solution, SolverConfig, SolverError},
};

/// Every assignment of values in `[0, limit]` to a list of variables, in
/// lexicographic order (the last variable changes fastest). An empty list of
/// limits has exactly one assignment, the empty one.
#[derive(Debug, Clone)]
pub struct FreeAssignments {
    limits: Vec<BigUint>,
    next: Option<Vec<BigUint>>,
}

impl FreeAssignments {
    pub fn new(limits: Vec<BigUint>) -> Self {
        let next = Some(vec![BigUint::zero(); limits.len()]);
        Self { limits, next }
    }
}

impl Iterator for FreeAssignments {
    type Item = Vec<BigUint>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut following = current.clone();
        for ind in (0..following.len()).rev() {
            if following[ind] < self.limits[ind] {
                following[ind] += 1u32;
                self.next = Some(following);
                break;
            }

            following[ind] = BigUint::zero();
        }

        Some(current)
    }
}

/// Solves the pivot variables of `reduced` with its free variables fixed to
/// `free_values`, from the last pivot row up. Returns `None` if some pivot
/// variable isn't an integer in its bound.
pub fn back_substitute(
    reduced: &ReducedForm,
    bounds: &Bounds,
    free_values: &[BigUint],
) -> Option<Vec<BigInt>> {
    assert!(
        free_values.len() == reduced.free_cols().len(),
        "Expect {} values for free columns, but get {}",
        reduced.free_cols().len(),
        free_values.len()
    );

    let mut x = vec![BigInt::zero(); reduced.col_n()];
    for (&col, value) in reduced.free_cols().iter().zip(free_values) {
        x[col] = BigInt::from(value.clone());
    }

    for (row, col) in reduced.pivot_rows_rev() {
        let pivot = reduced.coef(row, col);
        assert!(
            !pivot.is_zero(),
            "Pivot of row {} in column {} should be nonzero after elimination",
            row,
            col
        );

        let known_sum = ((col + 1)..reduced.col_n())
            .filter(|&c| !reduced.coef(row, c).is_zero() && !x[c].is_zero())
            .map(|c| reduced.coef(row, c) * BigRational::from_integer(x[c].clone()))
            .sum::<BigRational>();
        let value = (reduced.rhs(row) - known_sum) / pivot;
        if !value.is_integer() {
            return None;
        }

        let value = value.to_integer();
        if !bounds.admits(col, &value) {
            return None;
        }

        x[col] = value;
    }

    Some(x)
}

/// Exhaustive search for the solution with the fewest presses, over every
/// assignment of free variables within bounds.
#[derive(Debug, Clone, Copy)]
pub struct BoundedSearch<'a> {
    matrix: &'a CoefficientMatrix,
    reduced: &'a ReducedForm,
    bounds: &'a Bounds,
}

impl<'a> BoundedSearch<'a> {
    pub fn new(
        matrix: &'a CoefficientMatrix,
        reduced: &'a ReducedForm,
        bounds: &'a Bounds,
    ) -> Self {
        assert!(
            matrix.col_n() == reduced.col_n() && matrix.col_n() == bounds.len(),
            "Matrix, reduced form and bounds should describe the same buttons"
        );

        Self {
            matrix,
            reduced,
            bounds,
        }
    }

    /// Count of free-variable assignments to search.
    pub fn size(&self) -> BigUint {
        self.bounds.search_size(self.reduced.free_cols())
    }

    pub fn assignments(&self) -> FreeAssignments {
        FreeAssignments::new(
            self.reduced
                .free_cols()
                .iter()
                .map(|&col| self.bounds.get(col).clone())
                .collect(),
        )
    }

    /// Solution from given free values, if back substitution gives one that
    /// also satisfies the original system.
    pub fn candidate(&self, free_values: &[BigUint]) -> Option<Solution> {
        let x = back_substitute(self.reduced, self.bounds, free_values)?;
        if !self.matrix.is_satisfied_by(&x) {
            warn!(
                "Presses({:?}) from back substitution don't reach the targets, skip them.",
                x
            );
            return None;
        }

        x.iter()
            .map(BigInt::to_biguint)
            .collect::<Option<Vec<_>>>()
            .map(Solution::new)
    }

    pub fn min_solution(&self, config: &SolverConfig) -> Result<Solution, SolverError> {
        let size = self.size();
        // Without free columns the only candidate is the back-substituted one.
        if !self.reduced.free_cols().is_empty() && size > BigUint::from(config.search_cap()) {
            return Err(SolverError::SearchTooLarge(config.search_cap(), size));
        }

        debug!(
            "Search {} assignments of free columns {:?}.",
            size,
            self.reduced.free_cols()
        );
        let best = if config.parallel_search() {
            self.assignments()
                .par_bridge()
                .filter_map(|values| self.candidate(&values))
                .min()
        } else {
            self.assignments()
                .filter_map(|values| self.candidate(&values))
                .min()
        };

        best.ok_or(SolverError::Infeasible)
    }
}
