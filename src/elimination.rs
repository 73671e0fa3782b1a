use std::iter;

use log::debug;
use num::{BigRational, Zero};

use crate::{matrix::CoefficientMatrix, solver::SolverError};

/// Augmented system `[A | b]` after Gauss-Jordan elimination over the
/// rationals. Every pivot column is zero in all rows but its pivot row, and
/// rows without pivot have all-zero coefficients.
#[derive(Debug, Clone)]
pub struct ReducedForm {
    rows: Vec<Vec<BigRational>>,
    pivot_cols: Vec<Option<usize>>,
    free_cols: Vec<usize>,
    col_n: usize,
}

impl ReducedForm {
    /// Reduces the system of given matrix, fails with
    /// [`SolverError::Infeasible`] if the system has no rational solution.
    pub fn eliminate(matrix: &CoefficientMatrix) -> Result<Self, SolverError> {
        let row_n = matrix.row_n();
        let col_n = matrix.col_n();
        let mut rows = matrix
            .rows()
            .zip(matrix.targets())
            .map(|(coefs, target)| {
                coefs
                    .iter()
                    .chain(iter::once(target))
                    .map(|v| BigRational::from_integer(v.clone()))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let mut pivot_cols = vec![None; row_n];
        let mut pivot_row = 0;
        for col in 0..col_n {
            if pivot_row == row_n {
                break;
            }

            if let Some(found_row) = (pivot_row..row_n).find(|&r| !rows[r][col].is_zero()) {
                rows.swap(pivot_row, found_row);
                pivot_cols[pivot_row] = Some(col);
                let pivot = rows[pivot_row].clone();
                for (r, row) in rows.iter_mut().enumerate() {
                    if r == pivot_row || row[col].is_zero() {
                        continue;
                    }

                    // Entries left of col are zero in the pivot row.
                    let factor = &row[col] / &pivot[col];
                    for c in col..=col_n {
                        row[c] -= &factor * &pivot[c];
                    }
                }

                pivot_row += 1;
            }
        }

        let free_cols = (0..col_n)
            .filter(|col| !pivot_cols.contains(&Some(*col)))
            .collect::<Vec<_>>();
        let reduced = Self {
            rows,
            pivot_cols,
            free_cols,
            col_n,
        };
        if let Some(row) = reduced.inconsistent_row() {
            debug!(
                "Row {} of the reduced system reads 0 = {}, no solution exists.",
                row,
                reduced.rhs(row)
            );
            return Err(SolverError::Infeasible);
        }

        debug!(
            "Reduced {}x{} system to rank {} with free columns {:?}.",
            row_n,
            col_n,
            reduced.rank(),
            reduced.free_cols
        );
        Ok(reduced)
    }

    pub fn row_n(&self) -> usize {
        self.rows.len()
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn rank(&self) -> usize {
        self.pivot_cols.iter().flatten().count()
    }

    /// Pivot column of each row, `None` for rows without pivot.
    pub fn pivot_cols(&self) -> &[Option<usize>] {
        &self.pivot_cols
    }

    /// Columns without pivot, in increasing order.
    pub fn free_cols(&self) -> &[usize] {
        &self.free_cols
    }

    pub fn coef(&self, row: usize, col: usize) -> &BigRational {
        &self.rows[row][col]
    }

    pub fn rhs(&self, row: usize) -> &BigRational {
        &self.rows[row][self.col_n]
    }

    /// Rows with pivot as `(row, pivot column)`, from the last one to the first.
    pub fn pivot_rows_rev(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pivot_cols
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(row, col)| col.map(|col| (row, col)))
    }

    fn inconsistent_row(&self) -> Option<usize> {
        (0..self.row_n()).find(|&row| {
            self.rows[row][..self.col_n].iter().all(|v| v.is_zero()) && !self.rhs(row).is_zero()
        })
    }
}
