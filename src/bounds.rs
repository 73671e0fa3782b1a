use num::{BigInt, BigUint, One, Signed, Zero};

use crate::matrix::CoefficientMatrix;

/// Upper bound of the press count of every button.
///
/// A feasible assignment has `A[j][k]·x[k] <= b[j]` for every counter j, since
/// no button decrements a counter. So `x[k]` can't exceed `floor(b[j] / A[j][k])`
/// for any j with `A[j][k] > 0`, and the smallest of these ratios is used.
/// A button affecting no counter is bounded by 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    bounds: Vec<BigUint>,
}

impl From<&CoefficientMatrix> for Bounds {
    fn from(matrix: &CoefficientMatrix) -> Self {
        let bounds = (0..matrix.col_n())
            .map(|col| {
                matrix
                    .rows()
                    .zip(matrix.targets())
                    .filter(|(row, _)| row[col].is_positive())
                    .map(|(row, target)| target.magnitude() / row[col].magnitude())
                    .min()
                    .unwrap_or_else(BigUint::zero)
            })
            .collect();

        Self { bounds }
    }
}

impl Bounds {
    pub fn new(bounds: Vec<BigUint>) -> Self {
        Self { bounds }
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub fn get(&self, col: usize) -> &BigUint {
        &self.bounds[col]
    }

    pub fn as_slice(&self) -> &[BigUint] {
        &self.bounds
    }

    /// Whether `value` lies in `[0, bound]` of given column.
    pub fn admits(&self, col: usize, value: &BigInt) -> bool {
        !value.is_negative() && value.magnitude() <= &self.bounds[col]
    }

    /// Count of assignments to given columns within their bounds, i.e. the
    /// product of `bound + 1` over them.
    pub fn search_size(&self, cols: &[usize]) -> BigUint {
        cols.iter()
            .map(|&col| &self.bounds[col] + BigUint::one())
            .product()
    }
}
