use num::{BigInt, Signed, Zero};

use crate::machine::Machine;

/// Integer system `A·x = b` of one machine. Rows are counters and columns are
/// buttons, `A[j][k]` is how much one press of button k adds to counter j.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientMatrix {
    coefs: Vec<Vec<BigInt>>,
    targets: Vec<BigInt>,
    col_n: usize,
}

impl From<&Machine> for CoefficientMatrix {
    fn from(machine: &Machine) -> Self {
        let col_n = machine.button_n();
        let mut coefs = vec![vec![BigInt::zero(); col_n]; machine.counter_n()];
        for (col, button) in machine.buttons().iter().enumerate() {
            // Indices outside the counter range have nothing to increment.
            for &counter_ind in button.counter_inds() {
                if let Some(row) = coefs.get_mut(counter_ind) {
                    row[col] += 1u32;
                }
            }
        }
        let targets = machine
            .targets()
            .iter()
            .map(|target| BigInt::from(target.clone()))
            .collect();

        Self {
            coefs,
            targets,
            col_n,
        }
    }
}

impl CoefficientMatrix {
    pub fn new(coefs: Vec<Vec<BigInt>>, targets: Vec<BigInt>, col_n: usize) -> Self {
        assert!(
            coefs.len() == targets.len(),
            "Row count of coefficients should be equal to the count of targets"
        );
        assert!(
            targets.iter().all(|target| !target.is_negative()),
            "Targets should be non-negative"
        );
        assert!(
            coefs.iter().all(|row| row.len() == col_n),
            "Every row of coefficients should have {} columns",
            col_n
        );

        Self {
            coefs,
            targets,
            col_n,
        }
    }

    pub fn row_n(&self) -> usize {
        self.coefs.len()
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn coef(&self, row: usize, col: usize) -> &BigInt {
        &self.coefs[row][col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[BigInt]> {
        self.coefs.iter().map(|row| row.as_slice())
    }

    pub fn targets(&self) -> &[BigInt] {
        &self.targets
    }

    /// Computes `A·x`.
    pub fn apply(&self, x: &[BigInt]) -> Vec<BigInt> {
        assert!(
            x.len() == self.col_n,
            "Expect {} values to apply the coefficient matrix, but get {}",
            self.col_n,
            x.len()
        );

        self.coefs
            .iter()
            .map(|row| row.iter().zip(x).map(|(a, v)| a * v).sum::<BigInt>())
            .collect()
    }

    pub fn is_satisfied_by(&self, x: &[BigInt]) -> bool {
        x.len() == self.col_n && self.apply(x) == self.targets
    }
}
