#![allow(dead_code)]

use day10::{matrix::CoefficientMatrix, Button, Machine};
use num::{BigInt, BigUint};
use rand::{rngs::SmallRng, Rng, SeedableRng};

pub fn machine(buttons: &[&[usize]], targets: &[u64]) -> Machine {
    Machine::new(
        buttons.iter().map(|b| Button::new(b.to_vec())).collect(),
        targets.iter().map(|&t| BigUint::from(t)).collect(),
    )
}

pub fn big_uints(values: &[u64]) -> Vec<BigUint> {
    values.iter().map(|&v| BigUint::from(v)).collect()
}

pub fn big_ints(values: &[i64]) -> Vec<BigInt> {
    values.iter().map(|&v| BigInt::from(v)).collect()
}

/// Smallest press total over every press vector with each count in
/// `[0, max target]`, together with every press vector reaching it.
pub fn brute_force_min(matrix: &CoefficientMatrix) -> Option<(BigInt, Vec<Vec<BigInt>>)> {
    let limit = matrix
        .targets()
        .iter()
        .max()
        .cloned()
        .unwrap_or_default();
    let col_n = matrix.col_n();
    let mut x = vec![BigInt::from(0); col_n];
    let mut best: Option<(BigInt, Vec<Vec<BigInt>>)> = None;
    loop {
        if matrix.is_satisfied_by(&x) {
            let total = x.iter().sum::<BigInt>();
            let is_better = best
                .as_ref()
                .map_or(true, |(best_total, _)| total < *best_total);
            if is_better {
                best = Some((total, vec![x.clone()]));
            } else if let Some((best_total, best_xs)) = &mut best {
                if *best_total == total {
                    best_xs.push(x.clone());
                }
            }
        }

        let mut ind = col_n;
        loop {
            if ind == 0 {
                return best;
            }

            ind -= 1;
            if x[ind] < limit {
                x[ind] += 1u32;
                break;
            }

            x[ind] = BigInt::from(0);
        }
    }
}

/// Small machines with random buttons and targets, the same ones for the same
/// seed.
pub struct RandomMachines {
    rng: SmallRng,
}

impl RandomMachines {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn machine(&mut self) -> Machine {
        let counter_n = self.rng.gen_range(1..=3);
        let button_n = self.rng.gen_range(1..=4);
        let buttons = (0..button_n)
            .map(|_| {
                let size = self.rng.gen_range(0..=counter_n);
                Button::new(
                    (0..size)
                        .map(|_| self.rng.gen_range(0..counter_n))
                        .collect(),
                )
            })
            .collect();
        let targets = (0..counter_n)
            .map(|_| BigUint::from(self.rng.gen_range(0..5u32)))
            .collect();

        Machine::new(buttons, targets)
    }
}
