//! Brute-force execution loop.

use super::combinations::next_combination;
use crate::instance::Instance;

/// Result of an exhaustive enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForceResult {
    /// Profit of the best feasible combination, 0 if none fits.
    pub max_profit: f64,

    /// Item indices of the best combination, ascending. Empty when no
    /// single item fits.
    pub selection: Vec<usize>,

    /// Number of combinations evaluated.
    pub subsets_evaluated: u64,
}

/// Enumerates every subset of items and keeps the feasible one of
/// maximum profit.
pub struct BruteForce;

impl BruteForce {
    /// Runs the enumeration. Item order is irrelevant; ties between
    /// equal-profit combinations go to the first one found in
    /// lexicographic order (strictly-greater comparison).
    pub fn run(instance: &Instance) -> BruteForceResult {
        let n = instance.len();
        let mut max_profit = 0.0;
        let mut selection: Vec<usize> = Vec::new();
        let mut subsets_evaluated = 0u64;

        for k in 1..=n {
            let mut indices: Vec<usize> = (0..k).collect();
            loop {
                subsets_evaluated += 1;
                let weight: u64 = indices.iter().map(|&i| instance.weight(i)).sum();
                if weight <= instance.capacity() {
                    let profit: f64 = indices.iter().map(|&i| instance.profit(i)).sum();
                    if profit > max_profit {
                        max_profit = profit;
                        selection.clone_from(&indices);
                    }
                }
                if !next_combination(&mut indices, n) {
                    break;
                }
            }
        }

        log::debug!(
            "brute force: n={n} evaluated={subsets_evaluated} max_profit={max_profit}"
        );

        BruteForceResult {
            max_profit,
            selection,
            subsets_evaluated,
        }
    }
}
