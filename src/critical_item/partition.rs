//! Median-based partition refinement of the candidate set.

use crate::instance::Instance;

/// Final partition of the item indices around the critical item.
///
/// `forced_in`, `forced_out`, and `candidates` stay pairwise disjoint
/// and cover `0..n` at every round; `residual` is the capacity not yet
/// consumed by `forced_in`.
#[derive(Debug, Clone)]
pub(crate) struct Partition {
    /// J1: items in every optimal continuous solution.
    pub forced_in: Vec<usize>,

    /// J0: items in no optimal continuous solution.
    pub forced_out: Vec<usize>,

    /// JC: the undecided near-critical items, ascending index order.
    pub candidates: Vec<usize>,

    /// Capacity remaining after `forced_in`.
    pub residual: u64,

    /// Number of partition rounds performed.
    pub rounds: usize,
}

/// Refines the candidate set until the critical item is bracketed.
///
/// Each round removes at least half of the candidates, so the loop
/// terminates after O(log n) rounds. If the candidates empty out
/// first, the whole instance fits and every item ends up forced in.
pub(crate) fn refine(instance: &Instance) -> Partition {
    let mut candidates: Vec<usize> = (0..instance.len()).collect();
    let mut forced_in: Vec<usize> = Vec::new();
    let mut forced_out: Vec<usize> = Vec::new();
    let mut residual = instance.capacity();
    let mut rounds = 0usize;

    while !candidates.is_empty() {
        rounds += 1;
        let lambda = median_efficiency(instance, &candidates);

        let mut greater: Vec<usize> = Vec::new();
        let mut less: Vec<usize> = Vec::new();
        let mut equal: Vec<usize> = Vec::new();
        for &j in &candidates {
            let ratio = instance.item(j).efficiency();
            // Exact equality for the tie set, as in the reference
            // algorithm: ratios that should tie must be bit-identical.
            if ratio > lambda {
                greater.push(j);
            } else if ratio < lambda {
                less.push(j);
            } else {
                equal.push(j);
            }
        }

        let c1: u64 = greater.iter().map(|&j| instance.weight(j)).sum();
        let c2: u64 = c1 + equal.iter().map(|&j| instance.weight(j)).sum::<u64>();

        if c1 <= residual && residual < c2 {
            // The critical item sits inside the tie set.
            forced_in.append(&mut greater);
            forced_out.append(&mut less);
            candidates = equal;
            residual -= c1;
            break;
        }

        if c1 > residual {
            // Critical item strictly inside `greater`.
            debug_assert!(greater.len() < candidates.len());
            forced_out.append(&mut less);
            forced_out.append(&mut equal);
            candidates = greater;
        } else {
            // c2 <= residual: everything at or above the median fits.
            debug_assert!(less.len() < candidates.len());
            forced_in.append(&mut greater);
            forced_in.append(&mut equal);
            candidates = less;
            residual -= c2;
        }
    }

    debug_assert_eq!(
        forced_in.len() + forced_out.len() + candidates.len(),
        instance.len()
    );

    Partition {
        forced_in,
        forced_out,
        candidates,
        residual,
        rounds,
    }
}

/// Median efficiency of the candidate items: the lower median for an
/// odd count, the mean of the two middle values for an even count.
///
/// This exact rule is what guarantees that every round discards at
/// least half of the candidates.
fn median_efficiency(instance: &Instance, candidates: &[usize]) -> f64 {
    let mut ratios: Vec<f64> = candidates
        .iter()
        .map(|&j| instance.item(j).efficiency())
        .collect();
    ratios.sort_unstable_by(f64::total_cmp);

    let m = ratios.len();
    if m % 2 == 0 {
        (ratios[m / 2 - 1] + ratios[m / 2]) / 2.0
    } else {
        ratios[m / 2]
    }
}
