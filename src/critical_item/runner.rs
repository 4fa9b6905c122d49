//! Integer fix-up over the final partition.

use super::partition::refine;
use crate::instance::Instance;

/// Result of the critical-item heuristic.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalItemResult {
    /// Heuristic profit estimate: accepted profits plus the add-on
    /// item's profit. At least half the true optimum; may exceed the
    /// optimum when the add-on overlaps the accepted set's weight.
    pub max_profit: f64,

    /// Accepted item indices (forced-in set plus the greedy candidate
    /// prefix), ascending.
    pub accepted: Vec<usize>,

    /// The critical item: first candidate that overflows the residual
    /// capacity. `None` when every candidate fits.
    pub critical_item: Option<usize>,

    /// Best-fit add-on item folded into `max_profit`, if any.
    pub add_on: Option<usize>,

    /// Partition rounds performed.
    pub rounds: usize,
}

/// Critical-item heuristic solver.
///
/// Requires items in non-increasing efficiency order (see
/// [`Instance::sorted_by_efficiency`]).
pub struct CriticalItem;

impl CriticalItem {
    /// Runs the partition refinement and the integer fix-up.
    ///
    /// The fix-up walks the final candidate set in ascending index
    /// order, accepting items greedily while they fit the residual
    /// capacity, then adds the single most profitable unaccepted item
    /// whose weight alone fits the full capacity. An item heavier than
    /// the capacity is never selected.
    pub fn run(instance: &Instance) -> CriticalItemResult {
        debug_assert!(instance.is_sorted_by_efficiency());

        if instance.is_empty() {
            return CriticalItemResult {
                max_profit: 0.0,
                accepted: Vec::new(),
                critical_item: None,
                add_on: None,
                rounds: 0,
            };
        }

        let partition = refine(instance);

        // Greedy walk of the candidates against the residual capacity.
        let mut accumulated = 0u64;
        let mut sigma = 0usize;
        for &j in &partition.candidates {
            accumulated += instance.weight(j);
            if accumulated > partition.residual {
                break;
            }
            sigma += 1;
        }
        let critical_item = partition.candidates.get(sigma).copied();

        let mut accepted = partition.forced_in.clone();
        accepted.extend_from_slice(&partition.candidates[..sigma.saturating_sub(1)]);
        accepted.sort_unstable();

        let accepted_profit: f64 = accepted.iter().map(|&j| instance.profit(j)).sum();

        let mut taken = vec![false; instance.len()];
        for &j in &accepted {
            taken[j] = true;
        }

        // Single best-fit item outside the accepted set. Checked
        // against the full capacity, which is what carries the
        // half-optimum guarantee.
        let mut add_on = None;
        let mut add_on_profit = 0.0;
        for j in 0..instance.len() {
            if taken[j] {
                continue;
            }
            if instance.weight(j) <= instance.capacity() && instance.profit(j) > add_on_profit {
                add_on_profit = instance.profit(j);
                add_on = Some(j);
            }
        }

        log::debug!(
            "critical item: n={} rounds={} accepted={} critical={:?}",
            instance.len(),
            partition.rounds,
            accepted.len(),
            critical_item,
        );

        CriticalItemResult {
            max_profit: accepted_profit + add_on_profit,
            accepted,
            critical_item,
            add_on,
            rounds: partition.rounds,
        }
    }
}
