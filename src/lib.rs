//! 0/1 knapsack solvers.
//!
//! Three independent solvers over one shared, immutable problem
//! instance, used to cross-validate correctness and compare strategies:
//!
//! - **Brute force**: enumerates every k-combination of items,
//!   k = 1..n. Exact ground truth for small n; O(2^n).
//! - **Horowitz-Sahni**: exact depth-first branch-and-bound with a
//!   fractional upper bound, over items pre-sorted by non-increasing
//!   profit/weight efficiency.
//! - **Critical item (Martello-Toth)**: median-based partition
//!   refinement of the continuous relaxation plus a greedy integer
//!   fix-up. A heuristic guaranteed at least half the optimum, not
//!   optimality.
//!
//! Every solver owns its working state for the duration of one call:
//! nothing persists between calls, so repeated solves are idempotent
//! and independent instances can be solved concurrently by independent
//! callers.
//!
//! The caller builds an [`Instance`] and is responsible for the
//! efficiency ordering the last two solvers require (see
//! [`Instance::sorted_by_efficiency`]); input loading and presentation
//! stay outside this crate.
//!
//! # Examples
//!
//! ```
//! use kp_solvers::{BruteForce, HorowitzSahni, Instance, Item};
//!
//! let instance = Instance::new(
//!     vec![Item::new(10, 60.0), Item::new(20, 100.0), Item::new(30, 120.0)],
//!     50,
//! )
//! .unwrap()
//! .sorted_by_efficiency();
//!
//! assert_eq!(BruteForce::run(&instance).max_profit, 220.0);
//! assert_eq!(HorowitzSahni::run(&instance).search_profit, 220.0);
//! ```

pub mod brute_force;
pub mod critical_item;
pub mod horowitz_sahni;
pub mod instance;

pub use brute_force::{BruteForce, BruteForceResult};
pub use critical_item::{CriticalItem, CriticalItemResult};
pub use horowitz_sahni::{HorowitzSahni, HorowitzSahniResult};
pub use instance::{Instance, InstanceError, Item};

/// Profit of the best feasible item combination, by exhaustive
/// enumeration. Item order is irrelevant.
pub fn brute_force_max_profit(instance: &Instance) -> f64 {
    BruteForce::run(instance).max_profit
}

/// Heuristic profit estimate from the critical-item solver. Requires
/// non-increasing efficiency order; at least half the true optimum.
pub fn critical_item_max_profit(instance: &Instance) -> f64 {
    CriticalItem::run(instance).max_profit
}

/// Profit reported by the Horowitz-Sahni solver, including its
/// reproduced add-on step. Requires non-increasing efficiency order.
/// The exact search optimum is available as
/// [`HorowitzSahniResult::search_profit`].
pub fn horowitz_sahni_max_profit(instance: &Instance) -> f64 {
    HorowitzSahni::run(instance).max_profit
}
