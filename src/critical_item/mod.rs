//! Critical-item heuristic (Martello-Toth).
//!
//! Locates the critical item of the continuous 0-1 knapsack relaxation
//! by repeated median-based partitioning of the candidate set, then
//! derives an integer feasible profit from the partition by a greedy
//! fill plus one best-fit add-on item. Expected O(n), worst case
//! O(n log n) for the partition phase.
//!
//! The returned profit is a heuristic estimate: at least half the true
//! optimum, but not guaranteed optimal.
//!
//! # References
//!
//! - Martello & Toth, "Knapsack Problems: Algorithms and Computer
//!   Implementations" (1990), pp. 16-19
//! - Balas & Zemel (1980), "An Algorithm for Large Zero-One Knapsack
//!   Problems"

mod partition;
mod runner;

pub use runner::{CriticalItem, CriticalItemResult};
