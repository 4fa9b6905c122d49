//! Horowitz-Sahni branch-and-bound.
//!
//! Exact depth-first search over items in non-increasing efficiency
//! order. A forward move inserts the largest run of consecutive
//! fitting items; whenever a forward move is exhausted, the fractional
//! upper bound of the current partial solution is compared with the
//! incumbent to decide between a further forward move and a backtrack.
//! The search stops when no backtrack is possible. Worst-case
//! exponential; the bound usually prunes far below brute force.
//!
//! # References
//!
//! - Horowitz & Sahni (1974), "Computing Partitions with Applications
//!   to the Knapsack Problem"
//! - Martello & Toth, "Knapsack Problems" (1990), pp. 30-32

mod runner;

pub use runner::{HorowitzSahni, HorowitzSahniResult};
