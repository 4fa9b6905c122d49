//! Exhaustive enumeration.
//!
//! Evaluates every k-combination of items for k = 1..n and keeps the
//! feasible combination of maximum profit. O(2^n); used as the
//! correctness oracle for the other solvers on small instances, never
//! as a production strategy.

mod combinations;
mod runner;

pub use runner::{BruteForce, BruteForceResult};
