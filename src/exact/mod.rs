//! Exact solvers.
//!
//! - [`brute_force`] — Exhaustive enumeration with city 0 anchored, O((n-1)!·n)

mod brute_force;

pub use brute_force::brute_force;
