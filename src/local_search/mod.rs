//! Local search operators for improving tours.
//!
//! - [`two_opt`] — 2-opt edge reversal with position 0 anchored

mod two_opt;

pub use two_opt::{two_opt, two_opt_with_policy, TwoOptPolicy, DEFAULT_IMPROVEMENT_EPSILON};
