//! Tour evaluation.
//!
//! - [`tour_length`] — Total cyclic length, shared by every solver
//! - [`validate_tour`] — Permutation check for caller-supplied tours
//! - [`TourEvaluator`] — Checked evaluation bound to one matrix

mod evaluator;

pub use evaluator::{tour_length, validate_tour, TourEvaluator};
