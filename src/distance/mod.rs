//! Distance matrices.
//!
//! Provides a validated dense distance matrix shared by every solver.

mod matrix;

pub use matrix::DistanceMatrix;
