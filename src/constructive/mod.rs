//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor from a fixed start, O(n²)
//! - [`nearest_neighbor_best_start`] — Nearest-neighbor from every start, O(n³)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_best_start};
