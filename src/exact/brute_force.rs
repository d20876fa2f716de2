//! Exhaustive brute-force search.
//!
//! # Algorithm
//!
//! City 0 is fixed at position 0, since every rotation of a tour has the same
//! length. The remaining `n - 1` cities are enumerated in lexicographic order
//! and each complete tour is evaluated. Reversed tours are enumerated too;
//! they cost a constant factor, not correctness.
//!
//! # Complexity
//!
//! O((n-1)! · n). Practical only up to about n = 10; there is no pruning.

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::tour_length;
use crate::models::TourResult;

/// Finds the exact shortest tour by enumerating every permutation.
///
/// The returned tour always starts with city 0. Among tours of equal length,
/// the first in lexicographic order wins.
///
/// # Errors
///
/// [`TspError::EmptyInstance`] if the matrix has no cities.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::exact::brute_force;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0).unwrap(),
///     City::new(1, 1.0, 1.0).unwrap(),
///     City::new(2, 0.0, 1.0).unwrap(),
///     City::new(3, 1.0, 0.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let best = brute_force(&dm).unwrap();
/// assert_eq!(best.tour, vec![0, 2, 1, 3]);
/// assert!((best.length - 4.0).abs() < 1e-10);
/// ```
pub fn brute_force(distances: &DistanceMatrix) -> Result<TourResult> {
    let n = distances.size();
    if n == 0 {
        return Err(TspError::EmptyInstance);
    }
    if n == 1 {
        return Ok(TourResult::new(vec![0], 0.0));
    }

    let mut candidate: Vec<usize> = (0..n).collect();
    let mut best_tour = candidate.clone();
    let mut best_len = tour_length(&candidate, distances);
    let mut evaluated: u64 = 1;

    while next_permutation(&mut candidate[1..]) {
        let len = tour_length(&candidate, distances);
        evaluated += 1;
        if len < best_len {
            best_len = len;
            best_tour.copy_from_slice(&candidate);
        }
    }

    debug!(
        event = "brute_force_done",
        n = n,
        evaluated = evaluated,
        length = best_len,
    );

    Ok(TourResult::new(best_tour, best_len))
}

/// Advances `items` to the next lexicographic permutation.
///
/// Returns `false` (leaving `items` sorted descending) once the last
/// permutation has been passed.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }
    // Longest non-increasing suffix starts at `pivot + 1`
    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let pivot = pivot - 1;
    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot] {
        successor -= 1;
    }
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
