//! Tour result type.

use serde::{Deserialize, Serialize};

/// A closed tour together with its total cyclic length.
///
/// `tour` is a permutation of `0..n`; the last city connects back to the
/// first. Every solver returns one of these.
///
/// # Examples
///
/// ```
/// use u_tsp::models::TourResult;
///
/// let result = TourResult::new(vec![0, 2, 1], 12.5);
/// assert_eq!(result.len(), 3);
/// assert_eq!(result.first(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourResult {
    /// Visiting order (city indices).
    pub tour: Vec<usize>,
    /// Total length including the closing edge.
    pub length: f64,
}

impl TourResult {
    /// Creates a new tour result.
    pub fn new(tour: Vec<usize>, length: f64) -> Self {
        Self { tour, length }
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    /// The city at position 0.
    pub fn first(&self) -> Option<usize> {
        self.tour.first().copied()
    }

    /// Splits into `(tour, length)`.
    pub fn into_parts(self) -> (Vec<usize>, f64) {
        (self.tour, self.length)
    }
}
