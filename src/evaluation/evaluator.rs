//! Tour length evaluation.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};

/// Computes the total cyclic length of a tour.
///
/// Sums `d(tour[i], tour[(i + 1) % n])` for every position, so the closing
/// edge from the last city back to the first is included. An empty tour has
/// length 0, and so does a single city (its only edge is the zero diagonal).
///
/// Permutation-ness is not checked; see [`validate_tour`].
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::tour_length;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0).unwrap(),
///     City::new(1, 0.0, 1.0).unwrap(),
///     City::new(2, 1.0, 1.0).unwrap(),
///     City::new(3, 1.0, 0.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((tour_length(&[0, 1, 2, 3], &dm) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let n = tour.len();
    let mut total = 0.0;
    for i in 0..n {
        total += distances.get(tour[i], tour[(i + 1) % n]);
    }
    total
}

/// Checks that `tour` is a permutation of `0..size`.
///
/// # Errors
///
/// [`TspError::TourSizeMismatch`], [`TspError::CityOutOfRange`] or
/// [`TspError::DuplicateCity`], reporting the first problem found.
pub fn validate_tour(tour: &[usize], size: usize) -> Result<()> {
    if tour.len() != size {
        return Err(TspError::TourSizeMismatch {
            expected: size,
            actual: tour.len(),
        });
    }
    let mut seen = vec![false; size];
    for &city in tour {
        if city >= size {
            return Err(TspError::CityOutOfRange { city, size });
        }
        if seen[city] {
            return Err(TspError::DuplicateCity { city });
        }
        seen[city] = true;
    }
    Ok(())
}

/// Evaluates tours against a fixed distance matrix.
///
/// Unlike [`tour_length`], [`TourEvaluator::evaluate`] rejects anything that
/// is not a complete tour of the matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::TourEvaluator;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 3.0, 3.0, 0.0]).unwrap();
/// let evaluator = TourEvaluator::new(&dm);
/// assert_eq!(evaluator.evaluate(&[1, 0]).unwrap(), 6.0);
/// assert!(evaluator.evaluate(&[0, 0]).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator for the given matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Validates `tour` and returns its cyclic length.
    pub fn evaluate(&self, tour: &[usize]) -> Result<f64> {
        validate_tour(tour, self.distances.size())?;
        Ok(tour_length(tour, self.distances))
    }

    /// Cyclic length without validation.
    pub fn length(&self, tour: &[usize]) -> f64 {
        tour_length(tour, self.distances)
    }
}
