//! City type.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// A city in a TSP instance: a stable index and a point in the plane.
///
/// Cities are immutable once created. The `id` is the row/column index the
/// city occupies in the distance matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
///
/// let a = City::new(0, 0.0, 0.0).unwrap();
/// let b = City::new(1, 3.0, 4.0).unwrap();
/// assert_eq!(b.id(), 1);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    ///
    /// Returns [`TspError::InvalidCoordinate`] if either coordinate is non-finite.
    pub fn new(id: usize, x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(TspError::InvalidCoordinate { id, x, y });
        }
        Ok(Self { id, x, y })
    }

    /// City index.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
