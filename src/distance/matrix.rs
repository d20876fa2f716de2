//! Dense symmetric distance matrix.

use crate::error::{Result, TspError};
use crate::models::City;

/// Largest accepted difference between `d(i, j)` and `d(j, i)`.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A dense n×n distance matrix stored in row-major order.
///
/// Every constructor validates the matrix: entries are finite and
/// non-negative, the diagonal is zero, and the matrix is symmetric. There is
/// no mutation after construction, so a matrix can be shared read-only across
/// any number of solver calls.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0).unwrap(),
///     City::new(1, 3.0, 4.0).unwrap(),
///     City::new(2, 6.0, 8.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a Euclidean distance matrix from city coordinates.
    ///
    /// City `i` in the slice becomes row and column `i`. [`City::id`] is not
    /// consulted, so callers that want ids to match matrix indices must pass
    /// the cities sorted by id with no gaps.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Creates a distance matrix from an explicit n×n grid stored row-major.
    ///
    /// # Errors
    ///
    /// [`TspError::DataSizeMismatch`] if `data.len() != size * size`, or any
    /// validation error described on [`DistanceMatrix`].
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(TspError::DataSizeMismatch {
                size,
                len: data.len(),
            });
        }
        let dm = Self { data, size };
        dm.validate()?;
        Ok(dm)
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// # Errors
    ///
    /// [`TspError::NotSquare`] if any row length differs from the row count,
    /// or any validation error described on [`DistanceMatrix`].
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(TspError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend_from_slice(values);
        }
        let dm = Self { data, size };
        dm.validate()?;
        Ok(dm)
    }

    fn validate(&self) -> Result<()> {
        for i in 0..self.size {
            for j in 0..self.size {
                let value = self.get(i, j);
                if !value.is_finite() || value < 0.0 {
                    return Err(TspError::InvalidDistance {
                        from: i,
                        to: j,
                        value,
                    });
                }
            }
        }
        for i in 0..self.size {
            let value = self.get(i, i);
            if value != 0.0 {
                return Err(TspError::NonZeroDiagonal { index: i, value });
            }
        }
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (forward, backward) = (self.get(i, j), self.get(j, i));
                if (forward - backward).abs() > SYMMETRY_TOLERANCE {
                    return Err(TspError::Asymmetric {
                        from: i,
                        to: j,
                        forward,
                        backward,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Row `from` of the matrix: distances to every city.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix holds no cities.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the candidate that appears first. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let row = self.row(from);
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| row[a].total_cmp(&row[b]))
    }
}
