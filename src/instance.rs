//! Random instance generation.
//!
//! Cities are drawn uniformly from a `width × height` rectangle anchored at
//! the origin. Seeded generation is reproducible across runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, TspError};
use crate::models::City;

/// Generates `n` cities with ids `0..n` uniformly in `[0, width] × [0, height]`.
///
/// # Errors
///
/// [`TspError::InvalidArea`] if `width` or `height` is negative or not finite.
pub fn random_cities<R: Rng + ?Sized>(
    n: usize,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Result<Vec<City>> {
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    if !valid(width) || !valid(height) {
        return Err(TspError::InvalidArea { width, height });
    }
    (0..n)
        .map(|id| {
            let x = rng.random_range(0.0..=width);
            let y = rng.random_range(0.0..=height);
            City::new(id, x, y)
        })
        .collect()
}

/// Generates cities from a fixed seed.
///
/// # Examples
///
/// ```
/// use u_tsp::instance::seeded_cities;
///
/// let a = seeded_cities(5, 100.0, 100.0, 42).unwrap();
/// let b = seeded_cities(5, 100.0, 100.0, 42).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn seeded_cities(n: usize, width: f64, height: f64, seed: u64) -> Result<Vec<City>> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_cities(n, width, height, &mut rng)
}

/// Seed for trial `trial` of size `n`, so every `(n, trial)` pair is
/// reproducible on its own.
pub fn trial_seed(base: u64, n: usize, trial: usize) -> u64 {
    base.wrapping_add((n as u64).wrapping_mul(1000))
        .wrapping_add(trial as u64)
}
