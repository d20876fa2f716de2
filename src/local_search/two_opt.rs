//! 2-opt local search over a whole tour.
//!
//! # Algorithm
//!
//! For positions `1 <= i < k <= n-1`, reversing `tour[i..=k]` replaces the
//! edges `(tour[i-1], tour[i])` and `(tour[k], tour[k+1])` (wrapping to
//! position 0) with `(tour[i-1], tour[k])` and `(tour[i], tour[k+1])`:
//!
//! ```text
//! delta = d(t[i-1], t[k]) + d(t[i], t[k+1]) - d(t[i-1], t[i]) - d(t[k], t[k+1])
//! ```
//!
//! A move is accepted only when delta is strictly negative. Position 0 is
//! never inside a reversed segment, so the city there stays anchored. With
//! `k = n-1` the closing edge back to position 0 is one of the two replaced
//! edges, so it belongs to the neighborhood.
//!
//! Two policies are available:
//!
//! - [`TwoOptPolicy::FirstImprovement`] applies the first improving move in
//!   scan order (`i` ascending, then `k` ascending) and restarts the scan.
//! - [`TwoOptPolicy::BestImprovement`] scans the whole neighborhood and
//!   applies the most improving move.
//!
//! Both stop at a 2-opt local optimum.
//!
//! # Complexity
//!
//! O(n²) delta evaluations per scan, each O(1). The number of scans until
//! convergence has no small polynomial bound but is low on random Euclidean
//! instances.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::{tour_length, validate_tour};
use crate::models::TourResult;

/// Smallest gain a move must achieve to be accepted by [`two_opt`].
pub const DEFAULT_IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Which improving move 2-opt applies in each step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwoOptPolicy {
    /// Apply the first improving move found and restart the scan.
    #[default]
    FirstImprovement,
    /// Apply the most improving move of a full scan.
    BestImprovement,
}

/// Improves `initial` with first-improvement 2-opt until no move helps.
///
/// Returns the locally optimal tour and its length. The city at position 0
/// of `initial` is still at position 0 in the result.
///
/// # Errors
///
/// [`TspError::EmptyInstance`] if the matrix has no cities, or a tour
/// validation error if `initial` is not a permutation of `0..n`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0).unwrap(),
///     City::new(1, 0.0, 1.0).unwrap(),
///     City::new(2, 1.0, 1.0).unwrap(),
///     City::new(3, 1.0, 0.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// // 0→2→1→3 crosses itself
/// let result = two_opt(&dm, &[0, 2, 1, 3]).unwrap();
/// assert_eq!(result.tour, vec![0, 1, 2, 3]);
/// assert!((result.length - 4.0).abs() < 1e-10);
/// ```
pub fn two_opt(distances: &DistanceMatrix, initial: &[usize]) -> Result<TourResult> {
    two_opt_with_policy(
        distances,
        initial,
        TwoOptPolicy::FirstImprovement,
        DEFAULT_IMPROVEMENT_EPSILON,
    )
}

/// Improves `initial` with 2-opt under the given policy.
///
/// A move is accepted only when it shortens the tour by more than `epsilon`.
///
/// # Errors
///
/// [`TspError::InvalidEpsilon`] if `epsilon` is negative or not finite,
/// otherwise the same as [`two_opt`].
pub fn two_opt_with_policy(
    distances: &DistanceMatrix,
    initial: &[usize],
    policy: TwoOptPolicy,
    epsilon: f64,
) -> Result<TourResult> {
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(TspError::InvalidEpsilon(epsilon));
    }
    let n = distances.size();
    if n == 0 {
        return Err(TspError::EmptyInstance);
    }
    validate_tour(initial, n)?;

    let mut tour = initial.to_vec();
    let moves = match policy {
        TwoOptPolicy::FirstImprovement => first_improvement(&mut tour, distances, epsilon),
        TwoOptPolicy::BestImprovement => best_improvement(&mut tour, distances, epsilon),
    };

    let length = tour_length(&tour, distances);
    debug!(
        event = "two_opt_done",
        n = n,
        policy = ?policy,
        moves = moves,
        length = length,
    );

    Ok(TourResult::new(tour, length))
}

/// Runs first-improvement passes until a full scan finds nothing.
fn first_improvement(tour: &mut [usize], distances: &DistanceMatrix, epsilon: f64) -> u64 {
    let mut moves = 0;
    while let Some((i, k)) = first_improving_move(tour, distances, epsilon) {
        tour[i..=k].reverse();
        moves += 1;
    }
    moves
}

/// First `(i, k)` in scan order whose reversal gains more than `epsilon`.
fn first_improving_move(
    tour: &[usize],
    distances: &DistanceMatrix,
    epsilon: f64,
) -> Option<(usize, usize)> {
    let n = tour.len();
    for i in 1..n.saturating_sub(1) {
        for k in (i + 1)..n {
            if two_opt_delta(tour, distances, i, k) < -epsilon {
                return Some((i, k));
            }
        }
    }
    None
}

/// Applies the best move of each full scan until none improves.
fn best_improvement(tour: &mut [usize], distances: &DistanceMatrix, epsilon: f64) -> u64 {
    let n = tour.len();
    let mut moves = 0;

    loop {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 1..n.saturating_sub(1) {
            for k in (i + 1)..n {
                let delta = two_opt_delta(tour, distances, i, k);
                let threshold = best.map_or(-epsilon, |(_, _, d)| d);
                if delta < -epsilon && delta < threshold {
                    best = Some((i, k, delta));
                }
            }
        }

        match best {
            Some((i, k, _)) => {
                tour[i..=k].reverse();
                moves += 1;
            }
            None => return moves,
        }
    }
}

/// Length change from reversing `tour[i..=k]`, with `1 <= i < k < n`.
///
/// Before: ...-t[i-1] - t[i] - ... - t[k] - t[k+1]-...
/// After:  ...-t[i-1] - t[k] - ... - t[i] - t[k+1]-...
fn two_opt_delta(tour: &[usize], distances: &DistanceMatrix, i: usize, k: usize) -> f64 {
    let n = tour.len();
    let prev = tour[i - 1];
    let next = tour[(k + 1) % n];

    let old_cost = distances.get(prev, tour[i]) + distances.get(tour[k], next);
    let new_cost = distances.get(prev, tour[k]) + distances.get(tour[i], next);

    new_cost - old_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn matrix(coords: &[(f64, f64)]) -> DistanceMatrix {
        let cities: Vec<City> = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| City::new(i, x, y).expect("valid"))
            .collect();
        DistanceMatrix::from_cities(&cities)
    }

    fn square() -> DistanceMatrix {
        matrix(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
    }

    fn scattered() -> DistanceMatrix {
        matrix(&[
            (5.0, 5.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (3.0, 7.0),
            (8.0, 2.0),
            (6.0, 9.0),
        ])
    }

    /// Every ordering of four cities.
    fn all_orders_of_four() -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        for code in 0..256usize {
            let order: Vec<usize> = (0..4).map(|p| (code >> (2 * p)) & 3).collect();
            if validate_tour(&order, 4).is_ok() {
                out.push(order);
            }
        }
        out
    }

    fn policy_split() -> DistanceMatrix {
        matrix(&[
            (0.0, 0.0),
            (0.0, 10.0),
            (8.0, 0.0),
            (6.0, 10.0),
            (3.0, 6.0),
            (0.0, 8.0),
        ])
    }

    #[test]
    fn test_first_improvement_scan_order() {
        let dm = policy_split();
        let mut tour = vec![0, 1, 2, 3, 4, 5];
        // (1, 2) gains less than (2, 5) but comes first in scan order
        assert_eq!(
            first_improving_move(&tour, &dm, DEFAULT_IMPROVEMENT_EPSILON),
            Some((1, 2))
        );
        let mut steps = Vec::new();
        while let Some((i, k)) = first_improving_move(&tour, &dm, DEFAULT_IMPROVEMENT_EPSILON) {
            steps.push((i, k));
            tour[i..=k].reverse();
        }
        assert_eq!(steps, vec![(1, 2), (2, 3), (3, 4), (2, 3)]);
        assert_eq!(tour, vec![0, 2, 4, 3, 1, 5]);

        let mut counted = vec![0, 1, 2, 3, 4, 5];
        assert_eq!(first_improvement(&mut counted, &dm, DEFAULT_IMPROVEMENT_EPSILON), 4);
        let mut best = vec![0, 1, 2, 3, 4, 5];
        assert_eq!(best_improvement(&mut best, &dm, DEFAULT_IMPROVEMENT_EPSILON), 2);
    }

    #[test]
    fn test_two_opt_defaults_to_first_improvement() {
        let dm = policy_split();
        let initial = [0, 1, 2, 3, 4, 5];
        let default = two_opt(&dm, &initial).expect("valid");
        assert_eq!(default.tour, vec![0, 2, 4, 3, 1, 5]);

        let best = two_opt_with_policy(
            &dm,
            &initial,
            TwoOptPolicy::BestImprovement,
            DEFAULT_IMPROVEMENT_EPSILON,
        )
        .expect("valid");
        assert_eq!(best.tour, vec![0, 4, 5, 1, 3, 2]);
        assert!(best.length < default.length);
    }

    #[test]
    fn test_2opt_rejects_invalid_epsilon() {
        let dm = square();
        for policy in [TwoOptPolicy::FirstImprovement, TwoOptPolicy::BestImprovement] {
            assert!(matches!(
                two_opt_with_policy(&dm, &[0, 1, 2, 3], policy, -0.5),
                Err(TspError::InvalidEpsilon(e)) if e == -0.5
            ));
            assert!(matches!(
                two_opt_with_policy(&dm, &[0, 2, 1, 3], policy, f64::NAN),
                Err(TspError::InvalidEpsilon(_))
            ));
            assert!(two_opt_with_policy(&dm, &[0, 2, 1, 3], policy, f64::INFINITY).is_err());
        }
        let zero = two_opt_with_policy(&dm, &[0, 2, 1, 3], TwoOptPolicy::FirstImprovement, 0.0)
            .expect("zero epsilon is valid");
        assert!((zero.length - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = square();
        let result = two_opt(&dm, &[0, 1, 2, 3]).expect("valid");
        assert_eq!(result.tour, vec![0, 1, 2, 3]);
        assert!((result.length - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_square_from_every_permutation() {
        let dm = square();
        let perms = all_orders_of_four();
        assert_eq!(perms.len(), 24);
        for perm in perms {
            for policy in [TwoOptPolicy::FirstImprovement, TwoOptPolicy::BestImprovement] {
                let result = two_opt_with_policy(&dm, &perm, policy, DEFAULT_IMPROVEMENT_EPSILON)
                    .expect("valid");
                assert!(
                    (result.length - 4.0).abs() < 1e-10,
                    "{perm:?} with {policy:?} ended at {}",
                    result.length
                );
                assert_eq!(result.first(), perm.first().copied());
            }
        }
    }

    #[test]
    fn test_2opt_fixes_crossing_through_closing_edge() {
        let dm = square();
        // Crossing edges are 1→3 and the closing edge 2→0
        let result = two_opt(&dm, &[0, 1, 3, 2]).expect("valid");
        assert_eq!(result.tour, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_delta_matches_full_recomputation() {
        let dm = scattered();
        let tour: Vec<usize> = vec![0, 4, 1, 6, 3, 7, 2, 5];
        let base = tour_length(&tour, &dm);
        for i in 1..tour.len() - 1 {
            for k in (i + 1)..tour.len() {
                let mut moved = tour.clone();
                moved[i..=k].reverse();
                let expected = tour_length(&moved, &dm) - base;
                let delta = two_opt_delta(&tour, &dm, i, k);
                assert!((delta - expected).abs() < 1e-9, "i={i} k={k}");
            }
        }
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        let dm = scattered();
        let initial = vec![0, 4, 1, 6, 3, 7, 2, 5];
        let initial_len = tour_length(&initial, &dm);
        let result = two_opt(&dm, &initial).expect("valid");
        assert!(result.length <= initial_len + 1e-10);
        assert_eq!(result.first(), Some(0));
        assert!(validate_tour(&result.tour, dm.size()).is_ok());
    }

    #[test]
    fn test_2opt_is_idempotent() {
        let dm = scattered();
        let first = two_opt(&dm, &[0, 4, 1, 6, 3, 7, 2, 5]).expect("valid");
        let second = two_opt(&dm, &first.tour).expect("valid");
        assert_eq!(second.tour, first.tour);
        assert!((second.length - first.length).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_local_optimum_has_no_improving_move() {
        let dm = scattered();
        for policy in [TwoOptPolicy::FirstImprovement, TwoOptPolicy::BestImprovement] {
            let result = two_opt_with_policy(
                &dm,
                &[0, 7, 1, 2, 6, 3, 5, 4],
                policy,
                DEFAULT_IMPROVEMENT_EPSILON,
            )
            .expect("valid");
            let n = result.tour.len();
            for i in 1..n - 1 {
                for k in (i + 1)..n {
                    assert!(two_opt_delta(&result.tour, &dm, i, k) >= -DEFAULT_IMPROVEMENT_EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_2opt_non_zero_anchor_stays() {
        let dm = scattered();
        let result = two_opt(&dm, &[3, 0, 4, 1, 6, 7, 2, 5]).expect("valid");
        assert_eq!(result.first(), Some(3));
    }

    #[test]
    fn test_2opt_small_instances() {
        let one = matrix(&[(1.0, 1.0)]);
        let result = two_opt(&one, &[0]).expect("valid");
        assert_eq!(result.tour, vec![0]);
        assert_eq!(result.length, 0.0);

        let two = matrix(&[(0.0, 0.0), (3.0, 4.0)]);
        let result = two_opt(&two, &[1, 0]).expect("valid");
        assert_eq!(result.tour, vec![1, 0]);
        assert!((result.length - 10.0).abs() < 1e-10);

        let three = matrix(&[(0.0, 0.0), (3.0, 0.0), (0.0, 4.0)]);
        let result = two_opt(&three, &[0, 2, 1]).expect("valid");
        assert!((result.length - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_rejects_bad_input() {
        let empty = DistanceMatrix::from_cities(&[]);
        assert!(matches!(two_opt(&empty, &[]), Err(TspError::EmptyInstance)));

        let dm = square();
        assert!(matches!(
            two_opt(&dm, &[0, 1, 2]),
            Err(TspError::TourSizeMismatch { .. })
        ));
        assert!(matches!(
            two_opt(&dm, &[0, 1, 1, 2]),
            Err(TspError::DuplicateCity { city: 1 })
        ));
        assert!(matches!(
            two_opt(&dm, &[0, 1, 2, 9]),
            Err(TspError::CityOutOfRange { city: 9, .. })
        ));
    }

    #[test]
    fn test_policy_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: TwoOptPolicy,
        }
        let w: Wrapper = toml::from_str("policy = \"best_improvement\"").expect("parse");
        assert_eq!(w.policy, TwoOptPolicy::BestImprovement);
        assert_eq!(TwoOptPolicy::default(), TwoOptPolicy::FirstImprovement);
    }
}
