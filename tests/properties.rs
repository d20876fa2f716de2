use proptest::prelude::*;

use u_tsp::constructive::{nearest_neighbor, nearest_neighbor_best_start};
use u_tsp::distance::DistanceMatrix;
use u_tsp::evaluation::{tour_length, validate_tour};
use u_tsp::exact::brute_force;
use u_tsp::local_search::{two_opt, two_opt_with_policy, TwoOptPolicy};
use u_tsp::models::City;

const EPS: f64 = 1e-9;

fn matrix(coords: &[(f64, f64)]) -> DistanceMatrix {
    let cities: Vec<City> = coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| City::new(i, x, y).expect("finite"))
        .collect();
    DistanceMatrix::from_cities(&cities)
}

fn coords(max: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.0..100.0f64, 0.0..100.0f64), 1..=max)
}

/// Coordinates plus a shuffled tour over them.
fn coords_and_tour(max: usize) -> impl Strategy<Value = (Vec<(f64, f64)>, Vec<usize>)> {
    coords(max).prop_flat_map(|c| {
        let n = c.len();
        (Just(c), Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn brute_force_is_a_lower_bound((c, tour) in coords_and_tour(7)) {
        let dm = matrix(&c);
        let best = brute_force(&dm).expect("non-empty");
        let nn = nearest_neighbor_best_start(&dm).expect("non-empty");
        let improved = two_opt(&dm, &tour).expect("valid tour");
        prop_assert!(best.length <= nn.length + EPS);
        prop_assert!(best.length <= improved.length + EPS);
        prop_assert!(best.length <= tour_length(&tour, &dm) + EPS);
    }

    #[test]
    fn brute_force_tour_is_anchored_permutation(c in coords(8)) {
        let dm = matrix(&c);
        let best = brute_force(&dm).expect("non-empty");
        prop_assert_eq!(best.first(), Some(0));
        prop_assert!(validate_tour(&best.tour, c.len()).is_ok());
        prop_assert!((best.length - tour_length(&best.tour, &dm)).abs() < EPS);
    }

    #[test]
    fn two_opt_is_idempotent((c, tour) in coords_and_tour(30)) {
        let dm = matrix(&c);
        let first = two_opt(&dm, &tour).expect("valid tour");
        let second = two_opt(&dm, &first.tour).expect("valid tour");
        prop_assert!((first.length - second.length).abs() < EPS);
    }

    #[test]
    fn two_opt_never_worsens_and_keeps_anchor((c, tour) in coords_and_tour(30)) {
        let dm = matrix(&c);
        for policy in [TwoOptPolicy::FirstImprovement, TwoOptPolicy::BestImprovement] {
            let result = two_opt_with_policy(&dm, &tour, policy, 1e-10).expect("valid tour");
            prop_assert!(result.length <= tour_length(&tour, &dm) + EPS);
            prop_assert_eq!(result.first(), tour.first().copied());
            prop_assert!(validate_tour(&result.tour, c.len()).is_ok());
        }
    }

    #[test]
    fn reversed_tour_has_same_length((c, tour) in coords_and_tour(40)) {
        let dm = matrix(&c);
        let mut reversed = tour.clone();
        reversed.reverse();
        prop_assert!((tour_length(&tour, &dm) - tour_length(&reversed, &dm)).abs() < EPS);
    }

    #[test]
    fn best_start_no_worse_than_start_zero(c in coords(40)) {
        let dm = matrix(&c);
        let best = nearest_neighbor_best_start(&dm).expect("non-empty");
        let from_zero = nearest_neighbor(&dm, 0).expect("non-empty");
        prop_assert!(best.length <= from_zero.length);
        prop_assert!(validate_tour(&best.tour, c.len()).is_ok());
    }

    #[test]
    fn nearest_neighbor_starts_at_start(c in coords(20), pick in 0usize..20) {
        let dm = matrix(&c);
        let start = pick % c.len();
        let result = nearest_neighbor(&dm, start).expect("valid start");
        prop_assert_eq!(result.first(), Some(start));
        prop_assert!(validate_tour(&result.tour, c.len()).is_ok());
    }
}
