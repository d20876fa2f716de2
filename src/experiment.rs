//! Algorithm comparison on generated instances.
//!
//! For each instance the runner records the nearest-neighbor (best of all
//! starts) tour, the 2-opt refinement of that tour, and, when the instance
//! is small enough, the brute-force optimum. With the optimum known, every
//! record carries its approximation ratio `length / optimal`.
//!
//! Records are `Serialize` so callers can persist them in whatever format
//! they need.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{ExperimentConfig, SolverConfig};
use crate::constructive::nearest_neighbor_best_start;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::exact::brute_force;
use crate::instance::{seeded_cities, trial_seed};
use crate::local_search::two_opt_with_policy;
use crate::models::City;

/// Algorithm that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Brute-force optimum.
    Optimal,
    /// Nearest neighbor, best of all starts.
    NearestNeighbor,
    /// 2-opt started from the nearest-neighbor tour.
    TwoOpt,
}

/// Outcome of one algorithm on one instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Number of cities.
    pub n: usize,
    /// Trial index within this size.
    pub trial: usize,
    /// Algorithm used.
    pub method: Method,
    /// Tour length found.
    pub length: f64,
    /// Wall-clock solve time in seconds.
    pub time_secs: f64,
    /// `length / optimal`, when the optimum is known.
    pub approx_ratio: Option<f64>,
}

/// Mean results for one `(n, method)` group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Number of cities.
    pub n: usize,
    /// Algorithm used.
    pub method: Method,
    /// Number of records in the group.
    pub runs: usize,
    /// Mean tour length.
    pub mean_length: f64,
    /// Mean solve time in seconds.
    pub mean_time_secs: f64,
    /// Mean approximation ratio over records that have one.
    pub mean_approx_ratio: Option<f64>,
}

fn ratio(length: f64, optimal: Option<f64>) -> Option<f64> {
    optimal.map(|opt| if opt > 0.0 { length / opt } else { 1.0 })
}

/// Runs every algorithm on one instance.
///
/// Brute force runs only when `cities.len() <= solver.brute_force_limit`.
///
/// # Errors
///
/// [`crate::error::TspError::EmptyInstance`] if `cities` is empty.
///
/// # Examples
///
/// ```
/// use u_tsp::config::SolverConfig;
/// use u_tsp::experiment::{run_trial, Method};
/// use u_tsp::instance::seeded_cities;
///
/// let cities = seeded_cities(6, 100.0, 100.0, 1).unwrap();
/// let records = run_trial(&cities, 0, &SolverConfig::default()).unwrap();
/// assert_eq!(records.len(), 3);
/// assert_eq!(records[0].method, Method::Optimal);
/// assert!(records.iter().all(|r| r.approx_ratio.unwrap() >= 1.0 - 1e-9));
/// ```
pub fn run_trial(cities: &[City], trial: usize, solver: &SolverConfig) -> Result<Vec<TrialRecord>> {
    let n = cities.len();
    let distances = DistanceMatrix::from_cities(cities);
    let mut records = Vec::with_capacity(3);

    let optimal = if n <= solver.brute_force_limit {
        let start = Instant::now();
        let best = brute_force(&distances)?;
        records.push(TrialRecord {
            n,
            trial,
            method: Method::Optimal,
            length: best.length,
            time_secs: start.elapsed().as_secs_f64(),
            approx_ratio: Some(1.0),
        });
        Some(best.length)
    } else {
        None
    };

    let start = Instant::now();
    let nn = nearest_neighbor_best_start(&distances)?;
    records.push(TrialRecord {
        n,
        trial,
        method: Method::NearestNeighbor,
        length: nn.length,
        time_secs: start.elapsed().as_secs_f64(),
        approx_ratio: ratio(nn.length, optimal),
    });

    let start = Instant::now();
    let improved = two_opt_with_policy(
        &distances,
        &nn.tour,
        solver.two_opt_policy,
        solver.improvement_epsilon,
    )?;
    records.push(TrialRecord {
        n,
        trial,
        method: Method::TwoOpt,
        length: improved.length,
        time_secs: start.elapsed().as_secs_f64(),
        approx_ratio: ratio(improved.length, optimal),
    });

    Ok(records)
}

/// Runs all sizes and trials of an experiment sequentially.
///
/// Each `(n, trial)` instance is generated from
/// [`trial_seed`]`(base_seed, n, trial)`, so results are reproducible.
pub fn run_experiments(config: &ExperimentConfig) -> Result<Vec<TrialRecord>> {
    config.validate()?;
    let mut records = Vec::new();

    for &n in &config.sizes {
        let exact = n <= config.solver.brute_force_limit;
        info!(event = "size_start", n = n, trials = config.trials, exact = exact);

        for trial in 0..config.trials {
            let seed = trial_seed(config.base_seed, n, trial);
            let cities = seeded_cities(n, config.width, config.height, seed)?;
            records.extend(run_trial(&cities, trial, &config.solver)?);
        }
    }

    info!(event = "experiments_done", records = records.len());
    Ok(records)
}

/// Groups records by `(n, method)` and averages them.
///
/// Rows come back sorted by `n`, then by method.
pub fn summarize(records: &[TrialRecord]) -> Vec<SummaryRow> {
    #[derive(Default)]
    struct Acc {
        runs: usize,
        length: f64,
        time: f64,
        ratio_sum: f64,
        ratio_count: usize,
    }

    let mut groups: BTreeMap<(usize, Method), Acc> = BTreeMap::new();
    for r in records {
        let acc = groups.entry((r.n, r.method)).or_default();
        acc.runs += 1;
        acc.length += r.length;
        acc.time += r.time_secs;
        if let Some(ratio) = r.approx_ratio {
            acc.ratio_sum += ratio;
            acc.ratio_count += 1;
        }
    }

    groups
        .into_iter()
        .map(|((n, method), acc)| SummaryRow {
            n,
            method,
            runs: acc.runs,
            mean_length: acc.length / acc.runs as f64,
            mean_time_secs: acc.time / acc.runs as f64,
            mean_approx_ratio: (acc.ratio_count > 0)
                .then(|| acc.ratio_sum / acc.ratio_count as f64),
        })
        .collect()
}
