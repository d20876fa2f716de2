//! # u-tsp
//!
//! Traveling salesman tours over 2-D cities: the exact optimum by brute
//! force, fast tours by nearest-neighbor construction, and 2-opt local
//! search to improve any tour.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, TourResult)
//! - [`distance`] — Validated symmetric distance matrix
//! - [`evaluation`] — Cyclic tour length and tour validation
//! - [`exact`] — Brute-force optimum
//! - [`constructive`] — Nearest-neighbor construction
//! - [`local_search`] — 2-opt improvement
//! - [`config`] — TOML-backed solver and experiment settings
//! - [`instance`] — Seeded random city generation
//! - [`experiment`] — Algorithm comparison and approximation ratios
//!
//! ## Example
//!
//! ```
//! use u_tsp::constructive::nearest_neighbor_best_start;
//! use u_tsp::distance::DistanceMatrix;
//! use u_tsp::exact::brute_force;
//! use u_tsp::instance::seeded_cities;
//! use u_tsp::local_search::two_opt;
//!
//! let cities = seeded_cities(8, 100.0, 100.0, 42).unwrap();
//! let dm = DistanceMatrix::from_cities(&cities);
//!
//! let optimal = brute_force(&dm).unwrap();
//! let greedy = nearest_neighbor_best_start(&dm).unwrap();
//! let improved = two_opt(&dm, &greedy.tour).unwrap();
//!
//! assert!(optimal.length <= improved.length + 1e-9);
//! assert!(improved.length <= greedy.length + 1e-9);
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod experiment;
pub mod instance;
pub mod local_search;
pub mod models;

pub use error::{Result, TspError};
