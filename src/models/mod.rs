//! Domain model types for TSP instances.
//!
//! Cities are points in the plane identified by their matrix index; a
//! [`TourResult`] pairs a cyclic visiting order with its length.

mod city;
mod tour;

pub use city::City;
pub use tour::TourResult;
