//! Error types for tour construction and evaluation.

use thiserror::Error;

/// Errors raised when an instance, a tour, or a configuration is malformed.
///
/// Solvers fail fast with one of these instead of returning a partial tour.
#[derive(Debug, Error)]
pub enum TspError {
    /// The instance has no cities, so no tour exists.
    #[error("instance has no cities")]
    EmptyInstance,

    /// A row of an explicit matrix does not have `expected` entries.
    #[error("matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Flat matrix data does not hold `size * size` entries.
    #[error("matrix data has {len} entries, expected {size}x{size}")]
    DataSizeMismatch { size: usize, len: usize },

    /// A distance is negative, NaN, or infinite.
    #[error("invalid distance {value} from {from} to {to}")]
    InvalidDistance { from: usize, to: usize, value: f64 },

    /// A diagonal entry is not zero.
    #[error("diagonal entry {index} is {value}, expected 0")]
    NonZeroDiagonal { index: usize, value: f64 },

    /// `d(from, to)` and `d(to, from)` differ.
    #[error("matrix is asymmetric at ({from}, {to}): {forward} != {backward}")]
    Asymmetric {
        from: usize,
        to: usize,
        forward: f64,
        backward: f64,
    },

    /// A city coordinate is not finite.
    #[error("city {id} has non-finite coordinate ({x}, {y})")]
    InvalidCoordinate { id: usize, x: f64, y: f64 },

    /// A generation area has a negative or non-finite side.
    #[error("invalid area {width}x{height}")]
    InvalidArea { width: f64, height: f64 },

    /// The tour does not visit as many cities as the matrix holds.
    #[error("tour has {actual} cities, expected {expected}")]
    TourSizeMismatch { expected: usize, actual: usize },

    /// The tour references a city outside `0..size`.
    #[error("city {city} is out of range for {size} cities")]
    CityOutOfRange { city: usize, size: usize },

    /// The tour visits a city more than once.
    #[error("city {city} appears more than once in the tour")]
    DuplicateCity { city: usize },

    /// The nearest-neighbor start index is outside `0..size`.
    #[error("start city {start} is out of range for {size} cities")]
    StartOutOfRange { start: usize, size: usize },

    /// The 2-opt acceptance threshold is negative or not finite.
    #[error("improvement epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),

    /// A configuration value is out of its valid range.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("config IO error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("config TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for fallible tour operations.
pub type Result<T> = std::result::Result<T, TspError>;
