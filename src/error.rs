//! Error types for defense-indicators.
//!
//! Unknown entity selectors are not errors: resolution always falls back to the
//! default configuration. Only year-range validation, overlay loading and I/O at the
//! edges can fail.

use std::path::PathBuf;

/// Result type for defense-indicators operations
pub type Result<T> = std::result::Result<T, IndicatorError>;

/// Why a year sequence cannot be simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeDefect {
    #[error("no years given")]
    Empty,

    #[error("year {year} does not follow {previous}")]
    NotIncreasing { previous: i32, year: i32 },

    #[error("gap between {previous} and {year}")]
    Gap { previous: i32, year: i32 },
}

#[derive(Debug, thiserror::Error)]
pub enum IndicatorError {
    /// Year sequence is empty, out of order, or has holes
    #[error("invalid year range: {0}")]
    InvalidRange(RangeDefect),

    /// Inclusive bounds given in the wrong order
    #[error("invalid year bounds: start {start} is after end {end}")]
    InvalidYearBounds { start: i32, end: i32 },

    /// Overlay entry carries a seed the engine cannot use
    #[error("invalid configuration for {selector:?}: {field} must be finite and non-negative, got {value}")]
    InvalidConfig {
        selector: String,
        field: &'static str,
        value: f64,
    },

    /// Overlay or export file could not be opened
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl From<RangeDefect> for IndicatorError {
    fn from(defect: RangeDefect) -> Self {
        Self::InvalidRange(defect)
    }
}
