// File: crates/scaling-core/src/error.rs
// Summary: Error taxonomy for the load -> extract -> range -> compose pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the chart pipeline. Every stage fails fast: the first
/// error aborts the run and no figure reaches the renderer.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The input file could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file opened but is not parseable as delimited tabular text.
    #[error("malformed table in '{}': {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A header row was found but zero data rows follow it.
    #[error("'{}' contains no data rows", path.display())]
    Empty { path: PathBuf },

    /// A required column is absent from the header (exact, case-sensitive).
    #[error("required column '{column}' is missing from the header")]
    Schema { column: String },

    /// A cell could not be coerced to a finite number. `row` is the 0-based
    /// data row index, header excluded.
    #[error("row {row}: cannot parse {column}='{value}' as a number")]
    Coercion {
        column: String,
        row: usize,
        value: String,
    },

    /// An axis range was requested for a series with no values.
    #[error("axis range requested for empty series '{series}'")]
    EmptyRange { series: String },

    /// Durations and speedups are non-negative by definition; a negative
    /// value means the measurement itself is defective.
    #[error("series '{series}' holds negative value {value} at row {row}")]
    Negative {
        series: String,
        row: usize,
        value: f64,
    },

    /// A series is not position-aligned with the shared X sequence.
    #[error("series '{series}' has {len} values but the X axis has {expected}")]
    Misaligned {
        series: String,
        len: usize,
        expected: usize,
    },

    /// A chart was composed with no series at all.
    #[error("chart spec contains no series")]
    NoSeries,
}
