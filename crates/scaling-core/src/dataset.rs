// File: crates/scaling-core/src/dataset.rs
// Summary: Benchmark table loader; header-mapped raw rows kept in file order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ChartError;
use crate::series::Series;

/// Header names are exact-match and case-sensitive.
pub const THREADS_COLUMN: &str = "T";
pub const DURATION_COLUMN: &str = "Duration";
pub const SPEEDUP_COLUMN: &str = "Speedup";

/// One benchmark row in typed form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkRecord {
    pub threads: u32,
    pub duration_ms: f64,
    /// Present only when the file carries a `Speedup` column.
    pub speedup: Option<f64>,
}

/// An ordered benchmark table: header plus raw cells, row order exactly as
/// read from the file. Cells stay untyped here; coercion happens at series
/// extraction so a bad cell can name its row.
#[derive(Clone, Debug)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Load a delimited table from `path`. Requires a header row carrying at
    /// least `T` and `Duration`, and at least one data row.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ChartError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }

    fn from_reader<R: Read>(reader: R, path: &Path) -> Result<Self, ChartError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|source| ChartError::Malformed {
                path: path.to_path_buf(),
                source,
            })?
            .iter()
            .map(str::to_string)
            .collect();

        // Strict records: a row with a missing field is a load error, never a
        // silently skipped data point.
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|source| ChartError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        if rows.is_empty() {
            return Err(ChartError::Empty {
                path: path.to_path_buf(),
            });
        }

        let dataset = Self { headers, rows };
        for required in [THREADS_COLUMN, DURATION_COLUMN] {
            if dataset.column_index(required).is_none() {
                return Err(ChartError::Schema {
                    column: required.to_string(),
                });
            }
        }
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub(crate) fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub(crate) fn cell(&self, row: usize, column: usize) -> &str {
        self.rows[row].get(column).map(String::as_str).unwrap_or("")
    }

    /// The shared X domain in file order, integer-typed for tick labels.
    pub fn thread_counts(&self) -> Result<Vec<u32>, ChartError> {
        let column = self
            .column_index(THREADS_COLUMN)
            .ok_or_else(|| ChartError::Schema {
                column: THREADS_COLUMN.to_string(),
            })?;
        let mut counts = Vec::with_capacity(self.rows.len());
        for row in 0..self.rows.len() {
            let raw = self.cell(row, column);
            let value: u32 = raw.trim().parse().map_err(|_| ChartError::Coercion {
                column: THREADS_COLUMN.to_string(),
                row,
                value: raw.to_string(),
            })?;
            counts.push(value);
        }
        Ok(counts)
    }

    /// Typed view over all rows. Handy for reporting; charts go through
    /// `Series::extract` instead.
    pub fn records(&self) -> Result<Vec<BenchmarkRecord>, ChartError> {
        let threads = self.thread_counts()?;
        let durations = Series::extract(self, DURATION_COLUMN)?;
        let speedups = if self.has_column(SPEEDUP_COLUMN) {
            Some(Series::extract(self, SPEEDUP_COLUMN)?)
        } else {
            None
        };

        Ok(threads
            .into_iter()
            .enumerate()
            .map(|(i, threads)| BenchmarkRecord {
                threads,
                duration_ms: durations.values[i],
                speedup: speedups.as_ref().map(|s| s.values[i]),
            })
            .collect())
    }
}
