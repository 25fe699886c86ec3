// File: crates/scaling-core/src/series.rs
// Summary: Named numeric column extracted from a dataset, row-aligned with the X domain.

use crate::dataset::Dataset;
use crate::error::ChartError;

/// An ordered sequence of floating-point values, one per dataset row.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Coerce `column` into floats, one per row, in row order. A cell that
    /// does not parse as a finite number aborts extraction naming the row;
    /// substituting a default would silently misalign the plotted path.
    pub fn extract(dataset: &Dataset, column: &str) -> Result<Self, ChartError> {
        let index = dataset.column_index(column).ok_or_else(|| ChartError::Schema {
            column: column.to_string(),
        })?;

        let mut values = Vec::with_capacity(dataset.len());
        for row in 0..dataset.len() {
            let raw = dataset.cell(row, index);
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => values.push(v),
                _ => {
                    return Err(ChartError::Coercion {
                        column: column.to_string(),
                        row,
                        value: raw.to_string(),
                    })
                }
            }
        }
        Ok(Self::new(column, values))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Pair values with a shared X sequence into plot points.
    pub fn points(&self, x: &[u32]) -> Vec<(f64, f64)> {
        x.iter()
            .zip(&self.values)
            .map(|(&x, &y)| (f64::from(x), y))
            .collect()
    }
}
