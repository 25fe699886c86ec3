// File: crates/scaling-core/src/lib.rs
// Summary: Core library entry point; exports the benchmark-chart pipeline API.

pub mod axis;
pub mod dataset;
pub mod error;
pub mod figure;
pub mod pipeline;
pub mod range;
pub mod series;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::Axis;
pub use dataset::{BenchmarkRecord, Dataset, DURATION_COLUMN, SPEEDUP_COLUMN, THREADS_COLUMN};
pub use error::ChartError;
pub use figure::{compose, AxisSide, ChartSpec, Figure, LinePlot, Renderer};
pub use pipeline::{compose_chart, compose_from_dataset, render_chart, ChartConfig, ChartKind};
pub use range::AxisRange;
pub use series::Series;
pub use theme::{Color, Theme};
