// File: crates/scaling-core/src/pipeline.rs
// Summary: End-to-end runs: load a benchmark table, extract series, compose, render.

use std::path::Path;

use crate::dataset::{Dataset, DURATION_COLUMN, SPEEDUP_COLUMN};
use crate::error::ChartError;
use crate::figure::{compose, AxisSide, ChartSpec, Figure, LinePlot, Renderer};
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH};

/// Which chart variant to produce from one input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// One duration line with the padded range applied as the visible bound.
    Duration,
    /// Duration and speedup on independent Y scales; the two units differ,
    /// so scaling is left to the renderer.
    DurationAndSpeedup,
}

/// Everything about a run that is configuration rather than data: the chart
/// variant, display strings, colors, and figure dimensions.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub x_label: String,
    pub duration_label: String,
    pub speedup_label: String,
    pub theme: Theme,
    pub width: i32,
    pub height: i32,
}

impl ChartConfig {
    pub fn duration() -> Self {
        Self::for_kind(ChartKind::Duration)
    }

    pub fn duration_and_speedup() -> Self {
        Self::for_kind(ChartKind::DurationAndSpeedup)
    }

    fn for_kind(kind: ChartKind) -> Self {
        Self {
            kind,
            x_label: "Threads".to_string(),
            duration_label: "Duration, ms".to_string(),
            speedup_label: "Speedup".to_string(),
            theme: Theme::dark(),
            width: WIDTH,
            height: HEIGHT,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Load -> extract -> compose, fail-fast. No renderer involved yet.
pub fn compose_chart(path: impl AsRef<Path>, config: &ChartConfig) -> Result<Figure, ChartError> {
    let dataset = Dataset::from_path(path)?;
    compose_from_dataset(&dataset, config)
}

/// Same as `compose_chart` for an already-loaded dataset.
pub fn compose_from_dataset(dataset: &Dataset, config: &ChartConfig) -> Result<Figure, ChartError> {
    let x = dataset.thread_counts()?;
    let duration = Series::extract(dataset, DURATION_COLUMN)?;

    let mut spec = ChartSpec::new(x, config.x_label.clone());
    spec.width = config.width;
    spec.height = config.height;
    spec = spec.with_line(LinePlot::new(
        duration,
        AxisSide::Primary,
        config.theme.duration_line,
        config.duration_label.clone(),
    ));

    match config.kind {
        ChartKind::Duration => {
            spec = spec.with_manual_range();
        }
        ChartKind::DurationAndSpeedup => {
            let speedup = Series::extract(dataset, SPEEDUP_COLUMN)?;
            spec = spec.with_line(LinePlot::new(
                speedup,
                AxisSide::Secondary,
                config.theme.speedup_line,
                config.speedup_label.clone(),
            ));
        }
    }

    compose(spec)
}

/// The whole pipeline for one invocation: compose a figure from `path` and
/// hand it to `renderer`. Any stage failure aborts before the renderer sees
/// anything; a partial chart is never displayed.
pub fn render_chart(
    path: impl AsRef<Path>,
    config: &ChartConfig,
    renderer: &mut dyn Renderer,
) -> anyhow::Result<()> {
    let figure = compose_chart(path, config)?;
    renderer.render(&figure)
}
