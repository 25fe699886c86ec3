// File: crates/scaling-core/src/figure.rs
// Summary: Chart composition: spec -> renderable figure with shared X and one or two Y axes.

use crate::axis::Axis;
use crate::error::ChartError;
use crate::range::AxisRange;
use crate::series::Series;
use crate::theme::Color;
use crate::types::{HEIGHT, WIDTH};

/// Which vertical scale a line is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Primary,
    Secondary,
}

/// One line plot: a series plus its axis binding, stroke color, and legend label.
#[derive(Clone, Debug)]
pub struct LinePlot {
    pub series: Series,
    pub side: AxisSide,
    pub color: Color,
    pub label: String,
}

impl LinePlot {
    pub fn new(series: Series, side: AxisSide, color: Color, label: impl Into<String>) -> Self {
        Self {
            series,
            side,
            color,
            label: label.into(),
        }
    }
}

/// Transient description of one figure, built per invocation. One spec covers
/// both rendering modes: a single axis with the padded range applied, and a
/// dual-axis layout whose scaling is delegated to the renderer.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    /// Shared X domain in file order; also the tick positions.
    pub x: Vec<u32>,
    pub x_label: String,
    pub lines: Vec<LinePlot>,
    /// Apply the padded range to each axis instead of delegating.
    pub manual_range: bool,
    pub width: i32,
    pub height: i32,
}

impl ChartSpec {
    pub fn new(x: Vec<u32>, x_label: impl Into<String>) -> Self {
        Self {
            x,
            x_label: x_label.into(),
            lines: Vec::new(),
            manual_range: false,
            width: WIDTH,
            height: HEIGHT,
        }
    }

    pub fn with_line(mut self, line: LinePlot) -> Self {
        self.lines.push(line);
        self
    }

    pub fn with_manual_range(mut self) -> Self {
        self.manual_range = true;
        self
    }
}

/// A composed figure, ready to hand to a rendering backend.
#[derive(Clone, Debug)]
pub struct Figure {
    pub x_ticks: Vec<u32>,
    pub x_label: String,
    pub lines: Vec<LinePlot>,
    pub y_primary: Axis,
    pub y_secondary: Option<Axis>,
    pub width: i32,
    pub height: i32,
}

impl Figure {
    /// Data extents for one side plus a small margin, used when an axis has
    /// no explicit range. Degenerate spans are widened so the scale stays
    /// usable.
    pub fn y_extents(&self, side: AxisSide) -> Option<AxisRange> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for line in self.lines.iter().filter(|l| l.side == side) {
            for &v in &line.series.values {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            return None;
        }
        if (hi - lo).abs() < 1e-9 {
            hi = lo + 1.0;
        }
        let margin = (hi - lo) * 0.02;
        Some(AxisRange::new(lo - margin, hi + margin))
    }

    /// Resolved visible range for a side: the explicit bound when present,
    /// otherwise the auto extents.
    pub fn y_range(&self, side: AxisSide) -> Option<AxisRange> {
        let axis = match side {
            AxisSide::Primary => Some(&self.y_primary),
            AxisSide::Secondary => self.y_secondary.as_ref(),
        };
        match axis.and_then(|a| a.range) {
            Some(range) => Some(range),
            None => self.y_extents(side),
        }
    }
}

/// Assemble a figure from one spec. Every series must align with the shared
/// X sequence. Each Y axis takes its label from the first line bound to it;
/// with `manual_range` it also gets the padded range over the union of its
/// lines' values.
pub fn compose(spec: ChartSpec) -> Result<Figure, ChartError> {
    if spec.lines.is_empty() {
        return Err(ChartError::NoSeries);
    }
    for line in &spec.lines {
        if line.series.len() != spec.x.len() {
            return Err(ChartError::Misaligned {
                series: line.series.name.clone(),
                len: line.series.len(),
                expected: spec.x.len(),
            });
        }
    }

    let y_primary = side_axis(&spec, AxisSide::Primary)?.ok_or(ChartError::NoSeries)?;
    let y_secondary = side_axis(&spec, AxisSide::Secondary)?;

    Ok(Figure {
        x_ticks: spec.x,
        x_label: spec.x_label,
        lines: spec.lines,
        y_primary,
        y_secondary,
        width: spec.width,
        height: spec.height,
    })
}

fn side_axis(spec: &ChartSpec, side: AxisSide) -> Result<Option<Axis>, ChartError> {
    let members: Vec<&LinePlot> = spec.lines.iter().filter(|l| l.side == side).collect();
    let Some(first) = members.first() else {
        return Ok(None);
    };
    if !spec.manual_range {
        return Ok(Some(Axis::new(first.label.clone())));
    }
    // Union of all values bound to this side, padded as one amplitude.
    let mut merged = Vec::new();
    for line in &members {
        merged.extend_from_slice(&line.series.values);
    }
    let combined = Series::new(first.series.name.clone(), merged);
    let range = AxisRange::padded(&combined)?;
    Ok(Some(Axis::with_range(first.label.clone(), range)))
}

/// Seam to the external drawing/display backend. Implementations decide how
/// a figure becomes pixels; composition never does.
pub trait Renderer {
    fn render(&mut self, figure: &Figure) -> anyhow::Result<()>;
}
