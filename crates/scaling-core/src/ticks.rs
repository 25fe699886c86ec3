// File: crates/scaling-core/src/ticks.rs
// Summary: Tick layout and label helpers shared by rendering backends.

use crate::range::AxisRange;

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick positions with display labels for one Y axis.
pub fn tick_labels(range: &AxisRange, steps: usize) -> Vec<(f64, String)> {
    linspace(range.min, range.max, steps)
        .into_iter()
        .map(|v| (v, format_value(v)))
        .collect()
}

/// Compact numeric label: large values drop the fraction, small ones keep
/// two digits so speedup ratios stay readable.
pub fn format_value(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{value:.0}")
    } else if value.abs() >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}
