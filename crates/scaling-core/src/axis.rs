// File: crates/scaling-core/src/axis.rs
// Summary: Axis model with label and optional explicit range.

use crate::range::AxisRange;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    /// `None` delegates scaling to the renderer (data extents plus margin).
    pub range: Option<AxisRange>,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            range: None,
        }
    }

    pub fn with_range(label: impl Into<String>, range: AxisRange) -> Self {
        Self {
            label: label.into(),
            range: Some(range),
        }
    }
}
