// File: crates/scaling-examples/src/bin/scaling.rs
// Summary: Minimal example composing a dual-axis scaling chart from inline data.

use scaling_core::figure::{compose, AxisSide, ChartSpec, LinePlot};
use scaling_core::{Series, Theme};
use scaling_render_skia::SkiaRenderer;

fn main() {
    let theme = Theme::dark();
    let x = vec![1, 2, 4, 8, 16];
    let duration = Series::new("Duration", vec![960.0, 505.0, 270.0, 160.0, 120.0]);
    let speedup = Series::new("Speedup", vec![1.0, 1.9, 3.6, 6.0, 8.0]);

    let spec = ChartSpec::new(x, "Threads")
        .with_line(LinePlot::new(
            duration,
            AxisSide::Primary,
            theme.duration_line,
            "Duration, ms",
        ))
        .with_line(LinePlot::new(
            speedup,
            AxisSide::Secondary,
            theme.speedup_line,
            "Speedup",
        ));
    let figure = compose(spec).expect("compose figure");

    let out = std::path::PathBuf::from("target/out/example_scaling.png");
    SkiaRenderer::new(theme)
        .render_to_png(&figure, &out)
        .expect("render to png");
    println!("Wrote {}", out.display());
}
