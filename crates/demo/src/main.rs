// File: crates/demo/src/main.rs
// Summary: Demo loads a benchmark CSV and renders duration and scaling charts to PNGs.

use anyhow::{Context, Result};
use scaling_core::pipeline::{render_chart, ChartConfig};
use scaling_core::{theme, Dataset, SPEEDUP_COLUMN};
use scaling_render_skia::SkiaRenderer;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Input path from CLI, theme name optionally after it.
    let raw = std::env::args().nth(1).unwrap_or_else(|| "output.csv".to_string());
    let theme = theme::find(&std::env::args().nth(2).unwrap_or_else(|| "light".to_string()));
    let path = Path::new(&raw);

    let dataset = Dataset::from_path(path)
        .with_context(|| format!("failed to load benchmark table '{}'", path.display()))?;
    println!("Using input file: {}", path.display());
    println!("Headers: {:?}", dataset.headers());
    println!("Loaded {} benchmark rows", dataset.len());

    let records = dataset.records()?;
    if let Some(best) = records
        .iter()
        .min_by(|a, b| a.duration_ms.total_cmp(&b.duration_ms))
    {
        println!("Fastest run: {} ms at {} threads", best.duration_ms, best.threads);
    }
    if let Some(peak) = records.iter().filter_map(|r| r.speedup).reduce(f64::max) {
        println!("Peak speedup: {peak:.2}x");
    }

    // 1) Duration with the padded Y bound
    let out_duration = out_name_with(path, "duration");
    let mut renderer = SkiaRenderer::to_png(&out_duration, theme);
    render_chart(path, &ChartConfig::duration().with_theme(theme), &mut renderer)
        .with_context(|| format!("rendering duration chart for '{}'", path.display()))?;
    println!("Wrote {}", out_duration.display());

    // 2) Duration + speedup on independent scales, when the file has the column
    if dataset.has_column(SPEEDUP_COLUMN) {
        let out_scaling = out_name_with(path, "scaling");
        let mut renderer = SkiaRenderer::to_png(&out_scaling, theme);
        render_chart(
            path,
            &ChartConfig::duration_and_speedup().with_theme(theme),
            &mut renderer,
        )
        .with_context(|| format!("rendering scaling chart for '{}'", path.display()))?;
        println!("Wrote {}", out_scaling.display());
    } else {
        println!("No '{SPEEDUP_COLUMN}' column; skipping the dual-axis chart");
    }

    Ok(())
}

/// Produce output file name like target/out/<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{stem}_{suffix}.png"));
    out
}
