// File: crates/scaling-core/tests/pipeline.rs
// Purpose: End-to-end pipeline runs over fixture files, including the renderer hand-off.

use scaling_core::figure::{Figure, Renderer};
use scaling_core::pipeline::{compose_chart, render_chart, ChartConfig};
use scaling_core::ChartError;
use std::path::PathBuf;

const EPS: f64 = 1e-9;

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from("target/test_data").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}

/// Captures composed figures instead of drawing them.
struct RecordingRenderer {
    rendered: Vec<Figure>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, figure: &Figure) -> anyhow::Result<()> {
        self.rendered.push(figure.clone());
        Ok(())
    }
}

#[test]
fn duration_round_trip() {
    let path = write_fixture("pipeline_single.csv", "T,Duration\n1,100\n2,55\n4,30\n");
    let figure = compose_chart(&path, &ChartConfig::duration()).expect("compose");

    assert_eq!(figure.x_ticks, vec![1, 2, 4]);
    assert_eq!(figure.lines.len(), 1);
    assert_eq!(figure.lines[0].series.values, vec![100.0, 55.0, 30.0]);

    let range = figure.y_primary.range.expect("padded bound");
    assert!((range.min - 27.0).abs() < EPS);
    assert!((range.max - 110.0).abs() < EPS);
}

#[test]
fn dual_axis_round_trip() {
    let path = write_fixture(
        "pipeline_dual.csv",
        "T,Duration,Speedup\n1,100,1.0\n2,55,1.8\n4,30,3.3\n",
    );
    let figure = compose_chart(&path, &ChartConfig::duration_and_speedup()).expect("compose");

    assert_eq!(figure.x_ticks, vec![1, 2, 4]);
    assert_eq!(figure.lines.len(), 2);
    assert_eq!(figure.lines[0].series.values, vec![100.0, 55.0, 30.0]);
    assert_eq!(figure.lines[1].series.values, vec![1.0, 1.8, 3.3]);
    assert!(figure.y_secondary.is_some());
}

#[test]
fn dual_variant_requires_the_speedup_column() {
    let path = write_fixture("pipeline_no_speedup.csv", "T,Duration\n1,100\n");
    let err = compose_chart(&path, &ChartConfig::duration_and_speedup()).unwrap_err();
    match err {
        ChartError::Schema { column } => assert_eq!(column, "Speedup"),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn renderer_receives_the_composed_figure_once() {
    let path = write_fixture("pipeline_render.csv", "T,Duration\n1,100\n2,55\n");
    let mut renderer = RecordingRenderer { rendered: Vec::new() };
    render_chart(&path, &ChartConfig::duration(), &mut renderer).expect("render");

    assert_eq!(renderer.rendered.len(), 1);
    assert_eq!(renderer.rendered[0].x_ticks, vec![1, 2]);
}

#[test]
fn failing_stage_reaches_no_renderer() {
    let path = write_fixture("pipeline_bad.csv", "T,Duration\n1,abc\n");
    let mut renderer = RecordingRenderer { rendered: Vec::new() };
    let err = render_chart(&path, &ChartConfig::duration(), &mut renderer).unwrap_err();

    assert!(renderer.rendered.is_empty(), "no partial chart may be rendered");
    let chart_err = err.downcast::<ChartError>().expect("chart error");
    assert!(
        matches!(chart_err, ChartError::Coercion { row: 0, .. }),
        "got {chart_err:?}"
    );
}
