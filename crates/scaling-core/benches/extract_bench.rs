use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scaling_core::{AxisRange, Dataset, Series, DURATION_COLUMN};

fn write_table(rows: usize) -> std::path::PathBuf {
    let mut contents = String::from("T,Duration,Speedup\n");
    for i in 0..rows {
        let duration = 1000.0 / (i + 1) as f64;
        let speedup = (i + 1) as f64;
        contents.push_str(&format!("{},{duration:.3},{speedup:.3}\n", i + 1));
    }
    let path = std::path::PathBuf::from("target/bench_data").join(format!("rows_{rows}.csv"));
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for &rows in &[1_000usize, 10_000usize] {
        let path = write_table(rows);
        let dataset = Dataset::from_path(&path).expect("load");
        group.bench_with_input(BenchmarkId::from_parameter(rows), &dataset, |b, d| {
            b.iter(|| {
                let series = Series::extract(d, DURATION_COLUMN).expect("extract");
                black_box(series.len());
            });
        });
    }
    group.finish();
}

fn bench_padded_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("padded_range");
    for &n in &[10_000usize, 100_000usize] {
        let values = (0..n).map(|i| (i % 977) as f64 + 0.5).collect::<Vec<_>>();
        let series = Series::new("Duration", values);
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, s| {
            b.iter(|| {
                let range = AxisRange::padded(black_box(s)).expect("range");
                black_box(range.span());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract, bench_padded_range);
criterion_main!(benches);
