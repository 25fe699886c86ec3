// File: crates/scaling-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: draws composed figures to PNG files/bytes or RGBA buffers.

use std::path::{Path, PathBuf};

use anyhow::Result;
use skia_safe as skia;

use scaling_core::figure::{AxisSide, Figure, Renderer};
use scaling_core::theme::{Color, Theme};
use scaling_core::ticks::{linspace, tick_labels};
use scaling_core::types::Insets;
use scaling_core::AxisRange;

/// Horizontal grid/tick line count per Y axis.
const Y_TICKS: usize = 6;

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// CPU raster renderer. Owns the display-side choices (margins, text on/off,
/// theme); the figure owns the data-side ones. The raster surface lives only
/// for the duration of one render call.
pub struct SkiaRenderer {
    pub theme: Theme,
    pub draw_labels: bool,
    output: Option<PathBuf>,
}

impl SkiaRenderer {
    /// Renderer for in-memory output (`render_to_png_bytes`, `render_to_rgba8`).
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            draw_labels: true,
            output: None,
        }
    }

    /// Renderer that writes a PNG to `path` on every `render` call.
    pub fn to_png(path: impl Into<PathBuf>, theme: Theme) -> Self {
        Self {
            theme,
            draw_labels: true,
            output: Some(path.into()),
        }
    }

    pub fn render_to_png(&self, figure: &Figure, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(figure)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, figure: &Figure) -> Result<Vec<u8>> {
        let mut surface = self.raster_surface(figure)?;
        self.draw(surface.canvas(), figure)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Raw RGBA8 pixels for window blitting: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, figure: &Figure) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster_surface(figure)?;
        self.draw(surface.canvas(), figure)?;

        let (w, h) = (figure.width, figure.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn raster_surface(&self, figure: &Figure) -> Result<skia::Surface> {
        skia::surfaces::raster_n32_premul((figure.width, figure.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
    }

    fn insets_for(figure: &Figure) -> Insets {
        // A secondary scale needs the same label room on the right as the
        // primary has on the left.
        if figure.y_secondary.is_some() {
            Insets::new(72, 72, 24, 56)
        } else {
            Insets::default()
        }
    }

    fn draw(&self, canvas: &skia::Canvas, figure: &Figure) -> Result<()> {
        let insets = Self::insets_for(figure);
        if figure.width <= insets.hsum() as i32 || figure.height <= insets.vsum() as i32 {
            anyhow::bail!(
                "figure {}x{} leaves no plot area inside the margins",
                figure.width,
                figure.height
            );
        }

        canvas.clear(to_skia(self.theme.background));

        // Plot rect
        let l = insets.left as i32;
        let r = figure.width - insets.right as i32;
        let t = insets.top as i32;
        let b = figure.height - insets.bottom as i32;

        let (x_min, x_max) = x_domain(&figure.x_ticks);
        let y_left = figure
            .y_range(AxisSide::Primary)
            .unwrap_or(AxisRange::new(0.0, 1.0));
        let y_right = figure
            .y_secondary
            .as_ref()
            .and_then(|_| figure.y_range(AxisSide::Secondary));

        self.draw_grid(canvas, figure, l, t, r, b, x_min, x_max);
        self.draw_axes(canvas, figure, l, t, r, b);

        for line in &figure.lines {
            let range = match line.side {
                AxisSide::Primary => y_left,
                AxisSide::Secondary => y_right.unwrap_or(y_left),
            };
            let points = line.series.points(&figure.x_ticks);
            self.draw_line_plot(canvas, &points, line.color, l, t, r, b, x_min, x_max, &range);
        }

        if self.draw_labels {
            self.draw_tick_labels(canvas, figure, l, t, r, b, x_min, x_max, &y_left, y_right.as_ref());
            self.draw_axis_labels(canvas, figure, l, t, r, b);
            self.draw_legend(canvas, figure, l, t);
        }
        Ok(())
    }

    fn draw_grid(
        &self,
        canvas: &skia::Canvas,
        figure: &Figure,
        l: i32,
        t: i32,
        r: i32,
        b: i32,
        x_min: f64,
        x_max: f64,
    ) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(self.theme.grid));
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.0);

        // verticals at the thread-count ticks
        let xspan = (x_max - x_min).max(1e-9);
        for &tick in &figure.x_ticks {
            let x = l as f32 + ((f64::from(tick) - x_min) / xspan) as f32 * (r - l) as f32;
            canvas.draw_line((x, t as f32), (x, b as f32), &paint);
        }
        // horizontals
        for y in linspace(t as f64, b as f64, Y_TICKS) {
            canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
        }
    }

    fn draw_axes(&self, canvas: &skia::Canvas, figure: &Figure, l: i32, t: i32, r: i32, b: i32) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(self.theme.axis_line));
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.5);

        canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &paint);
        canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &paint);
        if figure.y_secondary.is_some() {
            canvas.draw_line((r as f32, t as f32), (r as f32, b as f32), &paint);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_line_plot(
        &self,
        canvas: &skia::Canvas,
        points: &[(f64, f64)],
        color: Color,
        l: i32,
        t: i32,
        r: i32,
        b: i32,
        x_min: f64,
        x_max: f64,
        range: &AxisRange,
    ) {
        if points.is_empty() {
            return;
        }

        // Scale helpers
        let xspan = (x_max - x_min).max(1e-9);
        let yspan = range.span().max(1e-9);
        let sx = |x: f64| -> f32 { l as f32 + ((x - x_min) / xspan) as f32 * (r - l) as f32 };
        let sy = |y: f64| -> f32 { b as f32 - ((y - range.min) / yspan) as f32 * (b - t) as f32 };

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(to_skia(color));

        if points.len() == 1 {
            // Single measurement: no path to stroke, mark the point instead.
            let (x, y) = points[0];
            canvas.draw_circle((sx(x), sy(y)), 3.0, &stroke);
            return;
        }

        let mut path = skia::Path::new();
        let (x0, y0) = points[0];
        path.move_to((sx(x0), sy(y0)));
        for &(x, y) in points.iter().skip(1) {
            path.line_to((sx(x), sy(y)));
        }
        canvas.draw_path(&path, &stroke);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tick_labels(
        &self,
        canvas: &skia::Canvas,
        figure: &Figure,
        l: i32,
        t: i32,
        r: i32,
        b: i32,
        x_min: f64,
        x_max: f64,
        y_left: &AxisRange,
        y_right: Option<&AxisRange>,
    ) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(self.theme.tick));
        paint.set_anti_alias(true);
        let mut font = skia::Font::default();
        font.set_size(12.0);

        let xspan = (x_max - x_min).max(1e-9);
        for &tick in &figure.x_ticks {
            let x = l as f32 + ((f64::from(tick) - x_min) / xspan) as f32 * (r - l) as f32;
            let text = tick.to_string();
            // rough center: half the label width at ~7px per glyph
            canvas.draw_str(&text, (x - 3.5 * text.len() as f32, b as f32 + 18.0), &font, &paint);
        }

        for (value, text) in tick_labels(y_left, Y_TICKS) {
            let y = map_y(value, y_left, t, b);
            canvas.draw_str(&text, (l as f32 - 10.0 - 6.0 * text.len() as f32, y + 4.0), &font, &paint);
        }
        if let Some(range) = y_right {
            for (value, text) in tick_labels(range, Y_TICKS) {
                let y = map_y(value, range, t, b);
                canvas.draw_str(&text, (r as f32 + 10.0, y + 4.0), &font, &paint);
            }
        }
    }

    fn draw_axis_labels(
        &self,
        canvas: &skia::Canvas,
        figure: &Figure,
        l: i32,
        t: i32,
        r: i32,
        b: i32,
    ) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(self.theme.axis_label));
        paint.set_anti_alias(true);
        let mut font = skia::Font::default();
        font.set_size(14.0);

        canvas.draw_str(&figure.x_label, (r as f32 - 80.0, b as f32 + 40.0), &font, &paint);
        canvas.draw_str(&figure.y_primary.label, (l as f32 - 56.0, t as f32 - 8.0), &font, &paint);
        if let Some(axis) = &figure.y_secondary {
            canvas.draw_str(&axis.label, (r as f32 - 16.0, t as f32 - 8.0), &font, &paint);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, figure: &Figure, l: i32, t: i32) {
        let mut font = skia::Font::default();
        font.set_size(12.0);
        let mut text_paint = skia::Paint::default();
        text_paint.set_color(to_skia(self.theme.axis_label));
        text_paint.set_anti_alias(true);

        let x = l as f32 + 12.0;
        let mut y = t as f32 + 18.0;
        for line in &figure.lines {
            let mut swatch = skia::Paint::default();
            swatch.set_anti_alias(true);
            swatch.set_style(skia::paint::Style::Stroke);
            swatch.set_stroke_width(2.0);
            swatch.set_color(to_skia(line.color));
            canvas.draw_line((x, y - 4.0), (x + 18.0, y - 4.0), &swatch);
            canvas.draw_str(&line.label, (x + 24.0, y), &font, &text_paint);
            y += 16.0;
        }
    }
}

impl Renderer for SkiaRenderer {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        match self.output.clone() {
            Some(path) => self.render_to_png(figure, path),
            None => anyhow::bail!("no output path configured; use SkiaRenderer::to_png"),
        }
    }
}

fn map_y(value: f64, range: &AxisRange, t: i32, b: i32) -> f32 {
    let span = range.span().max(1e-9);
    b as f32 - ((value - range.min) / span) as f32 * (b - t) as f32
}

/// X domain from the tick sequence; a single tick still gets a span.
fn x_domain(ticks: &[u32]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &t in ticks {
        lo = lo.min(f64::from(t));
        hi = hi.max(f64::from(t));
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if (hi - lo).abs() < 1e-9 {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}
