// File: crates/overview-chart/src/chart.rs
// Summary: Annual overview chart and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::{anyhow, bail, Context, Result};
use skia_safe as skia;

use overview_core::{project_annual, AnnualOverview, ShapeError, MONTHS};

use crate::axis::{Axis, AxisId, AxisPosition};
use crate::geometry::RectI32;
use crate::scale::{CategoryScale, ValueScale};
use crate::series::{Series, SeriesRole, SeriesType};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Tick intervals requested when autoscaling an axis.
const TICK_INTERVALS: usize = 5;
/// Fraction of a month band covered by its bars.
const BAR_BAND_FILL: f32 = 0.8;
const POINT_RADIUS: f32 = 3.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels, month labels, axis titles and legend text.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

/// Pixel placement of a chart for one set of render options.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub plot: RectI32,
    pub x: CategoryScale,
    pub y: ValueScale,
    pub y_aggr: ValueScale,
}

impl Layout {
    pub fn scale(&self, axis: AxisId) -> &ValueScale {
        match axis {
            AxisId::Monthly => &self.y,
            AxisId::Cumulative => &self.y_aggr,
        }
    }
}

/// Combo line/bar chart over month categories with a monthly (left) and a
/// cumulative (right) value axis.
#[derive(Clone, Debug)]
pub struct AnnualChart {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub y_axis: Axis,
    pub y_aggr_axis: Axis,
}

impl Default for AnnualChart {
    fn default() -> Self { Self::new() }
}

impl AnnualChart {
    pub fn new() -> Self {
        Self {
            labels: MONTHS.iter().map(|m| m.to_string()).collect(),
            series: Vec::new(),
            y_axis: Axis::monthly(),
            y_aggr_axis: Axis::cumulative(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// The five standard datasets: YTD budget, YTD actual and the dashed
    /// projection as lines on the cumulative axis, then monthly budget and
    /// actual bars on the monthly axis. Axes are autoscaled.
    pub fn from_overview(overview: &AnnualOverview, budget: &[f64], actual: &[f64]) -> Self {
        let mut chart = Self::new();
        chart.add_series(Series::line("YTD Budget", SeriesRole::Budget, overview.budget_ytd.iter().copied().map(Some)));
        chart.add_series(Series::line("YTD Actual", SeriesRole::Actual, overview.actual_ytd.iter().copied().map(Some)));
        chart.add_series(
            Series::line("YTD Projection", SeriesRole::Projection, overview.projected.iter().copied())
                .with_dash(5.0, 15.0),
        );
        chart.add_series(
            Series::bar("Monthly Budget", SeriesRole::Budget, budget.iter().copied().map(Some)).with_stack("budget"),
        );
        chart.add_series(
            Series::bar("Monthly Actuals", SeriesRole::Actual, actual.iter().copied().map(Some)).with_stack("actual"),
        );
        chart.autoscale_axes();
        chart
    }

    /// Project `budget`/`actual` and build the standard chart in one step.
    pub fn from_monthly(budget: &[f64], actual: &[f64]) -> std::result::Result<Self, ShapeError> {
        let overview = project_annual(budget, actual)?;
        Ok(Self::from_overview(&overview, budget, actual))
    }

    pub fn axis(&self, id: AxisId) -> &Axis {
        match id {
            AxisId::Monthly => &self.y_axis,
            AxisId::Cumulative => &self.y_aggr_axis,
        }
    }

    /// Fit both value axes to the series plotted against them.
    pub fn autoscale_axes(&mut self) {
        let values_on = |id: AxisId| -> Vec<f64> {
            self.series
                .iter()
                .filter(|s| s.axis == id)
                .flat_map(|s| s.points().map(|(_, v)| v))
                .collect()
        };
        let monthly = values_on(AxisId::Monthly);
        let cumulative = values_on(AxisId::Cumulative);
        self.y_axis.autoscale(monthly, TICK_INTERVALS);
        self.y_aggr_axis.autoscale(cumulative, TICK_INTERVALS);
    }

    pub fn layout(&self, opts: &RenderOptions) -> Layout {
        let plot = opts.insets.plot_rect(opts.width, opts.height);
        let (top, bottom) = (plot.top as f32, plot.bottom as f32);
        Layout {
            plot,
            x: CategoryScale::new(plot.left as f32, plot.right as f32, self.labels.len()),
            y: ValueScale::new(top, bottom, self.y_axis.min, self.y_axis.max),
            y_aggr: ValueScale::new(top, bottom, self.y_aggr_axis.min, self.y_aggr_axis.max),
        }
    }

    /// Slot of each bar series within a month band: `(slot, slot_count)`.
    /// Bars sharing a stack key share a slot; an unkeyed bar gets its own.
    fn bar_slots(&self) -> Vec<Option<(usize, usize)>> {
        let mut keys: Vec<String> = Vec::new();
        let mut slots = Vec::with_capacity(self.series.len());
        for (i, s) in self.series.iter().enumerate() {
            if s.series_type != SeriesType::Bar {
                slots.push(None);
                continue;
            }
            let key = s.stack.clone().unwrap_or_else(|| format!("#{i}"));
            let slot = match keys.iter().position(|k| *k == key) {
                Some(p) => p,
                None => {
                    keys.push(key);
                    keys.len() - 1
                }
            };
            slots.push(Some(slot));
        }
        let count = keys.len();
        slots.into_iter().map(|s| s.map(|slot| (slot, count))).collect()
    }

    /// Pixel rect of the bar for `series_index` at `month`, if it has a value.
    pub fn bar_rect(&self, layout: &Layout, series_index: usize, month: usize) -> Option<skia::Rect> {
        let series = self.series.get(series_index)?;
        let (slot, count) = self.bar_slots().get(series_index).copied().flatten()?;
        let value = series.data.get(month).copied().flatten()?;
        Some(bar_rect_at(layout, series.axis, month, slot, count, value))
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), width = opts.width, height = opts.height, "wrote chart");
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA pixels: `(pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            bail!("reading back {}x{} pixels failed", opts.width, opts.height);
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            bail!("surface size must be positive, got {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        let layout = self.layout(opts);
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(theme.background);
        draw_grid(canvas, &layout, &self.y_axis, theme);

        // Bars first so the cumulative lines stay readable on top.
        let slots = self.bar_slots();
        for (i, s) in self.series.iter().enumerate() {
            if let Some((slot, count)) = slots[i] {
                draw_bar_series(canvas, &layout, s, slot, count, theme);
            }
        }
        for s in self.series.iter().filter(|s| s.series_type == SeriesType::Line) {
            draw_line_series(canvas, &layout, s, theme);
        }

        draw_axes(canvas, &layout, theme);
        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_axis_labels(canvas, &shaper, &layout, self, theme);
            draw_legend(canvas, &shaper, &layout, &self.series, theme);
        }
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn bar_rect_at(layout: &Layout, axis: AxisId, month: usize, slot: usize, count: usize, value: f64) -> skia::Rect {
    let band = layout.x.band_width() * BAR_BAND_FILL;
    let width = band / count.max(1) as f32;
    let left = layout.x.center(month) - band * 0.5 + width * slot as f32;
    let scale = layout.scale(axis);
    let y0 = scale.to_px(0.0);
    let y1 = scale.to_px(value);
    skia::Rect::from_ltrb(left, y0.min(y1), left + width, y0.max(y1))
}

fn draw_grid(canvas: &skia::Canvas, layout: &Layout, y_axis: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let p = layout.plot;
    // month band boundaries
    for i in 0..=layout.x.count {
        let x = layout.x.left_px + layout.x.band_width() * i as f32;
        canvas.draw_line((x, p.top as f32), (x, p.bottom as f32), &paint);
    }
    // monthly axis ticks
    for v in y_axis.ticks() {
        let y = layout.y.to_px(v);
        canvas.draw_line((p.left as f32, y), (p.right as f32, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    let p = layout.plot;
    let (l, t, r, b) = (p.left as f32, p.top as f32, p.right as f32, p.bottom as f32);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
    canvas.draw_line((r, t), (r, b), &paint);
}

fn draw_axis_labels(canvas: &skia::Canvas, shaper: &TextShaper, layout: &Layout, chart: &AnnualChart, theme: &Theme) {
    let p = layout.plot;
    for axis in [&chart.y_axis, &chart.y_aggr_axis] {
        let scale = layout.scale(axis.id);
        let (x, anchor) = match axis.position {
            AxisPosition::Left => (p.left as f32 - 8.0, Anchor::Right),
            AxisPosition::Right => (p.right as f32 + 8.0, Anchor::Left),
        };
        for v in axis.ticks() {
            shaper.draw(canvas, &format_tick(v), x, scale.to_px(v) + 4.0, anchor, 12.0, theme.tick, true);
        }
        shaper.draw(canvas, &axis.label, x, p.top as f32 - 8.0, anchor, 12.0, theme.axis_label, false);
    }
    for (i, label) in chart.labels.iter().enumerate() {
        shaper.draw(canvas, label, layout.x.center(i), p.bottom as f32 + 20.0, Anchor::Center, 13.0, theme.axis_label, false);
    }
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, layout: &Layout, series: &[Series], theme: &Theme) {
    const SWATCH: f32 = 12.0;
    const GAP: f32 = 18.0;
    const SIZE: f32 = 12.0;

    let widths: Vec<f32> = series
        .iter()
        .map(|s| SWATCH + 6.0 + shaper.measure_width(&s.label, SIZE, false))
        .collect();
    let total: f32 = widths.iter().sum::<f32>() + GAP * widths.len().saturating_sub(1) as f32;
    let mid = (layout.plot.left + layout.plot.right) as f32 * 0.5;
    let mut x = mid - total * 0.5;
    let y = 20.0;

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    for (s, w) in series.iter().zip(widths) {
        swatch.set_color(theme.fill_color(s.role, s.series_type));
        swatch.set_style(skia::paint::Style::Fill);
        canvas.draw_rect(skia::Rect::from_xywh(x, y - SWATCH, SWATCH, SWATCH), &swatch);
        swatch.set_color(theme.role_color(s.role));
        swatch.set_style(skia::paint::Style::Stroke);
        swatch.set_stroke_width(1.5);
        canvas.draw_rect(skia::Rect::from_xywh(x, y - SWATCH, SWATCH, SWATCH), &swatch);
        shaper.draw(canvas, &s.label, x + SWATCH + 6.0, y, Anchor::Left, SIZE, theme.axis_label, false);
        x += w + GAP;
    }
}

fn draw_bar_series(canvas: &skia::Canvas, layout: &Layout, series: &Series, slot: usize, count: usize, theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.fill_color(series.role, series.series_type));

    let mut outline = skia::Paint::default();
    outline.set_anti_alias(true);
    outline.set_style(skia::paint::Style::Stroke);
    outline.set_stroke_width(series.stroke_width);
    outline.set_color(theme.role_color(series.role));

    for (month, value) in series.points() {
        if month >= layout.x.count || !value.is_finite() {
            continue;
        }
        let rect = bar_rect_at(layout, series.axis, month, slot, count, value);
        canvas.draw_rect(rect, &fill);
        canvas.draw_rect(rect, &outline);
    }
}

fn draw_line_series(canvas: &skia::Canvas, layout: &Layout, series: &Series, theme: &Theme) {
    let scale = layout.scale(series.axis);
    let color = theme.role_color(series.role);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_color(color);
    if let Some(dash) = series.dash {
        stroke.set_path_effect(skia::PathEffect::dash(&dash, 0.0));
    }

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);
    dot.set_color(color);

    for segment in series.segments() {
        let points: Vec<(f32, f32)> = segment
            .iter()
            .filter(|(month, _)| *month < layout.x.count)
            .map(|&(month, v)| (layout.x.center(month), scale.to_px(v)))
            .collect();
        if let Some((&first, rest)) = points.split_first() {
            if !rest.is_empty() {
                let mut path = skia::Path::new();
                path.move_to(first);
                for &p in rest {
                    path.line_to(p);
                }
                canvas.draw_path(&path, &stroke);
            }
        }
        for p in points {
            canvas.draw_circle(p, POINT_RADIUS, &dot);
        }
    }
}

/// Compact tick text: `1250`, `1.5k`, `2M`.
pub fn format_tick(v: f64) -> String {
    let a = v.abs();
    let (scaled, suffix) = if a >= 1e6 {
        (v / 1e6, "M")
    } else if a >= 1e4 {
        (v / 1e3, "k")
    } else {
        (v, "")
    };
    if (scaled - scaled.round()).abs() < 1e-9 {
        format!("{}{}", scaled.round() as i64, suffix)
    } else {
        format!("{:.1}{}", scaled, suffix)
    }
}
