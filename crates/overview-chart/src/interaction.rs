// File: crates/overview-chart/src/interaction.rs
// Summary: Click hit testing against rendered bars and line points, plus the click handler hook.

use crate::chart::{AnnualChart, RenderOptions};
use crate::series::SeriesType;

/// Pixel distance within which a click selects a line point.
pub const POINT_HIT_RADIUS: f32 = 6.0;

/// Pointer click in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickEvent {
    pub x: f32,
    pub y: f32,
}

/// A chart element under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementHit {
    pub series_index: usize,
    pub label: String,
    pub month: usize,
    pub value: f64,
}

/// Receives every click together with the elements it landed on.
pub trait ClickHandler {
    fn on_click(&self, event: &ClickEvent, hits: &[ElementHit]);
}

impl<F> ClickHandler for F
where
    F: Fn(&ClickEvent, &[ElementHit]),
{
    fn on_click(&self, event: &ClickEvent, hits: &[ElementHit]) {
        self(event, hits)
    }
}

/// Logs clicks at debug level and does nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogClickHandler;

impl ClickHandler for LogClickHandler {
    fn on_click(&self, event: &ClickEvent, hits: &[ElementHit]) {
        tracing::debug!(x = event.x, y = event.y, ?hits, "handling chart click");
    }
}

impl AnnualChart {
    /// Elements under pixel `(x, y)` for a chart rendered with `opts`, in series order.
    pub fn hit_test(&self, opts: &RenderOptions, x: f32, y: f32) -> Vec<ElementHit> {
        let layout = self.layout(opts);
        if !layout.plot.contains(x, y) {
            return Vec::new();
        }
        let Some(month) = layout.x.index_at(x) else {
            return Vec::new();
        };

        let mut hits = Vec::new();
        for (i, s) in self.series.iter().enumerate() {
            let Some(value) = s.data.get(month).copied().flatten() else {
                continue;
            };
            let hit = match s.series_type {
                SeriesType::Bar => self
                    .bar_rect(&layout, i, month)
                    .is_some_and(|r| x >= r.left && x <= r.right && y >= r.top && y <= r.bottom),
                SeriesType::Line => {
                    let px = layout.x.center(month);
                    let py = layout.scale(s.axis).to_px(value);
                    (px - x).hypot(py - y) <= POINT_HIT_RADIUS
                }
            };
            if hit {
                hits.push(ElementHit { series_index: i, label: s.label.clone(), month, value });
            }
        }
        hits
    }

    /// Hit-test `event` and hand the result to `handler`.
    pub fn click<H: ClickHandler + ?Sized>(&self, opts: &RenderOptions, event: ClickEvent, handler: &H) -> Vec<ElementHit> {
        let hits = self.hit_test(opts, event.x, event.y);
        handler.on_click(&event, &hits);
        hits
    }
}
