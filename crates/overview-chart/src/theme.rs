// File: crates/overview-chart/src/theme.rs
// Summary: Light/Dark theming for chart chrome and the budget/actual/projection palette.

use skia_safe as skia;

use crate::series::{SeriesRole, SeriesType};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub budget: skia::Color,
    pub actual: skia::Color,
    pub projection: skia::Color,
    /// Alpha applied to bar fills; the bar outline keeps the full color.
    pub bar_fill_alpha: u8,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            budget: skia::Color::from_argb(255, 64, 160, 255),
            actual: skia::Color::from_argb(255, 255, 120, 96),
            projection: skia::Color::from_argb(255, 255, 200, 70),
            bar_fill_alpha: 110,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            budget: skia::Color::from_argb(255, 32, 120, 200),
            actual: skia::Color::from_argb(255, 220, 80, 60),
            projection: skia::Color::from_argb(255, 200, 140, 20),
            bar_fill_alpha: 90,
        }
    }

    pub fn role_color(&self, role: SeriesRole) -> skia::Color {
        match role {
            SeriesRole::Budget => self.budget,
            SeriesRole::Actual => self.actual,
            SeriesRole::Projection => self.projection,
        }
    }

    pub fn fill_color(&self, role: SeriesRole, series_type: SeriesType) -> skia::Color {
        let c = self.role_color(role);
        match series_type {
            SeriesType::Bar => c.with_a(self.bar_fill_alpha),
            SeriesType::Line => c,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
