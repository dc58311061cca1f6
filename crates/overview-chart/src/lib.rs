// File: crates/overview-chart/src/lib.rs
// Summary: Renderer entry point; exports the annual overview chart and its rendering API.

pub mod axis;
pub mod chart;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisId, AxisPosition};
pub use chart::{AnnualChart, Layout, RenderOptions};
pub use interaction::{ClickEvent, ClickHandler, ElementHit, LogClickHandler};
pub use series::{Series, SeriesRole, SeriesType};
pub use text::TextShaper;
pub use theme::Theme;
