// File: crates/overview-chart/src/types.rs
// Summary: Surface defaults and margins around the plot area.

use crate::geometry::RectI32;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Margins around the plot rect, in pixels. Both sides carry a value axis,
/// so left and right are symmetric by default; top leaves room for the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Plot area left after removing the insets from a `width` x `height` surface.
    pub fn plot_rect(&self, width: i32, height: i32) -> RectI32 {
        let right = (width - self.right as i32).max(self.left as i32 + 1);
        let bottom = (height - self.bottom as i32).max(self.top as i32 + 1);
        RectI32::from_ltrb(self.left as i32, self.top as i32, right, bottom)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 80, 48, 48)
    }
}
