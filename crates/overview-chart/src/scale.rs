// File: crates/overview-chart/src/scale.rs
// Summary: Month (category) X scale and linear value Y scale.

/// Horizontal category scale: `count` equal bands across `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count: count.max(1) }
    }
    #[inline]
    pub fn band_width(&self) -> f32 {
        (self.right_px - self.left_px) / self.count as f32
    }
    /// Pixel x at the middle of band `index`.
    #[inline]
    pub fn center(&self, index: usize) -> f32 {
        self.left_px + (index as f32 + 0.5) * self.band_width()
    }
    /// Band under pixel `px`, if inside the scale.
    pub fn index_at(&self, px: f32) -> Option<usize> {
        if px < self.left_px || px > self.right_px {
            return None;
        }
        let i = ((px - self.left_px) / self.band_width()).floor() as usize;
        Some(i.min(self.count - 1))
    }
}

/// Vertical linear scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { top_px, bottom_px, vmin, vmax }
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_bands_round_trip() {
        let s = CategoryScale::new(0.0, 120.0, 12);
        assert_eq!(s.band_width(), 10.0);
        assert_eq!(s.center(3), 35.0);
        assert_eq!(s.index_at(35.0), Some(3));
        assert_eq!(s.index_at(120.0), Some(11));
        assert_eq!(s.index_at(-1.0), None);
    }

    #[test]
    fn value_scale_maps_ends() {
        let s = ValueScale::new(10.0, 110.0, 0.0, 50.0);
        assert_eq!(s.to_px(0.0), 110.0);
        assert_eq!(s.to_px(50.0), 10.0);
        assert_eq!(s.to_px(25.0), 60.0);
    }
}
