// File: crates/overview-chart/src/series.rs
// Summary: Dataset model for the combo chart: month-indexed lines and bars with gaps.

use crate::axis::AxisId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Bar,
}

/// Palette slot a series is painted with; the theme resolves it to a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesRole {
    Budget,
    Actual,
    Projection,
}

/// One dataset. `data[i]` is the value for month `i`; `None` is not drawn and
/// breaks a line.
#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub series_type: SeriesType,
    pub role: SeriesRole,
    pub axis: AxisId,
    pub data: Vec<Option<f64>>,
    /// On/off dash intervals for line strokes.
    pub dash: Option<[f32; 2]>,
    /// Bars sharing a stack key occupy the same slot within a month band.
    pub stack: Option<String>,
    pub stroke_width: f32,
}

impl Series {
    pub fn line<I: IntoIterator<Item = Option<f64>>>(label: impl Into<String>, role: SeriesRole, data: I) -> Self {
        Self {
            label: label.into(),
            series_type: SeriesType::Line,
            role,
            axis: AxisId::Cumulative,
            data: data.into_iter().collect(),
            dash: None,
            stack: None,
            stroke_width: 2.0,
        }
    }

    pub fn bar<I: IntoIterator<Item = Option<f64>>>(label: impl Into<String>, role: SeriesRole, data: I) -> Self {
        Self {
            label: label.into(),
            series_type: SeriesType::Bar,
            role,
            axis: AxisId::Monthly,
            data: data.into_iter().collect(),
            dash: None,
            stack: None,
            stroke_width: 2.0,
        }
    }

    pub fn with_dash(mut self, on: f32, off: f32) -> Self {
        self.dash = Some([on, off]);
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Present values with their month index.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.data.iter().enumerate().filter_map(|(i, v)| v.map(|v| (i, v)))
    }

    /// Runs of consecutive present points; each run is drawn as one polyline.
    pub fn segments(&self) -> Vec<Vec<(usize, f64)>> {
        let mut out: Vec<Vec<(usize, f64)>> = Vec::new();
        let mut current: Vec<(usize, f64)> = Vec::new();
        for (i, v) in self.data.iter().enumerate() {
            match v {
                Some(v) if v.is_finite() => current.push((i, *v)),
                _ => {
                    if !current.is_empty() { out.push(std::mem::take(&mut current)); }
                }
            }
        }
        if !current.is_empty() { out.push(current); }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_split_segments() {
        let s = Series::line("p", SeriesRole::Projection, [None, Some(1.0), Some(2.0), None, Some(4.0)]);
        let segs = s.segments();
        assert_eq!(segs, vec![vec![(1, 1.0), (2, 2.0)], vec![(4, 4.0)]]);
        assert_eq!(s.points().count(), 3);
    }
}
