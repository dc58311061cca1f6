// File: crates/overview-chart/src/axis.rs
// Summary: Value axes for the two y scales (monthly bars, cumulative lines).

use crate::grid::nice_range;

/// Which value axis a series is plotted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisId {
    /// `y`: monthly amounts, drawn on the left.
    Monthly,
    /// `y-aggr`: year-to-date totals, drawn on the right.
    Cumulative,
}

impl AxisId {
    pub fn key(&self) -> &'static str {
        match self {
            AxisId::Monthly => "y",
            AxisId::Cumulative => "y-aggr",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub id: AxisId,
    pub label: String,
    pub position: AxisPosition,
    pub min: f64,
    pub max: f64,
    /// Distance between tick marks; `0.0` lets the renderer pick evenly spaced ticks.
    pub step: f64,
}

impl Axis {
    pub fn new(id: AxisId, label: impl Into<String>, position: AxisPosition, min: f64, max: f64) -> Self {
        Self { id, label: label.into(), position, min, max, step: 0.0 }
    }

    pub fn monthly() -> Self {
        Self::new(AxisId::Monthly, "Monthly", AxisPosition::Left, 0.0, 100.0)
    }

    pub fn cumulative() -> Self {
        Self::new(AxisId::Cumulative, "YTD", AxisPosition::Right, 0.0, 1200.0)
    }

    /// Fit a nice linear range around `values`, always including zero so
    /// bars grow from the baseline. Leaves the axis unchanged when there is no data.
    pub fn autoscale<I: IntoIterator<Item = f64>>(&mut self, values: I, intervals: usize) -> bool {
        let mut lo = 0.0f64;
        let mut hi = 0.0f64;
        let mut any = false;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
            any = true;
        }
        if !any {
            return false;
        }
        let (min, max, step) = nice_range(lo, hi, intervals);
        self.min = min;
        self.max = max;
        self.step = step;
        true
    }

    /// Tick values from `min` to `max` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        if self.step <= 0.0 || self.max <= self.min {
            return crate::grid::linspace(self.min, self.max, 6);
        }
        let n = ((self.max - self.min) / self.step).round() as usize;
        (0..=n).map(|i| self.min + self.step * i as f64).collect()
    }
}
