// File: crates/overview-chart/src/grid.rs
// Summary: Tick layout helpers: evenly spaced values and "nice" axis ranges.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `span / intervals` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(span: f64, intervals: usize) -> f64 {
    let raw = (span / intervals.max(1) as f64).abs();
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Expand `[min, max]` outward to multiples of a nice step.
/// Returns `(nice_min, nice_max, step)`.
pub fn nice_range(min: f64, max: f64, intervals: usize) -> (f64, f64, f64) {
    let (lo, hi) = if (max - min).abs() < 1e-12 { (min - 0.5, max + 0.5) } else { (min, max) };
    let step = nice_step(hi - lo, intervals);
    ((lo / step).floor() * step, (hi / step).ceil() * step, step)
}
