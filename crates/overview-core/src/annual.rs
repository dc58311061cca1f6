// File: crates/overview-core/src/annual.rs
// Summary: Year-to-date running totals and the projected actual line for a budget-vs-actual year.

use crate::error::ShapeError;

pub const MONTHS_PER_YEAR: usize = 12;

/// Month abbreviations used as category labels, January first.
pub const MONTHS: [&str; MONTHS_PER_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Prefix sums: `out[i] == values[0] + .. + values[i]`. Empty in, empty out.
pub fn running_totals(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0f64, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Sum of all values; `0.0` for an empty slice.
pub fn total(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, &v| acc + v)
}

/// Derived series for one year of budget vs actual.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnualOverview {
    pub budget_ytd: Vec<f64>,
    /// Running total over the observed prefix only.
    pub actual_ytd: Vec<f64>,
    /// `None` before the last observed month.
    pub projected: [Option<f64>; MONTHS_PER_YEAR],
}

impl AnnualOverview {
    /// Number of observed actual months.
    pub fn months_elapsed(&self) -> usize {
        self.actual_ytd.len()
    }

    /// Projected cumulative actual at December.
    pub fn year_end_projection(&self) -> f64 {
        self.projected[MONTHS_PER_YEAR - 1].unwrap_or_default()
    }

    pub fn year_end_budget(&self) -> f64 {
        self.budget_ytd.last().copied().unwrap_or_default()
    }

    /// Projected year-end minus budgeted year-end. Positive means over budget.
    pub fn variance(&self) -> f64 {
        self.year_end_projection() - self.year_end_budget()
    }
}

/// Build the YTD lines and the projection for a full-year `budget` and an
/// observed `actual` prefix.
///
/// The projection starts at the last observed month with the actual total and
/// adds the remaining budgeted months on top of it.
pub fn project_annual(budget: &[f64], actual: &[f64]) -> Result<AnnualOverview, ShapeError> {
    if budget.len() != MONTHS_PER_YEAR {
        return Err(ShapeError::BudgetLength { len: budget.len() });
    }
    let n = actual.len();
    if n > MONTHS_PER_YEAR {
        return Err(ShapeError::ActualTooLong { len: n });
    }
    if n == 0 {
        return Err(ShapeError::NoActualMonths);
    }

    let mut projected = [None; MONTHS_PER_YEAR];
    let mut rt = total(actual);
    projected[n - 1] = Some(rt);
    for i in n..MONTHS_PER_YEAR {
        rt += budget[i];
        projected[i] = Some(rt);
    }

    let overview = AnnualOverview {
        budget_ytd: running_totals(budget),
        actual_ytd: running_totals(actual),
        projected,
    };
    tracing::debug!(
        months_elapsed = n,
        year_end_projection = overview.year_end_projection(),
        year_end_budget = overview.year_end_budget(),
        "projected annual overview"
    );
    Ok(overview)
}
