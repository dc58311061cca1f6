// File: crates/overview-core/tests/annual.rs
// Purpose: Running totals, totals and the annual projection against hand-computed years.

use overview_core::{project_annual, running_totals, total, ShapeError, MONTHS};

fn prefix_sum(v: &[f64], i: usize) -> f64 {
    v[..=i].iter().sum()
}

#[test]
fn running_totals_match_prefix_sums() {
    let v = [4.0, -1.5, 0.0, 7.25, 3.0];
    let rt = running_totals(&v);
    assert_eq!(rt.len(), v.len());
    for i in 0..v.len() {
        assert_eq!(rt[i], prefix_sum(&v, i));
    }
    assert_eq!(total(&v), *rt.last().unwrap());
}

#[test]
fn running_totals_has_no_hidden_state() {
    let v = [1.0, 2.0, 3.0];
    assert_eq!(running_totals(&v), running_totals(&v));
    assert_eq!(v, [1.0, 2.0, 3.0]);
}

#[test]
fn three_observed_months_project_with_remaining_budget() {
    let budget = [100.0; 12];
    let actual = [90.0, 95.0, 105.0];
    let o = project_annual(&budget, &actual).expect("valid shapes");

    let expected_budget: Vec<f64> = (1..=12).map(|m| 100.0 * m as f64).collect();
    assert_eq!(o.budget_ytd, expected_budget);
    assert_eq!(o.actual_ytd, vec![90.0, 185.0, 290.0]);

    assert_eq!(o.projected[0], None);
    assert_eq!(o.projected[1], None);
    assert_eq!(o.projected[2], Some(290.0));
    assert_eq!(o.projected[3], Some(390.0));
    assert_eq!(o.projected[4], Some(490.0));
    assert_eq!(o.projected[11], Some(1190.0));

    assert_eq!(o.months_elapsed(), 3);
    assert_eq!(o.year_end_projection(), 1190.0);
    assert_eq!(o.variance(), -10.0);
}

#[test]
fn projection_steps_by_budget_after_last_observed_month() {
    let budget = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0];
    let actual = [5.0, 25.0, 31.0, 44.0, 48.0];
    let o = project_annual(&budget, &actual).unwrap();
    let n = actual.len();
    assert_eq!(o.projected[n - 1], Some(total(&actual)));
    for i in n..12 {
        let step = o.projected[i].unwrap() - o.projected[i - 1].unwrap();
        assert_eq!(step, budget[i]);
    }
}

#[test]
fn rejects_bad_shapes_before_computing() {
    let budget = [1.0; 12];
    assert_eq!(project_annual(&budget, &[]), Err(ShapeError::NoActualMonths));
    assert_eq!(
        project_annual(&budget, &[1.0; 13]),
        Err(ShapeError::ActualTooLong { len: 13 })
    );
    assert_eq!(
        project_annual(&[1.0; 11], &[1.0]),
        Err(ShapeError::BudgetLength { len: 11 })
    );
}

#[test]
fn month_labels_cover_the_year() {
    assert_eq!(MONTHS.len(), 12);
    assert_eq!(MONTHS[0], "Jan");
    assert_eq!(MONTHS[11], "Dec");
}

#[test]
fn same_sign_series_give_monotonic_totals() {
    let spend = [0.0, 12.5, 3.0, 0.0, 40.0, 7.75];
    let rt = running_totals(&spend);
    assert!(rt.windows(2).all(|w| w[0] <= w[1]), "{rt:?}");

    let refunds = [-1.0, 0.0, -8.25, -0.5, 0.0];
    let rt = running_totals(&refunds);
    assert!(rt.windows(2).all(|w| w[0] >= w[1]), "{rt:?}");
}
