// File: crates/overview-chart/tests/autoscale.rs
// Purpose: Dataset wiring and dual-axis autoscale for the standard annual chart.

use overview_chart::{AnnualChart, AxisId, SeriesType};

#[test]
fn standard_datasets_in_order() {
    let chart = AnnualChart::from_monthly(&[100.0; 12], &[90.0, 95.0, 105.0]).unwrap();
    let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        ["YTD Budget", "YTD Actual", "YTD Projection", "Monthly Budget", "Monthly Actuals"]
    );
    assert_eq!(chart.labels.len(), 12);

    let projection = &chart.series[2];
    assert_eq!(projection.series_type, SeriesType::Line);
    assert_eq!(projection.dash, Some([5.0, 15.0]));
    assert_eq!(projection.data[1], None);
    assert_eq!(projection.data[11], Some(1190.0));

    for s in &chart.series[..3] {
        assert_eq!(s.axis, AxisId::Cumulative);
    }
    for s in &chart.series[3..] {
        assert_eq!(s.axis, AxisId::Monthly);
        assert_eq!(s.series_type, SeriesType::Bar);
    }
}

#[test]
fn axes_fit_their_own_series() {
    let chart = AnnualChart::from_monthly(&[100.0; 12], &[90.0, 95.0, 105.0]).unwrap();

    // Bars top out at 105 on the monthly axis.
    assert_eq!(chart.y_axis.min, 0.0);
    assert!(chart.y_axis.max >= 105.0 && chart.y_axis.max < 200.0);

    // Cumulative axis must hold the 1200 budget year-end.
    assert_eq!(chart.y_aggr_axis.min, 0.0);
    assert!(chart.y_aggr_axis.max >= 1200.0);
    assert_eq!(chart.axis(AxisId::Cumulative).key(), "y-aggr");
}

#[test]
fn overspend_below_zero_extends_axis_down() {
    let chart = AnnualChart::from_monthly(&[10.0; 12], &[-30.0, 5.0]).unwrap();
    assert!(chart.y_axis.min <= -30.0);
    assert!(chart.y_aggr_axis.min <= -30.0);
}

#[test]
fn bad_shapes_propagate() {
    assert!(AnnualChart::from_monthly(&[1.0; 12], &[]).is_err());
    assert!(AnnualChart::from_monthly(&[1.0; 10], &[1.0]).is_err());
}
