// File: crates/overview-chart/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use overview_chart::{AnnualChart, RenderOptions, Theme};

#[test]
fn render_rgba8_buffer() {
    let chart = AnnualChart::from_monthly(&[50.0; 12], &[40.0, 60.0]).unwrap();

    let opts = RenderOptions { width: 320, height: 200, draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left lies outside the plot: opaque background color.
    let bg = Theme::dark().background;
    assert_eq!(&px[..4], &[bg.r(), bg.g(), bg.b(), 255]);
}
