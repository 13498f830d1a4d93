// File: crates/scatter-core/tests/scales.rs
// Purpose: Validate domain rules, idempotence, and end-to-end mark positions.

use scatter_core::{scale, DataPoint, RenderOptions, ScatterChart, XAxisField};

fn sample() -> Vec<DataPoint> {
    vec![
        DataPoint {
            state: "Alabama".into(),
            abbr: "AL".into(),
            poverty: 18.8,
            healthcare: 14.6,
            obesity: 32.8,
        },
        DataPoint {
            state: "Alaska".into(),
            abbr: "AK".into(),
            poverty: 11.9,
            healthcare: 19.8,
            obesity: 28.4,
        },
    ]
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn x_domain_is_scaled_min_to_max() {
    let data = sample();
    let (lo, hi) = scale::x_domain(&data, XAxisField::Poverty);
    assert!(close(lo, 0.8 * 11.9));
    assert!(close(hi, 18.8));
    let (lo, hi) = scale::x_domain(&data, XAxisField::Healthcare);
    assert!(close(lo, 0.8 * 14.6));
    assert!(close(hi, 19.8));
}

#[test]
fn x_domain_recompute_is_idempotent() {
    let mut chart = ScatterChart::new(sample());
    let initial = chart.x_domain();
    for _ in 0..3 {
        chart.select_x_field(XAxisField::Healthcare);
        chart.tick(2.0);
        chart.select_x_field(XAxisField::Poverty);
        chart.tick(2.0);
    }
    let after = chart.x_domain();
    assert!(close(initial.0, after.0));
    assert!(close(initial.1, after.1));
}

#[test]
fn y_domain_fixed_and_invariant_under_selection() {
    let mut chart = ScatterChart::new(sample());
    let before = chart.y_domain();
    assert!(close(before.0, 19.0));
    assert!(close(before.1, 32.8));
    chart.select_x_field(XAxisField::Healthcare);
    chart.tick(2.0);
    assert_eq!(chart.y_domain(), before);
}

#[test]
fn degenerate_extent_falls_back_to_unit_domain() {
    let data = vec![DataPoint {
        state: "Ghost".into(),
        abbr: "GH".into(),
        poverty: f64::NAN,
        healthcare: 12.0,
        obesity: 30.0,
    }];
    assert_eq!(scale::x_domain(&data, XAxisField::Poverty), (0.0, 1.0));
}

#[test]
fn end_to_end_positions_across_an_axis_swap() {
    let mut chart = ScatterChart::new(sample());
    let opts = RenderOptions::default();
    let plot_w = (opts.width - opts.insets.hsum() as i32) as f32;
    assert_eq!(plot_w, 860.0);

    // Poverty: domain [0.8*11.9, 18.8]; Alabama sits at the domain max,
    // which maps to the right edge of the plot.
    let xs = scale::x_scale(chart.displayed_x_domain(), plot_w);
    assert!((xs.scale(18.8) - plot_w).abs() < 1e-3);
    let (ax, ay) = chart.mark_position(&chart.data()[0], &opts);
    assert!((ax - (opts.insets.left as f32 + plot_w)).abs() < 1e-3);
    // Alabama also holds max obesity, which maps to the top of the plot.
    assert!((ay - opts.insets.top as f32).abs() < 1e-3);

    // Swap to healthcare and settle.
    chart.select_x_field(XAxisField::Healthcare);
    chart.tick(1.5);
    let (lo, hi) = chart.displayed_x_domain();
    assert!(close(lo, 0.8 * 14.6));
    assert!(close(hi, 19.8));
    let xs = scale::x_scale((lo, hi), plot_w);
    let expected = opts.insets.left as f32 + xs.scale(14.6);
    let (ax, _) = chart.mark_position(&chart.data()[0], &opts);
    assert!((ax - expected).abs() < 1e-3);
    assert!((xs.invert(xs.scale(14.6)) - 14.6).abs() < 1e-3);
}
