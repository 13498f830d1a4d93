// File: crates/scatter-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use scatter_core::{DataPoint, RenderOptions, ScatterChart};

#[test]
fn render_smoke_png() {
    let chart = ScatterChart::new(vec![
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
    ]);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
