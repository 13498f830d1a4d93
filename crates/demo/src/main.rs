// File: crates/demo/src/main.rs
// Summary: Demo loads the state CSV and renders the initial chart plus a full
// axis swap (start, mid-flight, settled) to PNGs.

use anyhow::{Context, Result};
use scatter_core::{load_states_csv, theme, RenderOptions, ScatterChart, XAxisField};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    if let Err(err) = run() {
        // Load or render failure: report it and abandon the render.
        error!("render aborted: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Accept path from CLI or fall back to the bundled dataset
    // (supports .csv/.cvs swap), plus an optional theme name.
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/data/data.csv".to_string());
    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "light".to_string());

    let (path, used_alt) = resolve_path(&raw)?;
    info!("using input file: {}", path.display());
    if used_alt {
        info!("  (extension swapped between .csv/.cvs)");
    }

    let data = load_states_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!("loaded {} states", data.len());
    if data.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }

    let mut chart = ScatterChart::new(data);
    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&theme_name);

    // 1) Initial render on the poverty field
    let out = out_name_with(&path, chart.chosen_x_axis().key());
    chart.render_to_png(&opts, &out)?;
    info!("wrote {}", out.display());

    // 2) Swap the axis and capture the animation mid-flight
    chart.select_x_field(XAxisField::Healthcare);
    chart.tick(0.5);
    let out = out_name_with(&path, "swap_mid");
    chart.render_to_png(&opts, &out)?;
    info!("wrote {}", out.display());

    // 3) Settled on the healthcare field
    chart.tick(0.6);
    let out = out_name_with(&path, chart.chosen_x_axis().key());
    chart.render_to_png(&opts, &out)?;
    info!("wrote {}", out.display());

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/scatter_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("scatter");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("scatter_{}_{}.png", stem, suffix));
    out
}

fn swap_ext(p: &Path) -> Option<std::path::PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
