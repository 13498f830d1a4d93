// File: crates/scatter-core/src/axis.rs
// Summary: Switchable x-axis field and nice-step tick generation.

use crate::data::DataPoint;

/// Which dataset field drives the horizontal mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XAxisField {
    Poverty,
    Healthcare,
}

impl XAxisField {
    pub const ALL: [XAxisField; 2] = [XAxisField::Poverty, XAxisField::Healthcare];

    /// Value of this field on one row.
    pub fn value(self, d: &DataPoint) -> f64 {
        match self {
            XAxisField::Poverty => d.poverty,
            XAxisField::Healthcare => d.healthcare,
        }
    }

    /// Human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            XAxisField::Poverty => "In Poverty (%)",
            XAxisField::Healthcare => "Lacks Healthcare (%)",
        }
    }

    /// Column key in the source dataset.
    pub fn key(self) -> &'static str {
        match self {
            XAxisField::Poverty => "poverty",
            XAxisField::Healthcare => "healthcare",
        }
    }

    pub fn other(self) -> XAxisField {
        match self {
            XAxisField::Poverty => XAxisField::Healthcare,
            XAxisField::Healthcare => XAxisField::Poverty,
        }
    }
}

/// Label of the fixed y axis.
pub const Y_AXIS_LABEL: &str = "Obese (%)";

/// Round-valued tick positions within a domain, with a shared label precision.
pub struct Ticks {
    pub values: Vec<f64>,
    pub decimals: usize,
}

impl Ticks {
    pub fn label(&self, v: f64) -> String {
        format!("{:.*}", self.decimals, v)
    }
}

/// Tick positions covering `[min, max]`, aiming for roughly `count` steps.
/// Positions snap to a 1/2/5 step so labels come out round.
pub fn ticks(min: f64, max: f64, count: u32) -> Ticks {
    if !min.is_finite() || !max.is_finite() || max <= min || count == 0 {
        return Ticks { values: Vec::new(), decimals: 0 };
    }
    let step = nice_step((max - min) / f64::from(count));
    let decimals = (-step.log10().floor()).max(0.0) as usize;

    let mut values = Vec::new();
    let mut v = (min / step).ceil() * step;
    while v <= max + step * 1e-6 {
        values.push((v / step).round() * step);
        v += step;
    }
    Ticks { values, decimals }
}

fn nice_step(raw: f64) -> f64 {
    let k = raw.log10().floor();
    let base = raw / 10f64.powf(k);
    let nice = if base < 1.0 {
        1.0
    } else if base < 2.0 {
        2.0
    } else if base < 5.0 {
        5.0
    } else {
        10.0
    };
    nice * 10f64.powf(k)
}
