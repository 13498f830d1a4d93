// File: crates/scatter-core/src/scale.rs
// Summary: Linear domain-to-pixel scales and the chart's domain rules.

use crate::axis::XAxisField;
use crate::data::DataPoint;

/// Factor applied to the x-domain lower bound.
pub const X_DOMAIN_MIN_FACTOR: f64 = 0.8;
/// Fixed lower bound of the y domain.
pub const Y_DOMAIN_MIN: f64 = 19.0;
/// Left padding of the x pixel range.
pub const X_RANGE_PAD: f32 = 5.0;

/// Linear mapping from a data domain to a pixel range.
/// The range may be inverted (screen y grows downward).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f32,
    pub r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
        }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn scale(&self, v: f64) -> f32 {
        self.r0 + (((v - self.d0) / (self.d1 - self.d0)) as f32) * (self.r1 - self.r0)
    }

    #[inline]
    pub fn invert(&self, px: f32) -> f64 {
        self.d0 + ((px - self.r0) / (self.r1 - self.r0)) as f64 * (self.d1 - self.d0)
    }
}

/// x-domain for `field`: [0.8 * min, max] over finite values.
pub fn x_domain(data: &[DataPoint], field: XAxisField) -> (f64, f64) {
    match extent(data.iter().map(|d| field.value(d))) {
        Some((min, max)) => (min * X_DOMAIN_MIN_FACTOR, max),
        None => (0.0, 1.0),
    }
}

/// y-domain: [19, max obesity]; independent of the selected x field.
pub fn y_domain(data: &[DataPoint]) -> (f64, f64) {
    match extent(data.iter().map(|d| d.obesity)) {
        Some((_, max)) => (Y_DOMAIN_MIN, max),
        None => (Y_DOMAIN_MIN, Y_DOMAIN_MIN + 1.0),
    }
}

/// Horizontal scale over the plot width, padded off the y axis.
pub fn x_scale(domain: (f64, f64), plot_w: f32) -> LinearScale {
    LinearScale::new(domain, (X_RANGE_PAD, plot_w))
}

/// Vertical scale over the plot height; inverted so larger values plot higher.
pub fn y_scale(domain: (f64, f64), plot_h: f32) -> LinearScale {
    LinearScale::new(domain, (plot_h, 0.0))
}

/// Min/max over finite values; `None` when nothing is finite.
pub fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() { Some((min, max)) } else { None }
}
