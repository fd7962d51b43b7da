// Centralized tolerances for the bisector sampler

pub const EPS_LEN: f64 = 1e-12;           // zero-length pair threshold
pub const EPS_DENOM: f64 = 1e-9;          // relative guard on the hyperbola denominator
pub const EPS_ON_CURVE: f64 = 1e-6;       // equal-weighted-distance slack for tests/invariants

#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

/// Divide, or `None` when the denominator is negligible relative to `scale`.
#[inline]
pub fn guarded_div(num: f64, den: f64, scale: f64) -> Option<f64> {
    if den.abs() <= EPS_DENOM * scale.abs() { None } else { Some(num / den) }
}
