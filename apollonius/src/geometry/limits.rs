// Ingestion limits to harden against untrusted input (flat arrays, JSON)

// Site count cap; exhaustive builds are cubic in this
pub const MAX_SITES: usize = 20_000;

// Numeric bounds
pub const COORD_MIN: f64 = -1.0e9;
pub const COORD_MAX: f64 = 1.0e9;
pub const DIM_MAX: f64 = 1.0e7;
pub const SCAN_GAP_MAX: i64 = 1 << 20;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_dim_bounds(d: f64) -> bool { d.is_finite() && d >= 0.0 && d <= DIM_MAX }
