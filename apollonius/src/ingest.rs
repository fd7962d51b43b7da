use crate::error::ApolloniusError;
use crate::geometry::limits::{self, in_coord_bounds};
use crate::model::Site;

/// Parse `[x0,y0,w0,x1,y1,w1,...]` into sites, validating every value.
pub fn parse_triples(data: &[f64]) -> Result<Vec<Site>, ApolloniusError> {
    if data.len() % 3 != 0 {
        return Err(ApolloniusError::InvalidSiteData { len: data.len() });
    }
    let n = data.len() / 3;
    if n > limits::MAX_SITES {
        return Err(ApolloniusError::TooManySites { got: n, max: limits::MAX_SITES });
    }
    let mut sites = Vec::with_capacity(n);
    for (index, c) in data.chunks_exact(3).enumerate() {
        for (param, v) in [("x", c[0]), ("y", c[1]), ("w", c[2])] {
            if !in_coord_bounds(v) { return Err(ApolloniusError::NonFinite { param, index }); }
        }
        sites.push(Site::new(c[0], c[1], c[2]));
    }
    Ok(sites)
}

/// Shift sites so no coordinate is negative; returns the max `(x, y)` after the shift.
pub fn normalize(sites: &mut [Site]) -> (f64, f64) {
    if sites.is_empty() { return (0.0, 0.0); }
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for s in sites.iter() {
        min_x = min_x.min(s.x); max_x = max_x.max(s.x);
        min_y = min_y.min(s.y); max_y = max_y.max(s.y);
    }
    let dx = if min_x < 0.0 { -min_x } else { 0.0 };
    let dy = if min_y < 0.0 { -min_y } else { 0.0 };
    if dx > 0.0 || dy > 0.0 {
        for s in sites.iter_mut() { s.x += dx; s.y += dy; }
    }
    (max_x + dx, max_y + dy)
}

pub fn flatten(sites: &[Site]) -> Vec<f64> {
    sites.iter().flat_map(|s| [s.x, s.y, s.weight]).collect()
}

pub fn centers(sites: &[Site]) -> Vec<f64> {
    sites.iter().flat_map(|s| [s.x, s.y]).collect()
}
