//! Sampled bisector between two weighted sites.
//!
//! In the pair's canonical frame (see [`CanonicalFrame`]) the points with
//! equal weighted distance to both sites satisfy
//!
//! ```text
//! x² = (4(h·Δw)² + 4(Δw·t)² − Δw⁴) / (16h² − 4Δw²)
//! ```
//!
//! where `h` is half the center distance and `Δw` the weight difference.
//! The scan coordinate `t` walks integer offsets; each real root is mapped
//! back to world space, clipped to the canvas and tested against the
//! witness sites.

use crate::geometry::frame::CanonicalFrame;
use crate::geometry::math::dominated;
use crate::geometry::tolerance::guarded_div;
use crate::model::{Bounds, Point2D, Site};

/// Sample the bisector of `a` and `b`, keeping points no witness dominates.
///
/// The lighter site must come first; if it does not, the pair is swapped so
/// the positive branch always faces the lighter site. `witnesses` must not
/// contain `a` or `b`. `scan_gap` of zero is treated as one.
pub fn solve(a: &Site, b: &Site, witnesses: &[&Site], bounds: Bounds, scan_gap: u32) -> Vec<Point2D> {
    let (a, b) = if a.weight > b.weight { (b, a) } else { (a, b) };
    let mut out = Vec::new();
    let d = a.distance(b);
    let dw = b.weight - a.weight;
    if d <= dw {
        log::trace!("no bisector: distance {d} <= weight delta {dw}");
        return out;
    }
    let Some(frame) = CanonicalFrame::new(a, b) else { return out };
    let h = frame.half_dist;
    let den = 16.0 * h * h - 4.0 * dw * dw;
    let hdw = h * dw;
    let dw2 = dw * dw;
    let c0 = 4.0 * hdw * hdw - dw2 * dw2;
    // The denominator does not depend on t; a near-zero one voids the pair.
    if guarded_div(1.0, den, 16.0 * h * h + 4.0 * dw2).is_none() {
        log::trace!("no bisector: degenerate denominator {den}");
        return out;
    }

    let extent = bounds.scan_extent();
    let step = scan_gap.max(1) as usize;
    for t in (-extent..=extent).step_by(step) {
        let t = t as f64;
        let dwt = dw * t;
        let b3 = (c0 + 4.0 * dwt * dwt) / den;
        // NaN compares false and is skipped with negative roots.
        if !(b3 >= 0.0) { continue; }
        let p = frame.to_world(b3.sqrt(), t);
        if !bounds.contains(p) { continue; }
        if dominated(p, a, witnesses.iter().copied()) { continue; }
        out.push(p);
    }
    out
}
