//! Canonical frame for a pair of sites.
//!
//! The frame's origin is the midpoint of the two centers and its x-axis runs
//! through the foci, pointing from `b` towards `a`. In this frame the
//! bisector of `a` (lighter) and `b` (heavier) is the hyperbola branch with
//! non-negative x, so `(x0, t)` with `x0 >= 0` always lands on `a`'s side.

use super::tolerance::EPS_LEN;
use crate::model::{Point2D, Site};

#[derive(Clone, Copy, Debug)]
pub struct CanonicalFrame {
    pub origin: Point2D,
    pub half_dist: f64,
    cos: f64,
    sin: f64,
}

impl CanonicalFrame {
    /// Returns `None` for coincident centers, which have no axis.
    pub fn new(a: &Site, b: &Site) -> Option<Self> {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        let d = (dx*dx + dy*dy).sqrt();
        if d <= EPS_LEN { return None; }
        Some(Self {
            origin: Point2D::new(0.5 * (a.x + b.x), 0.5 * (a.y + b.y)),
            half_dist: 0.5 * d,
            cos: dx / d,
            sin: dy / d,
        })
    }

    /// Rotation angle of the frame's x-axis, in `(-π, π]`.
    ///
    /// Equivalent to `atan(Δy/Δx)` flipped by `π` when `a.x < b.x`, but
    /// taken from the normalized axis so vertical pairs need no slope.
    pub fn angle(&self) -> f64 { self.sin.atan2(self.cos) }

    /// Map frame coordinates `(x, t)` back to world coordinates.
    #[inline]
    pub fn to_world(&self, x: f64, t: f64) -> Point2D {
        Point2D::new(
            self.origin.x + self.cos * x - self.sin * t,
            self.origin.y + self.sin * x + self.cos * t,
        )
    }

    #[inline]
    pub fn to_local(&self, p: Point2D) -> (f64, f64) {
        let dx = p.x - self.origin.x;
        let dy = p.y - self.origin.y;
        (self.cos * dx + self.sin * dy, -self.sin * dx + self.cos * dy)
    }
}
