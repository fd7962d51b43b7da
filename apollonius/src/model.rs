use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A weighted point: a disk with center `(x, y)` and radius `weight`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "w")]
    pub weight: f64,
}

impl Site {
    pub fn new(x: f64, y: f64, weight: f64) -> Self { Self { x, y, weight } }

    pub fn distance_sq(&self, other: &Site) -> f64 {
        crate::geometry::math::dist_sq(self.x, self.y, other.x, other.y)
    }

    /// Unweighted distance between centers.
    pub fn distance(&self, other: &Site) -> f64 { self.distance_sq(other).sqrt() }

    pub fn weighted_distance_to(&self, p: Point2D) -> f64 {
        crate::geometry::math::weighted_dist(p, self)
    }

    /// Center distance minus both weights; negative when the disks overlap.
    pub fn gap(&self, other: &Site) -> f64 { self.distance(other) - self.weight - other.weight }

    /// Weight order, ties left to the caller.
    pub fn cmp_weight(&self, other: &Site) -> Ordering { self.weight.total_cmp(&other.weight) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self { [p.x, p.y] }
}

impl From<[f64; 2]> for Point2D {
    fn from(v: [f64; 2]) -> Self { Point2D::new(v[0], v[1]) }
}

/// Axis-aligned canvas `[0,width]×[0,height]`; points are accepted strictly inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self { Self { width, height } }

    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        p.x > 0.0 && p.x < self.width && p.y > 0.0 && p.y < self.height
    }

    /// Integer half-range of the scan coordinate. The height is used for
    /// every orientation; it is not a tight bound on the curve.
    #[inline]
    pub fn scan_extent(&self) -> i64 { self.height.floor() as i64 }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Every pair, every other site as witness.
    #[default]
    Exhaustive,
    /// Pairs and witnesses restricted to 2-hop Delaunay neighborhoods.
    Accelerated,
}

/// Sampled bisector between input sites `a` (lighter) and `b`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bisector {
    pub a: usize,
    pub b: usize,
    pub points: Vec<Point2D>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    pub pairs_considered: usize,
    pub pairs_with_bisector: usize,
    pub points: usize,
}
