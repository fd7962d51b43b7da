use crate::model::{Point2D, Site};

#[inline]
pub fn dist_sq(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2; let dy = y1 - y2;
    dx*dx + dy*dy
}

#[inline]
pub fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 { dist_sq(x1, y1, x2, y2).sqrt() }

/// Euclidean distance from `p` to the site's center minus the site's weight.
#[inline]
pub fn weighted_dist(p: Point2D, s: &Site) -> f64 { dist(p.x, p.y, s.x, s.y) - s.weight }

/// True when some witness is strictly closer to `p` (in weighted distance) than `owner`.
pub fn dominated<'a, I>(p: Point2D, owner: &Site, witnesses: I) -> bool
where
    I: IntoIterator<Item = &'a Site>,
{
    let d_owner = weighted_dist(p, owner);
    witnesses.into_iter().any(|k| d_owner > weighted_dist(p, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_distance_subtracts_weight() {
        let s = Site::new(3.0, 4.0, 2.0);
        assert!((weighted_dist(Point2D::new(0.0, 0.0), &s) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn heavier_witness_dominates() {
        let owner = Site::new(0.0, 0.0, 0.0);
        let light = Site::new(10.0, 0.0, 0.0);
        let heavy = Site::new(10.0, 0.0, 8.0);
        let p = Point2D::new(4.0, 0.0);
        assert!(!dominated(p, &owner, [&light]));
        assert!(dominated(p, &owner, [&light, &heavy]));
    }

    #[test]
    fn equal_distance_is_not_domination() {
        let owner = Site::new(0.0, 0.0, 0.0);
        let twin = Site::new(10.0, 0.0, 0.0);
        assert!(!dominated(Point2D::new(5.0, 0.0), &owner, [&twin]));
    }
}
