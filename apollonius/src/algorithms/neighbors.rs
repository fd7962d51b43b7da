use delaunator::{triangulate, Point};
use std::collections::BTreeSet;

/// Spatial adjacency over site indices.
pub trait NeighborGraph {
    fn len(&self) -> usize;
    fn neighbors(&self, i: usize) -> &[usize];
    fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Delaunay adjacency of site centers.
#[derive(Clone, Debug, Default)]
pub struct DelaunayGraph {
    adj: Vec<Vec<usize>>,
}

impl DelaunayGraph {
    /// Triangulate flattened centers `[x0,y0,x1,y1,...]`.
    pub fn from_centers(centers: &[f64]) -> Self {
        let points: Vec<Point> = centers.chunks_exact(2).map(|c| Point { x: c[0], y: c[1] }).collect();
        let n = points.len();
        let mut sets = vec![BTreeSet::new(); n];
        let mut link = |a: usize, b: usize| {
            if a < n && b < n && a != b { sets[a].insert(b); sets[b].insert(a); }
        };
        if n >= 2 {
            let tri = triangulate(&points);
            for t in tri.triangles.chunks_exact(3) {
                link(t[0], t[1]); link(t[1], t[2]); link(t[2], t[0]);
            }
            // Collinear input has no triangles; the hull is then the sorted line.
            if tri.triangles.is_empty() {
                for w in tri.hull.windows(2) { link(w[0], w[1]); }
            }
        }
        DelaunayGraph { adj: sets.into_iter().map(|s| s.into_iter().collect()).collect() }
    }
}

impl NeighborGraph for DelaunayGraph {
    fn len(&self) -> usize { self.adj.len() }
    fn neighbors(&self, i: usize) -> &[usize] {
        self.adj.get(i).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Sorted union of `i`'s neighbors and their neighbors, without `i`.
pub fn two_hop_pool<G: NeighborGraph + ?Sized>(graph: &G, i: usize) -> Vec<usize> {
    let mut pool = BTreeSet::new();
    for &k in graph.neighbors(i) {
        pool.insert(k);
        pool.extend(graph.neighbors(k).iter().copied());
    }
    pool.remove(&i);
    pool.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_with_center_links_center_to_corners() {
        let g = DelaunayGraph::from_centers(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0, 5.0, 5.0]);
        assert_eq!(g.len(), 5);
        assert_eq!(g.neighbors(4), &[0, 1, 2, 3]);
        for i in 0..4 { assert!(g.neighbors(i).contains(&4)); }
    }

    #[test]
    fn adjacency_is_symmetric() {
        let g = DelaunayGraph::from_centers(&[1.0, 2.0, 8.0, 1.0, 5.0, 9.0, 3.0, 5.0, 9.0, 7.0, 6.0, 4.0]);
        for i in 0..g.len() {
            for &j in g.neighbors(i) { assert!(g.neighbors(j).contains(&i), "{i}-{j}"); }
        }
    }

    #[test]
    fn collinear_centers_form_a_path() {
        let g = DelaunayGraph::from_centers(&[0.0, 0.0, 20.0, 0.0, 10.0, 0.0]);
        assert_eq!(g.neighbors(2), &[0, 1]);
        assert_eq!(g.neighbors(0), &[2]);
        assert_eq!(g.neighbors(1), &[2]);
    }

    #[test]
    fn tiny_inputs() {
        assert!(DelaunayGraph::from_centers(&[]).is_empty());
        let one = DelaunayGraph::from_centers(&[3.0, 3.0]);
        assert!(one.neighbors(0).is_empty());
        assert!(one.neighbors(7).is_empty());
        let two = DelaunayGraph::from_centers(&[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(two.neighbors(0), &[1]);
    }

    #[test]
    fn two_hop_pool_excludes_self() {
        let g = DelaunayGraph::from_centers(&[0.0, 0.0, 10.0, 0.0, 20.0, 0.0, 30.0, 0.0]);
        assert_eq!(two_hop_pool(&g, 0), vec![1, 2]);
        assert_eq!(two_hop_pool(&g, 1), vec![0, 2, 3]);
    }
}
