//! Pair enumeration strategies.
//!
//! Both strategies hand the orchestrator the same unit of work: an ordered
//! pair of sorted-site indices plus the witness pool for its domination test.

use super::neighbors::{two_hop_pool, NeighborGraph};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Witnesses {
    /// Every site other than the pair.
    All,
    /// A shared neighborhood; the pair itself is skipped when present.
    Pool(Arc<[usize]>),
}

impl Witnesses {
    /// Witness indices for the pair `(a, b)` among `n` sites.
    pub fn indices(&self, a: usize, b: usize, n: usize) -> Vec<usize> {
        match self {
            Witnesses::All => (0..n).filter(|&k| k != a && k != b).collect(),
            Witnesses::Pool(pool) => pool.iter().copied().filter(|&k| k != a && k != b && k < n).collect(),
        }
    }
}

/// One solver invocation. `a < b` in weight-sorted order, so `a` is the lighter site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairTask {
    pub a: usize,
    pub b: usize,
    pub witnesses: Witnesses,
}

pub trait PairSource {
    fn pairs(&self) -> Vec<PairTask>;
}

/// Every unordered pair, lexicographic, with all other sites as witnesses.
pub struct AllPairs {
    pub n: usize,
}

impl PairSource for AllPairs {
    fn pairs(&self) -> Vec<PairTask> {
        let n = self.n;
        let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for a in 0..n {
            for b in (a + 1)..n {
                out.push(PairTask { a, b, witnesses: Witnesses::All });
            }
        }
        out
    }
}

/// Pairs drawn from each site's 2-hop neighborhood, witnessed by that
/// neighborhood only. This narrows the domination test and may keep points
/// a distant site would have rejected.
pub struct NeighborPairs<'g, G: NeighborGraph> {
    pub graph: &'g G,
}

impl<'g, G: NeighborGraph> PairSource for NeighborPairs<'g, G> {
    fn pairs(&self) -> Vec<PairTask> {
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut out = Vec::new();
        for i in 0..self.graph.len() {
            let pool: Arc<[usize]> = two_hop_pool(self.graph, i).into();
            for &j in pool.iter() {
                let key = if i < j { (i, j) } else { (j, i) };
                if !seen.insert(key) { continue; }
                out.push(PairTask { a: key.0, b: key.1, witnesses: Witnesses::Pool(pool.clone()) });
            }
        }
        out
    }
}
