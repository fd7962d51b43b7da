use super::bisector::solve;
use super::neighbors::DelaunayGraph;
use super::pairs::{AllPairs, NeighborPairs, PairSource, PairTask};
use crate::model::{Bounds, BuildMode, BuildStats, Point2D, Site};

/// Stable weight order: `order[k]` is the input index of the k-th lightest
/// site, ties broken by input index.
pub fn weight_order(sites: &[Site]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sites.len()).collect();
    order.sort_by(|&i, &j| sites[i].cmp_weight(&sites[j]).then(i.cmp(&j)));
    order
}

/// A non-empty bisector in sorted indices.
#[derive(Clone, Debug, PartialEq)]
pub struct SortedBisector {
    pub a: usize,
    pub b: usize,
    pub points: Vec<Point2D>,
}

fn run_task(sorted: &[Site], task: &PairTask, bounds: Bounds, scan_gap: u32) -> Vec<Point2D> {
    let witnesses: Vec<&Site> = task
        .witnesses
        .indices(task.a, task.b, sorted.len())
        .into_iter()
        .map(|k| &sorted[k])
        .collect();
    solve(&sorted[task.a], &sorted[task.b], &witnesses, bounds, scan_gap)
}

#[cfg(not(feature = "threads"))]
fn solve_all(sorted: &[Site], tasks: &[PairTask], bounds: Bounds, scan_gap: u32) -> Vec<Vec<Point2D>> {
    tasks.iter().map(|t| run_task(sorted, t, bounds, scan_gap)).collect()
}

#[cfg(feature = "threads")]
fn solve_all(sorted: &[Site], tasks: &[PairTask], bounds: Bounds, scan_gap: u32) -> Vec<Vec<Point2D>> {
    use rayon::prelude::*;
    // Indexed collect keeps enumeration order.
    tasks.par_iter().map(|t| run_task(sorted, t, bounds, scan_gap)).collect()
}

/// Solve every pair the source yields over weight-sorted sites.
pub fn build_with<S: PairSource>(
    sorted: &[Site],
    source: &S,
    bounds: Bounds,
    scan_gap: u32,
) -> (Vec<SortedBisector>, BuildStats) {
    let tasks = source.pairs();
    let results = solve_all(sorted, &tasks, bounds, scan_gap);
    let mut stats = BuildStats { pairs_considered: tasks.len(), ..BuildStats::default() };
    let mut out = Vec::new();
    for (task, points) in tasks.into_iter().zip(results) {
        if points.is_empty() { continue; }
        stats.pairs_with_bisector += 1;
        stats.points += points.len();
        out.push(SortedBisector { a: task.a, b: task.b, points });
    }
    (out, stats)
}

/// Full build over weight-sorted sites in the requested mode.
pub fn build_sorted(sorted: &[Site], bounds: Bounds, scan_gap: u32, mode: BuildMode) -> (Vec<SortedBisector>, BuildStats) {
    match mode {
        BuildMode::Exhaustive => build_with(sorted, &AllPairs { n: sorted.len() }, bounds, scan_gap),
        BuildMode::Accelerated => {
            let centers: Vec<f64> = sorted.iter().flat_map(|s| [s.x, s.y]).collect();
            let graph = DelaunayGraph::from_centers(&centers);
            build_with(sorted, &NeighborPairs { graph: &graph }, bounds, scan_gap)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_order_breaks_ties_by_index() {
        let sites = [
            Site::new(0.0, 0.0, 3.0),
            Site::new(1.0, 0.0, 1.0),
            Site::new(2.0, 0.0, 3.0),
            Site::new(3.0, 0.0, -1.0),
        ];
        assert_eq!(weight_order(&sites), vec![3, 1, 0, 2]);
    }

    #[test]
    fn empty_pairs_leave_no_placeholder() {
        // Second disk swallows the first: one pair, no output.
        let sorted = [Site::new(10.0, 10.0, 1.0), Site::new(11.0, 10.0, 6.0)];
        for mode in [BuildMode::Exhaustive, BuildMode::Accelerated] {
            let (out, stats) = build_sorted(&sorted, Bounds::new(50.0, 50.0), 1, mode);
            assert!(out.is_empty());
            assert_eq!(stats.pairs_considered, 1);
            assert_eq!(stats.pairs_with_bisector, 0);
        }
    }

    #[test]
    fn fan_out_matches_sequential_solves() {
        let sorted = [
            Site::new(10.0, 12.0, 0.0),
            Site::new(40.0, 15.0, 1.0),
            Site::new(25.0, 40.0, 2.0),
            Site::new(55.0, 45.0, 3.0),
            Site::new(30.0, 28.0, 9.0),
        ];
        let bounds = Bounds::new(64.0, 64.0);
        let source = AllPairs { n: sorted.len() };
        let expected: Vec<SortedBisector> = source
            .pairs()
            .iter()
            .map(|t| SortedBisector { a: t.a, b: t.b, points: run_task(&sorted, t, bounds, 2) })
            .filter(|b| !b.points.is_empty())
            .collect();
        let (out, stats) = build_with(&sorted, &source, bounds, 2);
        assert!(!expected.is_empty());
        assert_eq!(out, expected);
        assert_eq!(stats.pairs_with_bisector, expected.len());
    }

    #[test]
    fn stats_count_points() {
        let sorted = [Site::new(0.0, 0.0, 0.0), Site::new(10.0, 0.0, 0.0)];
        let (out, stats) = build_sorted(&sorted, Bounds::new(20.0, 20.0), 1, BuildMode::Exhaustive);
        assert_eq!(out.len(), 1);
        assert_eq!(stats.points, out[0].points.len());
        assert_eq!((out[0].a, out[0].b), (0, 1));
    }
}
