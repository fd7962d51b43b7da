use apollonius::algorithms::bisector::solve;
use apollonius::{Bounds, BuildMode, Diagram, Site};
use proptest::prelude::*;

fn site_strategy() -> impl Strategy<Value = (u8, u8, u8)> {
    (0u8..=60, 0u8..=60, 0u8..=12)
}

fn flat(raw: &[(u8, u8, u8)]) -> Vec<f64> {
    raw.iter().flat_map(|&(x, y, w)| [x as f64 + 0.5, y as f64 + 0.25, w as f64 * 0.75]).collect()
}

fn built(raw: &[(u8, u8, u8)], gap: i64, mode: BuildMode) -> Diagram {
    let mut d = Diagram::new(64.0, 64.0);
    d.set_sites(&flat(raw)).unwrap();
    d.set_scan_gap(gap).unwrap();
    d.build(mode);
    d
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]

    #[test]
    fn sorted_weights_never_decrease(raw in prop::collection::vec(site_strategy(), 0..12)) {
        let d = built(&raw, 4, BuildMode::Exhaustive);
        let sites = d.sites();
        for w in d.order().windows(2) {
            prop_assert!(sites[w[0]].weight <= sites[w[1]].weight);
        }
        prop_assert_eq!(d.order().len(), sites.len());
    }

    #[test]
    fn no_bisector_when_one_disk_covers_the_gap(
        ax in 0.0f64..60.0, ay in 0.0f64..60.0, dx in -5.0f64..5.0, dy in -5.0f64..5.0,
        wa in 0.0f64..5.0, extra in 0.0f64..10.0,
    ) {
        let a = Site::new(ax, ay, wa);
        let mut b = Site::new(ax + dx, ay + dy, 0.0);
        b.weight = wa + a.distance(&b) + extra;
        prop_assert!(solve(&a, &b, &[], Bounds::new(64.0, 64.0), 1).is_empty());
        prop_assert!(solve(&b, &a, &[], Bounds::new(64.0, 64.0), 1).is_empty());
    }

    #[test]
    fn points_are_inside_and_undominated(raw in prop::collection::vec(site_strategy(), 2..7)) {
        let d = built(&raw, 1, BuildMode::Exhaustive);
        let sites = d.sites();
        for bi in d.bisectors() {
            prop_assert!(sites[bi.a].weight <= sites[bi.b].weight);
            prop_assert!(!bi.points.is_empty());
            for &p in &bi.points {
                prop_assert!(p.x > 0.0 && p.x < d.width() && p.y > 0.0 && p.y < d.height());
                let da = sites[bi.a].weighted_distance_to(p);
                for (k, s) in sites.iter().enumerate() {
                    if k == bi.a || k == bi.b { continue; }
                    prop_assert!(da <= s.weighted_distance_to(p) + 1e-9);
                }
            }
        }
    }

    #[test]
    fn accelerated_points_lie_on_their_bisector(raw in prop::collection::vec(site_strategy(), 2..7)) {
        let d = built(&raw, 2, BuildMode::Accelerated);
        for bi in d.bisectors() {
            for &p in &bi.points {
                prop_assert!(d.bounds().contains(p));
                let da = d.sites()[bi.a].weighted_distance_to(p);
                let db = d.sites()[bi.b].weighted_distance_to(p);
                prop_assert!((da - db).abs() < 1e-6 * (1.0 + da.abs()));
            }
        }
    }

    #[test]
    fn exhaustive_build_is_deterministic(raw in prop::collection::vec(site_strategy(), 2..7)) {
        let a = built(&raw, 2, BuildMode::Exhaustive);
        let b = built(&raw, 2, BuildMode::Exhaustive);
        prop_assert_eq!(a.bisectors().len(), b.bisectors().len());
        for (x, y) in a.bisectors().iter().zip(b.bisectors()) {
            prop_assert_eq!((x.a, x.b), (y.a, y.b));
            prop_assert_eq!(x.points.len(), y.points.len());
            for (p, q) in x.points.iter().zip(&y.points) {
                prop_assert_eq!(p.x.to_bits(), q.x.to_bits());
                prop_assert_eq!(p.y.to_bits(), q.y.to_bits());
            }
        }
    }

    #[test]
    fn coarser_multiples_never_add_samples(
        a in site_strategy(), b in site_strategy(), gap in 1u32..4, factor in 2u32..4,
    ) {
        let [a, b] = [a, b].map(|(x, y, w)| Site::new(x as f64 + 0.5, y as f64 + 0.25, w as f64 * 0.75));
        let bounds = Bounds::new(64.0, 64.0);
        let fine = solve(&a, &b, &[], bounds, gap);
        let coarse = solve(&a, &b, &[], bounds, gap * factor);
        prop_assert!(coarse.len() <= fine.len());
        for p in &coarse { prop_assert!(fine.contains(p)); }
    }
}
