pub mod error;
pub mod model;
pub mod geometry {
    pub mod frame;
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod bisector;
    pub mod build;
    pub mod neighbors;
    pub mod pairs;
}
mod ingest;
mod json;

pub use error::ApolloniusError;
pub use model::{Bisector, Bounds, BuildMode, BuildStats, Point2D, Site};

use algorithms::build::{build_sorted, weight_order};
use geometry::limits;

/// Sampled Apollonius diagram over a rectangular canvas.
///
/// Sites keep their input order; builds work on a weight-sorted view and
/// report bisectors by input index. `build` recomputes everything from the
/// current sites, so a `Diagram` needs a single writer but no locking.
#[derive(Clone, Debug)]
pub struct Diagram {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) scan_gap: u32,
    pub(crate) sites: Vec<Site>,
    pub(crate) order: Vec<usize>, // sorted position -> input index
    pub(crate) bisectors: Vec<Bisector>,
    pub(crate) stats: BuildStats,
    pub(crate) last_mode: Option<BuildMode>,
}

impl Default for Diagram {
    fn default() -> Self { Diagram::new(100.0, 100.0) }
}

pub(crate) fn validate_scan_gap(gap: i64) -> Result<u32, ApolloniusError> {
    if gap <= 0 || gap > limits::SCAN_GAP_MAX {
        return Err(ApolloniusError::InvalidScanGap { got: gap });
    }
    Ok(gap as u32)
}

fn sanitize_dim(v: f64) -> f64 {
    if limits::in_dim_bounds(v) { return v; }
    log::warn!("canvas dimension {v} out of range; clamping");
    if v.is_finite() && v > 0.0 { limits::DIM_MAX } else { 0.0 }
}

impl Diagram {
    /// Empty diagram; invalid dimensions are clamped into `[0, DIM_MAX]`.
    pub fn new(width: f64, height: f64) -> Diagram {
        Diagram {
            width: sanitize_dim(width),
            height: sanitize_dim(height),
            scan_gap: 1,
            sites: Vec::new(),
            order: Vec::new(),
            bisectors: Vec::new(),
            stats: BuildStats::default(),
            last_mode: None,
        }
    }

    pub fn with_sites(width: f64, height: f64, data: &[f64]) -> Result<Diagram, ApolloniusError> {
        let mut d = Diagram::new(width, height);
        d.set_sites(data)?;
        Ok(d)
    }

    /// Canvas sized to fit the (normalized) sites.
    pub fn from_sites(data: &[f64]) -> Result<Diagram, ApolloniusError> {
        Diagram::with_sites(0.0, 0.0, data)
    }

    pub fn width(&self) -> f64 { self.width }
    pub fn height(&self) -> f64 { self.height }
    pub fn bounds(&self) -> Bounds { Bounds::new(self.width, self.height) }

    pub fn set_dimensions(&mut self, width: f64, height: f64) -> Result<(), ApolloniusError> {
        if !limits::in_dim_bounds(width) || !limits::in_dim_bounds(height) {
            return Err(ApolloniusError::InvalidDimensions { width, height });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn scan_gap(&self) -> u32 { self.scan_gap }

    /// Sampling stride along the scan axis; larger is sparser and faster.
    pub fn set_scan_gap(&mut self, gap: i64) -> Result<(), ApolloniusError> {
        self.scan_gap = validate_scan_gap(gap)?;
        Ok(())
    }

    /// Replace all sites from `[x0,y0,w0,...]`. Sites are shifted so every
    /// coordinate is non-negative and the canvas grows to contain them, up
    /// to `DIM_MAX` per side.
    pub fn set_sites(&mut self, data: &[f64]) -> Result<(), ApolloniusError> {
        let mut sites = parse_or_warn(data)?;
        let (max_x, max_y) = ingest::normalize(&mut sites);
        let (width, height) = (self.width.max(max_x), self.height.max(max_y));
        // Grown canvas must stay loadable and keep the scan bounded.
        if !limits::in_dim_bounds(width) || !limits::in_dim_bounds(height) {
            log::warn!("site extent {width}x{height} exceeds canvas limit");
            return Err(ApolloniusError::InvalidDimensions { width, height });
        }
        self.width = width;
        self.height = height;
        self.install(sites);
        Ok(())
    }

    /// Replace all sites without shifting them or touching the canvas.
    pub fn set_sites_pure(&mut self, data: &[f64]) -> Result<(), ApolloniusError> {
        let sites = parse_or_warn(data)?;
        self.install(sites);
        Ok(())
    }

    /// Install already-built sites as-is.
    pub fn set_site_list(&mut self, sites: Vec<Site>) -> Result<(), ApolloniusError> {
        let sites = parse_or_warn(&ingest::flatten(&sites))?;
        self.install(sites);
        Ok(())
    }

    pub(crate) fn install(&mut self, sites: Vec<Site>) {
        self.sites = sites;
        self.order.clear();
        self.bisectors.clear();
        self.stats = BuildStats::default();
        self.last_mode = None;
    }

    pub fn clear(&mut self) { self.install(Vec::new()); }

    /// Sites in input order.
    pub fn sites(&self) -> &[Site] { &self.sites }
    pub fn site_count(&self) -> usize { self.sites.len() }

    /// Weight order from the last build: `order()[k]` is the input index of
    /// the k-th lightest site.
    pub fn order(&self) -> &[usize] { &self.order }

    pub fn sorted_sites(&self) -> Vec<Site> {
        weight_order(&self.sites).into_iter().map(|i| self.sites[i]).collect()
    }

    /// `[x0,y0,w0,x1,y1,w1,...]` in input order.
    pub fn flatten_sites(&self) -> Vec<f64> { ingest::flatten(&self.sites) }

    /// `[x0,y0,x1,y1,...]` in input order.
    pub fn site_centers(&self) -> Vec<f64> { ingest::centers(&self.sites) }

    /// Recompute all bisectors from the current sites, overwriting the last result.
    pub fn build(&mut self, mode: BuildMode) -> BuildStats {
        self.order = weight_order(&self.sites);
        let sorted: Vec<Site> = self.order.iter().map(|&i| self.sites[i]).collect();
        let (raw, stats) = build_sorted(&sorted, self.bounds(), self.scan_gap, mode);
        let order = &self.order;
        let bisectors = raw
            .into_iter()
            .map(|r| Bisector { a: order[r.a], b: order[r.b], points: r.points })
            .collect();
        self.bisectors = bisectors;
        self.stats = stats;
        self.last_mode = Some(mode);
        log::debug!(
            "built {:?} diagram: {} sites, {} pairs, {} bisectors, {} points",
            mode, self.sites.len(), stats.pairs_considered, stats.pairs_with_bisector, stats.points
        );
        stats
    }

    pub fn build_exhaustive(&mut self) -> BuildStats { self.build(BuildMode::Exhaustive) }
    pub fn build_accelerated(&mut self) -> BuildStats { self.build(BuildMode::Accelerated) }

    pub fn bisectors(&self) -> &[Bisector] { &self.bisectors }

    /// Bisectors as bare polylines, in build order.
    pub fn bisector_polylines(&self) -> Vec<Vec<[f64; 2]>> {
        self.bisectors.iter().map(|b| b.points.iter().map(|&p| p.into()).collect()).collect()
    }

    pub fn stats(&self) -> BuildStats { self.stats }
    pub fn last_mode(&self) -> Option<BuildMode> { self.last_mode }

    /// Input index of the site with the smallest weighted distance to `(x, y)`.
    pub fn nearest_site(&self, x: f64, y: f64) -> Option<usize> {
        let p = Point2D::new(x, y);
        let mut best: Option<(usize, f64)> = None;
        for (i, s) in self.sites.iter().enumerate() {
            let d = s.weighted_distance_to(p);
            if best.map_or(true, |(_, bd)| d < bd) { best = Some((i, d)); }
        }
        best.map(|(i, _)| i)
    }

    pub fn to_json_value(&self) -> serde_json::Value { json::to_json_impl(self) }
    pub fn from_json_value(&mut self, v: serde_json::Value) -> Result<(), ApolloniusError> {
        json::from_json_impl(self, v)
    }
}

fn parse_or_warn(data: &[f64]) -> Result<Vec<Site>, ApolloniusError> {
    ingest::parse_triples(data).map_err(|e| {
        log::warn!("rejected site data: {e}");
        e
    })
}
