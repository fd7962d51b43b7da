use crate::error::ApolloniusError;
use crate::geometry::limits;
use crate::model::Site;
use crate::Diagram;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const VERSION: u64 = 1;

#[derive(Serialize, Deserialize)]
struct BisectorDoc {
    a: usize,
    b: usize,
    points: Vec<[f64; 2]>,
}

pub fn to_json_impl(d: &Diagram) -> Value {
    #[derive(Serialize)]
    struct DocSer<'a> {
        version: u64,
        width: f64,
        height: f64,
        scan_gap: u32,
        sites: &'a [Site],
        bisectors: Vec<BisectorDoc>,
    }
    let doc = DocSer {
        version: VERSION,
        width: d.width,
        height: d.height,
        scan_gap: d.scan_gap,
        sites: &d.sites,
        bisectors: d
            .bisectors
            .iter()
            .map(|b| BisectorDoc { a: b.a, b: b.b, points: b.points.iter().map(|&p| p.into()).collect() })
            .collect(),
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

/// Replace the diagram's configuration and sites from a document. Sites are
/// taken as-is; bisectors in the document are ignored and must be rebuilt.
pub fn from_json_impl(d: &mut Diagram, v: Value) -> Result<(), ApolloniusError> {
    #[derive(Deserialize)]
    struct DocDe {
        version: u64,
        width: f64,
        height: f64,
        #[serde(default)]
        scan_gap: Option<i64>,
        sites: Vec<Site>,
    }
    let doc: DocDe = serde_json::from_value(v)?;
    if doc.version != VERSION {
        return Err(ApolloniusError::UnsupportedVersion(doc.version));
    }
    if !limits::in_dim_bounds(doc.width) || !limits::in_dim_bounds(doc.height) {
        return Err(ApolloniusError::InvalidDimensions { width: doc.width, height: doc.height });
    }
    let gap = crate::validate_scan_gap(doc.scan_gap.unwrap_or(1))?;
    let flat = crate::ingest::flatten(&doc.sites);
    let sites = crate::ingest::parse_triples(&flat)?;

    // Validated in full before mutating.
    d.width = doc.width;
    d.height = doc.height;
    d.scan_gap = gap;
    d.install(sites);
    Ok(())
}
