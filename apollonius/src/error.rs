use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApolloniusError {
    /// Flat site data must be `[x0,y0,w0,x1,y1,w1,...]`.
    #[error("site data length {len} is not a multiple of 3")]
    InvalidSiteData { len: usize },
    #[error("parameter '{param}' of site {index} must be finite and within coordinate bounds")]
    NonFinite { param: &'static str, index: usize },
    #[error("too many sites: {got} (max {max})")]
    TooManySites { got: usize, max: usize },
    #[error("scan gap must be a positive integer, got {got}")]
    InvalidScanGap { got: i64 },
    #[error("canvas dimensions must be finite and non-negative, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("unsupported document version {0}")]
    UnsupportedVersion(u64),
    #[error("malformed document: {0}")]
    Json(String),
}

impl ApolloniusError {
    /// Stable machine-readable code, shared with the wasm result objects.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSiteData { .. } => "invalid_site_data",
            Self::NonFinite { .. } => "non_finite",
            Self::TooManySites { .. } => "too_many_sites",
            Self::InvalidScanGap { .. } => "invalid_scan_gap",
            Self::InvalidDimensions { .. } => "invalid_dimensions",
            Self::UnsupportedVersion(_) => "unsupported_version",
            Self::Json(_) => "invalid_json",
        }
    }
}

impl From<serde_json::Error> for ApolloniusError {
    fn from(e: serde_json::Error) -> Self { Self::Json(e.to_string()) }
}
