use crate::error;
use crate::interop::{arr_f64, arr_u32, new_obj, set_kv};
use crate::Diagram;
use apollonius::geometry::limits;
use apollonius::BuildMode;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn mode_of(accelerated: bool) -> BuildMode {
    if accelerated { BuildMode::Accelerated } else { BuildMode::Exhaustive }
}

#[wasm_bindgen]
impl Diagram {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Diagram {
        crate::Diagram::rs_new(width, height)
    }
    pub fn new_res(width: f64, height: f64) -> JsValue {
        if !width.is_finite() {
            return error::non_finite("width");
        }
        if !height.is_finite() {
            return error::non_finite("height");
        }
        let mut d = crate::Diagram::rs_new(0.0, 0.0);
        match d.inner.set_dimensions(width, height) {
            Ok(()) => error::ok(JsValue::from(d)),
            Err(e) => error::from_core(&e),
        }
    }
    pub fn width(&self) -> f64 {
        self.inner.width()
    }
    pub fn height(&self) -> f64 {
        self.inner.height()
    }

    // Sites
    pub fn set_sites(&mut self, data: &[f64]) -> bool {
        self.inner.set_sites(data).is_ok()
    }
    pub fn set_sites_res(&mut self, data: &[f64]) -> JsValue {
        match self.inner.set_sites(data) {
            Ok(()) => error::ok(JsValue::from_f64(self.inner.site_count() as f64)),
            Err(e) => error::from_core(&e),
        }
    }
    pub fn set_sites_pure(&mut self, data: &[f64]) -> bool {
        self.inner.set_sites_pure(data).is_ok()
    }
    pub fn set_sites_pure_res(&mut self, data: &[f64]) -> JsValue {
        match self.inner.set_sites_pure(data) {
            Ok(()) => error::ok(JsValue::from_f64(self.inner.site_count() as f64)),
            Err(e) => error::from_core(&e),
        }
    }
    pub fn site_count(&self) -> u32 {
        self.inner.site_count() as u32
    }
    pub fn flatten_sites(&self) -> js_sys::Float64Array {
        arr_f64(&self.inner.flatten_sites())
    }
    pub fn site_centers(&self) -> js_sys::Float64Array {
        arr_f64(&self.inner.site_centers())
    }
    pub fn nearest_site(&self, x: f64, y: f64) -> Option<u32> {
        self.inner.nearest_site(x, y).map(|i| i as u32)
    }
    pub fn nearest_site_res(&self, x: f64, y: f64) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        match self.nearest_site(x, y) {
            Some(i) => error::ok(JsValue::from_f64(i as f64)),
            None => error::ok(JsValue::NULL),
        }
    }

    // Quality
    pub fn scan_gap(&self) -> u32 {
        self.inner.scan_gap()
    }
    pub fn set_scan_gap(&mut self, gap: i32) -> bool {
        self.inner.set_scan_gap(gap as i64).is_ok()
    }
    pub fn set_scan_gap_res(&mut self, gap: f64) -> JsValue {
        if !gap.is_finite() {
            return error::non_finite("gap");
        }
        let max = limits::SCAN_GAP_MAX as f64;
        if gap.fract() != 0.0 || gap < 1.0 || gap > max {
            return error::out_of_range("gap", 1.0, max, gap);
        }
        match self.inner.set_scan_gap(gap as i64) {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::from_core(&e),
        }
    }

    // Build + output
    pub fn build(&mut self, accelerated: bool) -> u32 {
        self.inner.build(mode_of(accelerated)).pairs_with_bisector as u32
    }
    pub fn build_res(&mut self, accelerated: bool) -> JsValue {
        let s = self.inner.build(mode_of(accelerated));
        let obj = new_obj();
        set_kv(&obj, "pairs", &JsValue::from_f64(s.pairs_considered as f64));
        set_kv(&obj, "bisectors", &JsValue::from_f64(s.pairs_with_bisector as f64));
        set_kv(&obj, "points", &JsValue::from_f64(s.points as f64));
        error::ok(obj.into())
    }
    pub fn bisector_count(&self) -> u32 {
        self.inner.bisectors().len() as u32
    }
    /// `[[[x,y],...], ...]`, one polyline per contributing pair.
    pub fn bisectors(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.bisector_polylines()).unwrap_or(JsValue::NULL)
    }
    /// Packed typed arrays: `pairs` `[a0,b0,...]`, `offsets` into `points`
    /// (length bisectors+1, counted in points), `points` `[x0,y0,...]`.
    pub fn get_bisector_data(&self) -> JsValue {
        let bis = self.inner.bisectors();
        let mut pairs = Vec::with_capacity(bis.len() * 2);
        let mut offsets = Vec::with_capacity(bis.len() + 1);
        let mut points = Vec::new();
        offsets.push(0u32);
        for b in bis {
            pairs.push(b.a as u32);
            pairs.push(b.b as u32);
            for p in &b.points {
                points.push(p.x);
                points.push(p.y);
            }
            offsets.push((points.len() / 2) as u32);
        }
        let obj = new_obj();
        set_kv(&obj, "pairs", &arr_u32(&pairs).into());
        set_kv(&obj, "offsets", &arr_u32(&offsets).into());
        set_kv(&obj, "points", &arr_f64(&points).into());
        obj.into()
    }

    // JSON
    pub fn to_json(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.to_json_value()).unwrap_or(JsValue::NULL)
    }
    pub fn from_json(&mut self, v: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => self.inner.from_json_value(val).is_ok(),
            Err(_) => false,
        }
    }
    pub fn from_json_res(&mut self, v: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => match self.inner.from_json_value(val) {
                Ok(()) => error::ok(JsValue::from_bool(true)),
                Err(e) => error::from_core(&e),
            },
            Err(e) => error::err("json_parse", format!("{}", e), None),
        }
    }
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
