use crate::interop::{new_obj, set_kv};
use apollonius::ApolloniusError;
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min));
    set_kv(&d, "max", &JsValue::from_f64(max));
    set_kv(&d, "got", &JsValue::from_f64(got));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

/// Map a core error onto the `{ok:false, error:{code,message,data}}` shape.
pub fn from_core(e: &ApolloniusError) -> JsValue {
    let d = new_obj();
    match e {
        ApolloniusError::InvalidSiteData { len } => set_kv(&d, "len", &JsValue::from_f64(*len as f64)),
        ApolloniusError::NonFinite { param, index } => {
            set_kv(&d, "param", &JsValue::from_str(param));
            set_kv(&d, "index", &JsValue::from_f64(*index as f64));
        }
        ApolloniusError::TooManySites { got, max } => {
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
        }
        ApolloniusError::InvalidScanGap { got } => set_kv(&d, "got", &JsValue::from_f64(*got as f64)),
        ApolloniusError::InvalidDimensions { width, height } => {
            set_kv(&d, "width", &JsValue::from_f64(*width));
            set_kv(&d, "height", &JsValue::from_f64(*height));
        }
        ApolloniusError::UnsupportedVersion(v) => set_kv(&d, "version", &JsValue::from_f64(*v as f64)),
        ApolloniusError::Json(_) => {}
    }
    web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    err(e.code(), e.to_string(), Some(d.into()))
}
