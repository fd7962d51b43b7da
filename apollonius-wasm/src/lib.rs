use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Diagram { pub(crate) inner: apollonius::Diagram }

impl Diagram {
    pub fn rs_new(width: f64, height: f64) -> Diagram { Diagram { inner: apollonius::Diagram::new(width, height) } }
}
