//! Small DOM helpers shared by the wiring modules.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub(crate) fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub(crate) fn select_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}
