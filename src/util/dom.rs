//! DOM query shorthands.
//!
//! Both helpers search under `root` when given, otherwise the whole document.
//! Query failures (no window, invalid selector) read as "nothing matched".

use wasm_bindgen::JsCast;
use web_sys::{Element, NodeList};

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First element matching `selector`.
pub fn qs(selector: &str, root: Option<&Element>) -> Option<Element> {
    match root {
        Some(el) => el.query_selector(selector).ok().flatten(),
        None => document()?.query_selector(selector).ok().flatten(),
    }
}

/// Every element matching `selector`, in document order.
pub fn qsa(selector: &str, root: Option<&Element>) -> Vec<Element> {
    let list = match root {
        Some(el) => el.query_selector_all(selector).ok(),
        None => document().and_then(|d| d.query_selector_all(selector).ok()),
    };
    list.map(|l| collect_elements(&l)).unwrap_or_default()
}

fn collect_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
