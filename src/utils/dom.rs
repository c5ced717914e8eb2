//! Small web-sys conveniences shared by the page components.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Collect all elements matching `selector`.
pub fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    } else {
        log::warn!("bad selector: {}", selector);
    }
    out
}

/// Click handler for in-page anchors. When the anchor's `#target` exists the
/// default jump is suppressed and the target scrolls smoothly into view,
/// start-aligned; otherwise the browser's default behavior is kept.
pub fn smooth_scroll_onclick() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| {
        let anchor = match e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
            Some(el) => el,
            None => return,
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        let id = match href.strip_prefix('#') {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return,
        };
        if let Some(target) = document().and_then(|doc| doc.get_element_by_id(&id)) {
            e.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
}
