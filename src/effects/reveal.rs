//! Scroll-driven bindings: category reveals, navbar state, hero parallax,
//! and the one-shot typewriter trigger.
//!
//! A single scroll listener evaluates everything; the predicates it applies
//! are plain functions of geometry.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::config::{NAV_SCROLL_THRESHOLD_PX, REVEAL_VIEWPORT_FRACTION};
use crate::effects::typewriter::{start_typewriter, PRIZE_BANNER};
use crate::utils::dom::select_all;

/// The four reveal categories. Elements animate in when their top crosses
/// the viewport threshold and reverse when they leave again.
pub const REVEAL_SELECTORS: &[&str] =
    &[".fade-in", ".slide-in-left", ".slide-in-right", ".scale-in"];

pub fn past_reveal_threshold(top_px: f64, viewport_height_px: f64) -> bool {
    top_px < viewport_height_px * REVEAL_VIEWPORT_FRACTION
}

pub fn nav_scrolled(scroll_y_px: f64) -> bool {
    scroll_y_px > NAV_SCROLL_THRESHOLD_PX
}

/// Vertical offset of the hero background: drifts up at half scroll rate.
pub fn parallax_offset_px(scroll_y_px: f64) -> f64 {
    -scroll_y_px * 0.5
}

/// Register the shared scroll handler and run one initial pass so elements
/// already in view reveal without waiting for a scroll event.
pub fn bind_scroll_effects(document: &Document) {
    let document = document.clone();
    let typewriter_started = Rc::new(Cell::new(false));

    let handler = move || {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let viewport_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let scroll_y = window.scroll_y().unwrap_or(0.0);

        for selector in REVEAL_SELECTORS {
            for element in select_all(&document, selector) {
                let top = element.get_bounding_client_rect().top();
                let on = past_reveal_threshold(top, viewport_h);
                let result = if on {
                    element.class_list().add_1("visible")
                } else {
                    element.class_list().remove_1("visible")
                };
                let _ = result;
            }
        }

        if let Ok(Some(nav)) = document.query_selector("nav") {
            let list = nav.class_list();
            let _ = if nav_scrolled(scroll_y) {
                list.add_1("scrolled")
            } else {
                list.remove_1("scrolled")
            };
        }

        if let Ok(Some(bg)) = document.query_selector(".hero-bg") {
            if let Some(html) = bg.dyn_ref::<web_sys::HtmlElement>() {
                let _ = html.style().set_property(
                    "transform",
                    &format!("translateY({:.2}px)", parallax_offset_px(scroll_y)),
                );
            }
        }

        if !typewriter_started.get() {
            if let Ok(Some(container)) = document.query_selector(".typewriter-container") {
                if past_reveal_threshold(container.get_bounding_client_rect().top(), viewport_h) {
                    typewriter_started.set(true);
                    match document.get_element_by_id("typewriter-text") {
                        Some(target) => start_typewriter(target, PRIZE_BANNER),
                        None => log::warn!("typewriter target missing, skipping"),
                    }
                }
            }
        }
    };

    handler();

    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    match web_sys::window() {
        Some(window) => {
            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::error!("window unavailable, scroll effects not bound"),
    }
}
