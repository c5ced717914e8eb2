//! Scroll, hover, and splash-time animation plumbing. Target values and
//! trigger conditions live here; interpolation and easing are the
//! stylesheet's job.

pub mod hero;
pub mod rain;
pub mod reveal;
pub mod typewriter;

/// One-time registration pass run a beat after the main content is revealed.
pub fn init_page_interactions() {
    let document = match crate::utils::dom::document() {
        Some(doc) => doc,
        None => {
            log::error!("document unavailable, page interactions not bound");
            return;
        }
    };
    hero::play_entrance(&document);
    reveal::bind_scroll_effects(&document);
}
