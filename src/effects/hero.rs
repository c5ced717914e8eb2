//! Hero entrance choreography.
//!
//! An ordered list of reveal steps with relative offsets, resolved into
//! absolute start times by [`schedule`]. Negative offsets make adjacent
//! steps overlap. Each cue fires once: it stamps the per-element transition
//! timing inline and flips the element to its revealed state; the stylesheet
//! interpolates from there.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::utils::dom::select_all;

#[derive(Debug)]
pub struct HeroStep {
    pub selector: &'static str,
    pub duration_ms: u32,
    /// Shift of this step's start relative to the end of the previous step.
    /// Negative values overlap; the first step's offset is its initial delay.
    pub offset_ms: i32,
    /// Extra per-element delay when the selector matches several elements.
    pub stagger_ms: u32,
}

pub const HERO_TIMELINE: &[HeroStep] = &[
    HeroStep { selector: ".hero h1", duration_ms: 1200, offset_ms: 500, stagger_ms: 0 },
    HeroStep { selector: ".hero-subtitle", duration_ms: 800, offset_ms: -800, stagger_ms: 0 },
    HeroStep { selector: ".hero-organizer", duration_ms: 800, offset_ms: -600, stagger_ms: 0 },
    HeroStep { selector: ".hero-tagline", duration_ms: 800, offset_ms: -600, stagger_ms: 0 },
    HeroStep { selector: ".hero-detail", duration_ms: 600, offset_ms: -400, stagger_ms: 100 },
    HeroStep { selector: ".cta-buttons .btn", duration_ms: 600, offset_ms: -200, stagger_ms: 100 },
];

#[derive(Debug, PartialEq, Eq)]
pub struct HeroCue {
    pub selector: &'static str,
    pub at_ms: u32,
    pub duration_ms: u32,
    pub stagger_ms: u32,
}

/// Resolve relative timeline offsets into absolute start times, clamped so
/// an aggressive overlap can never reach before the timeline start.
pub fn schedule(steps: &[HeroStep]) -> Vec<HeroCue> {
    let mut prev_end: i64 = 0;
    steps
        .iter()
        .map(|step| {
            let start = (prev_end + i64::from(step.offset_ms)).max(0);
            prev_end = start + i64::from(step.duration_ms);
            HeroCue {
                selector: step.selector,
                at_ms: start as u32,
                duration_ms: step.duration_ms,
                stagger_ms: step.stagger_ms,
            }
        })
        .collect()
}

/// Arm one timeout per cue. Runs once, at interaction-bind time.
pub fn play_entrance(document: &Document) {
    for cue in schedule(HERO_TIMELINE) {
        let document = document.clone();
        Timeout::new(cue.at_ms, move || {
            for (i, element) in select_all(&document, cue.selector).into_iter().enumerate() {
                fire_cue(&element, cue.duration_ms, cue.stagger_ms * i as u32);
            }
        })
        .forget();
    }
}

fn fire_cue(element: &Element, duration_ms: u32, delay_ms: u32) {
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        let style = html.style();
        let _ = style.set_property("transition-duration", &format!("{}ms", duration_ms));
        let _ = style.set_property("transition-delay", &format!("{}ms", delay_ms));
    }
    let _ = element.class_list().add_1("in");
}
