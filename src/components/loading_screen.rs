//! Full-screen loading splash: rain decorations, the terminal boot log, and
//! the fixed-duration progress bar. Runs exactly once per page load.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::boot::BootPlayer;
use crate::config::LOAD_DURATION_MS;
use crate::effects::rain;
use crate::loading::{LoadPhase, LoadSequence};
use crate::stage::{DomStage, Stage};
use crate::utils::dom::document;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    /// Fired once the splash has been swapped out and the short settle
    /// buffer has elapsed; the page binds its interactions here.
    pub on_interactive: Callback<()>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    {
        let on_interactive = props.on_interactive.clone();
        use_effect_with_deps(
            move |_| {
                start_splash(on_interactive);
                || ()
            },
            (), // run once on mount
        );
    }

    html! {
        <div id="loadingScreen" class="loading-screen">
            <div id="matrixRain" class="matrix-rain"></div>
            <div id="binaryRain" class="binary-rain"></div>
            <div class="loading-terminal">
                <div class="terminal-header">
                    <span class="terminal-dot red"></span>
                    <span class="terminal-dot yellow"></span>
                    <span class="terminal-dot green"></span>
                    <span class="terminal-title">{"root@hackhub: ~"}</span>
                </div>
                <div id="terminalContent" class="terminal-content"></div>
            </div>
            <div class="loading-status">
                <div id="statusText" class="status-text">{"INITIALIZING SYSTEM..."}</div>
                <div class="loading-progress">
                    <div id="loadingProgressBar" class="loading-progress-bar"></div>
                </div>
            </div>
        </div>
    }
}

fn start_splash(on_interactive: Callback<()>) {
    let stage = match DomStage::new() {
        Some(stage) => stage,
        None => {
            log::error!("document unavailable, splash skipped");
            return;
        }
    };
    let stage = Rc::new(RefCell::new(stage));

    if let Some(doc) = document() {
        rain::spawn_rain(&doc);
    }
    arm_progress_bar();

    let mut player = BootPlayer::new();
    if let Some(first_delay) = player.start() {
        play_line(Rc::new(RefCell::new(player)), stage.clone(), first_delay);
    }

    schedule_phase(
        Rc::new(RefCell::new(LoadSequence::new())),
        stage,
        0,
        on_interactive,
    );
}

/// Chain one timeout per boot line; each rendered line schedules the next.
fn play_line(player: Rc<RefCell<BootPlayer>>, stage: Rc<RefCell<DomStage>>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let next = player
            .borrow_mut()
            .render_next(&mut *stage.borrow_mut() as &mut dyn Stage);
        if let Some(delay) = next {
            play_line(player, stage, delay);
        }
    })
    .forget();
}

/// Chain one timeout per load-sequence deadline.
fn schedule_phase(
    sequence: Rc<RefCell<LoadSequence>>,
    stage: Rc<RefCell<DomStage>>,
    elapsed_ms: u32,
    on_interactive: Callback<()>,
) {
    let deadline = match sequence.borrow().next_deadline_ms() {
        Some(deadline) => deadline,
        None => return,
    };
    Timeout::new(deadline.saturating_sub(elapsed_ms), move || {
        let phase = sequence
            .borrow_mut()
            .advance(&mut *stage.borrow_mut() as &mut dyn Stage);
        if phase == LoadPhase::Interactive {
            on_interactive.emit(());
            return;
        }
        schedule_phase(sequence, stage, deadline, on_interactive);
    })
    .forget();
}

/// Send the progress bar to 100% over the full splash duration. The width
/// change lands after the transition is in place so the bar tweens instead
/// of jumping.
fn arm_progress_bar() {
    let bar = match document().and_then(|doc| doc.get_element_by_id("loadingProgressBar")) {
        Some(bar) => bar,
        None => {
            log::warn!("progress bar missing, skipping");
            return;
        }
    };
    if let Some(html) = bar.dyn_ref::<web_sys::HtmlElement>() {
        let style = html.style();
        let _ = style.set_property("transition", &format!("width {}ms linear", LOAD_DURATION_MS));
        let _ = html.offset_width(); // flush layout before the width change
        let _ = style.set_property("width", "100%");
    }
}
