//! Drives a full splash under a virtual clock: boot playback and the load
//! sequence interleaved the way the page schedules them, against a recording
//! stage instead of the document.

use hackhub_landing::boot::{BootPlayer, BootState, BOOT_SCRIPT, STATUS_LADDER};
use hackhub_landing::config::{INTERACTIONS_DELAY_MS, LOAD_DURATION_MS};
use hackhub_landing::effects::hero::{schedule, HERO_TIMELINE};
use hackhub_landing::loading::{LoadPhase, LoadSequence, LOADING_SCREEN_ID, MAIN_CONTENT_ID};
use hackhub_landing::stage::Stage;

#[derive(Default)]
struct Recorder {
    now_ms: u32,
    events: Vec<(u32, String)>,
}

impl Recorder {
    fn record(&mut self, event: String) {
        self.events.push((self.now_ms, event));
    }

    fn time_of(&self, event: &str) -> Option<u32> {
        self.events
            .iter()
            .find(|(_, e)| e == event)
            .map(|(at, _)| *at)
    }
}

impl Stage for Recorder {
    fn reveal(&mut self, target: &str) {
        self.record(format!("reveal {}", target));
    }
    fn hide(&mut self, target: &str) {
        self.record(format!("hide {}", target));
    }
    fn append_line(&mut self, markup: &str) {
        self.record(format!("line {}", markup));
    }
    fn set_status(&mut self, text: &str) {
        self.record(format!("status {}", text));
    }
    fn toggle_class(&mut self, target: &str, class: &str, on: bool) {
        self.record(format!("toggle {} {} {}", target, class, on));
    }
}

/// Runs both timer chains to completion, always firing the earliest pending
/// callback first, boot lines winning ties like same-deadline timeouts queued
/// earlier would.
fn run_splash(stage: &mut Recorder) -> Option<u32> {
    let mut player = BootPlayer::new();
    let mut sequence = LoadSequence::new();
    let mut boot_at = player.start();
    let mut interactive_at = None;

    while boot_at.is_some() || sequence.next_deadline_ms().is_some() {
        let next_boot = boot_at.unwrap_or(u32::MAX);
        let next_load = sequence.next_deadline_ms().unwrap_or(u32::MAX);
        if next_boot <= next_load {
            stage.now_ms = next_boot;
            boot_at = player.render_next(stage).map(|delay| next_boot + delay);
        } else {
            stage.now_ms = next_load;
            if sequence.advance(stage) == LoadPhase::Interactive {
                interactive_at = Some(next_load);
            }
        }
    }

    assert_eq!(player.state(), BootState::Finished);
    interactive_at
}

#[test]
fn splash_reveals_content_at_deadline_then_binds_interactions() {
    let mut stage = Recorder::default();
    let interactive_at = run_splash(&mut stage);

    assert_eq!(
        stage.time_of(&format!("hide {}", LOADING_SCREEN_ID)),
        Some(LOAD_DURATION_MS)
    );
    assert_eq!(
        stage.time_of(&format!("reveal {}", MAIN_CONTENT_ID)),
        Some(LOAD_DURATION_MS)
    );
    assert_eq!(interactive_at, Some(LOAD_DURATION_MS + INTERACTIONS_DELAY_MS));
}

#[test]
fn every_boot_line_lands_at_its_authored_offset_before_the_reveal() {
    let mut stage = Recorder::default();
    run_splash(&mut stage);

    let lines: Vec<(u32, &str)> = stage
        .events
        .iter()
        .filter_map(|(at, e)| e.strip_prefix("line ").map(|rest| (*at, rest)))
        .collect();

    // 11 scripted lines plus the cursor, in index order, at authored times
    assert_eq!(lines.len(), BOOT_SCRIPT.len() + 1);
    for (rendered, authored) in lines.iter().zip(BOOT_SCRIPT) {
        assert_eq!(rendered.0, authored.at_ms);
        assert_eq!(rendered.1, authored.text);
        assert!(rendered.0 <= LOAD_DURATION_MS);
    }
}

#[test]
fn status_walks_the_full_ladder_and_ends_pinned() {
    let mut stage = Recorder::default();
    run_splash(&mut stage);

    let statuses: Vec<&str> = stage
        .events
        .iter()
        .filter_map(|(_, e)| e.strip_prefix("status "))
        .collect();

    assert_eq!(statuses, STATUS_LADDER.to_vec());
}

#[test]
fn hero_entrance_cues_follow_the_documented_order() {
    let cues = schedule(HERO_TIMELINE);
    let order: Vec<&str> = cues.iter().map(|c| c.selector).collect();
    assert_eq!(
        order,
        vec![
            ".hero h1",
            ".hero-subtitle",
            ".hero-organizer",
            ".hero-tagline",
            ".hero-detail",
            ".cta-buttons .btn",
        ]
    );
    for pair in cues.windows(2) {
        assert!(pair[0].at_ms <= pair[1].at_ms);
    }
}
