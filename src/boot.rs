//! Scripted terminal boot playback for the loading splash.
//!
//! The script is an immutable list of lines with delays authored as offsets
//! from sequence start. [`BootPlayer`] converts them to inter-line delays at
//! run time and walks the script one line per callback, so ordering holds
//! even when the event loop is busy.

use crate::stage::Stage;

/// One line of the boot script. `at_ms` is the offset from sequence start.
#[derive(Debug)]
pub struct BootLine {
    pub text: &'static str,
    pub at_ms: u32,
}

pub const BOOT_SCRIPT: &[BootLine] = &[
    BootLine {
        text: r#"<span class="terminal-prompt">root@hackhub:~$</span> sudo systemctl start hackathon.service"#,
        at_ms: 500,
    },
    BootLine { text: "[INFO] Loading hackathon modules...", at_ms: 1000 },
    BootLine { text: "[OK] Authentication system initialized", at_ms: 1500 },
    BootLine { text: "[OK] Database connections established", at_ms: 2000 },
    BootLine { text: "[INFO] Scanning for participants...", at_ms: 2500 },
    BootLine { text: "[OK] Found 500+ registered hackers", at_ms: 3000 },
    BootLine { text: "[INFO] Loading prize pool: ₹55,000/-", at_ms: 3500 },
    BootLine { text: "[OK] All systems operational", at_ms: 4000 },
    BootLine { text: "[INFO] Preparing innovation environment...", at_ms: 4200 },
    BootLine {
        text: r#"<span class="terminal-prompt">root@hackhub:~$</span> launch_hackathon --mode=epic"#,
        at_ms: 4400,
    },
    BootLine { text: "[SUCCESS] HACK HUB READY TO LAUNCH!", at_ms: 4500 },
];

/// Coarse status shown next to the progress bar. Advances every second line,
/// independent of the line count.
pub const STATUS_LADDER: &[&str] = &[
    "INITIALIZING SYSTEM...",
    "LOADING MODULES...",
    "CONNECTING TO SERVERS...",
    "SCANNING PARTICIPANTS...",
    "PREPARING ENVIRONMENT...",
    "SYSTEM READY!",
];

pub const CURSOR_MARKUP: &str = r#"<span class="terminal-cursor"></span>"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootState {
    Idle,
    Playing,
    Finished,
}

/// Walks a boot script against a [`Stage`]. A finished player stays
/// finished; replay means constructing a fresh one.
pub struct BootPlayer {
    script: &'static [BootLine],
    statuses: &'static [&'static str],
    line: usize,
    status: usize,
    state: BootState,
}

impl BootPlayer {
    pub fn new() -> Self {
        Self::with_script(BOOT_SCRIPT, STATUS_LADDER)
    }

    pub fn with_script(script: &'static [BootLine], statuses: &'static [&'static str]) -> Self {
        Self {
            script,
            statuses,
            line: 0,
            status: 0,
            state: BootState::Idle,
        }
    }

    /// Begin playback. Returns the delay before the first line fires, or
    /// `None` if the player is not idle or the script is empty.
    pub fn start(&mut self) -> Option<u32> {
        if self.state != BootState::Idle {
            return None;
        }
        let first = self.script.first()?;
        self.state = BootState::Playing;
        Some(first.at_ms)
    }

    /// Render the current line and return the delay until the next one.
    /// On the final line the blinking cursor is appended, the status is
    /// forced to its last message, and `None` is returned.
    pub fn render_next(&mut self, stage: &mut dyn Stage) -> Option<u32> {
        if self.state != BootState::Playing {
            return None;
        }
        let line = &self.script[self.line];
        stage.append_line(line.text);

        if self.line > 0 && self.line % 2 == 0 && self.status + 1 < self.statuses.len() {
            stage.set_status(self.statuses[self.status]);
            self.status += 1;
        }

        self.line += 1;
        match self.script.get(self.line) {
            Some(next) => Some(next.at_ms.saturating_sub(line.at_ms)),
            None => {
                stage.append_line(CURSOR_MARKUP);
                if let Some(last) = self.statuses.last() {
                    stage.set_status(last);
                }
                self.state = BootState::Finished;
                None
            }
        }
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    pub fn line_index(&self) -> usize {
        self.line
    }

    pub fn status_index(&self) -> usize {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
        statuses: Vec<String>,
    }

    impl Stage for Recorder {
        fn reveal(&mut self, _target: &str) {}
        fn hide(&mut self, _target: &str) {}
        fn append_line(&mut self, markup: &str) {
            self.lines.push(markup.to_string());
        }
        fn set_status(&mut self, text: &str) {
            self.statuses.push(text.to_string());
        }
        fn toggle_class(&mut self, _target: &str, _class: &str, _on: bool) {}
    }

    fn play_to_end(player: &mut BootPlayer, stage: &mut Recorder) -> Vec<u32> {
        let mut fired_at = Vec::new();
        let mut now = player.start().expect("player should start from idle");
        loop {
            fired_at.push(now);
            match player.render_next(stage) {
                Some(delay) => now += delay,
                None => break,
            }
        }
        fired_at
    }

    #[test]
    fn lines_fire_at_authored_offsets_in_order() {
        let mut player = BootPlayer::new();
        let mut stage = Recorder::default();
        let fired_at = play_to_end(&mut player, &mut stage);

        let authored: Vec<u32> = BOOT_SCRIPT.iter().map(|l| l.at_ms).collect();
        assert_eq!(fired_at, authored);

        // every scripted line in index order, then the cursor
        assert_eq!(stage.lines.len(), BOOT_SCRIPT.len() + 1);
        for (rendered, line) in stage.lines.iter().zip(BOOT_SCRIPT) {
            assert_eq!(rendered, line.text);
        }
        assert_eq!(stage.lines.last().map(String::as_str), Some(CURSOR_MARKUP));
        assert_eq!(player.state(), BootState::Finished);
    }

    #[test]
    fn status_ladder_shows_six_distinct_values() {
        let mut player = BootPlayer::new();
        let mut stage = Recorder::default();
        play_to_end(&mut player, &mut stage);

        let mut distinct = stage.statuses.clone();
        distinct.dedup();
        assert_eq!(distinct.len(), STATUS_LADDER.len());
        assert_eq!(distinct.len(), 6);
        assert_eq!(
            stage.statuses.last().map(String::as_str),
            STATUS_LADDER.last().copied()
        );
    }

    #[test]
    fn status_never_runs_past_final_message_when_lines_outpace_it() {
        static LONG_SCRIPT: &[BootLine] = &[
            BootLine { text: "a", at_ms: 0 },
            BootLine { text: "b", at_ms: 100 },
            BootLine { text: "c", at_ms: 200 },
            BootLine { text: "d", at_ms: 300 },
            BootLine { text: "e", at_ms: 400 },
            BootLine { text: "f", at_ms: 500 },
            BootLine { text: "g", at_ms: 600 },
            BootLine { text: "h", at_ms: 700 },
            BootLine { text: "i", at_ms: 800 },
            BootLine { text: "j", at_ms: 900 },
        ];
        static SHORT_LADDER: &[&str] = &["one", "two", "three"];

        let mut player = BootPlayer::with_script(LONG_SCRIPT, SHORT_LADDER);
        let mut stage = Recorder::default();
        play_to_end(&mut player, &mut stage);

        // ramps through the ladder, stops early, then the final line pins it
        assert_eq!(stage.statuses, vec!["one", "two", "three"]);
        assert_eq!(player.status_index(), SHORT_LADDER.len() - 1);
    }

    #[test]
    fn finished_player_does_not_replay() {
        let mut player = BootPlayer::new();
        let mut stage = Recorder::default();
        play_to_end(&mut player, &mut stage);

        let rendered = stage.lines.len();
        assert_eq!(player.start(), None);
        assert_eq!(player.render_next(&mut stage), None);
        assert_eq!(stage.lines.len(), rendered);
    }

    #[test]
    fn empty_script_never_starts() {
        static EMPTY: &[BootLine] = &[];
        let mut player = BootPlayer::with_script(EMPTY, STATUS_LADDER);
        assert_eq!(player.start(), None);
        assert_eq!(player.state(), BootState::Idle);
    }
}
