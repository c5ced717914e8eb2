//! Phase control for the one-shot loading splash.
//!
//! One irreversible pass: the splash is shown, the page is revealed after a
//! fixed duration, and interactions are bound one short beat later. Deadlines
//! are exposed as absolute offsets from splash start so both the live page
//! and a virtual clock can drive the same transitions.

use crate::config::{INTERACTIONS_DELAY_MS, LOAD_DURATION_MS};
use crate::stage::Stage;

pub const LOADING_SCREEN_ID: &str = "loadingScreen";
pub const MAIN_CONTENT_ID: &str = "mainContent";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// Splash visible, boot log playing.
    Splash,
    /// Splash hidden, main content marked loaded.
    Revealed,
    /// Page interactions bound; nothing left to schedule.
    Interactive,
}

pub struct LoadSequence {
    phase: LoadPhase,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Splash,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Offset from splash start (ms) at which the next transition is owed.
    pub fn next_deadline_ms(&self) -> Option<u32> {
        match self.phase {
            LoadPhase::Splash => Some(LOAD_DURATION_MS),
            LoadPhase::Revealed => Some(LOAD_DURATION_MS + INTERACTIONS_DELAY_MS),
            LoadPhase::Interactive => None,
        }
    }

    /// Run the transition owed at the current deadline and return the phase
    /// entered.
    pub fn advance(&mut self, stage: &mut dyn Stage) -> LoadPhase {
        match self.phase {
            LoadPhase::Splash => {
                stage.hide(LOADING_SCREEN_ID);
                stage.reveal(MAIN_CONTENT_ID);
                self.phase = LoadPhase::Revealed;
            }
            LoadPhase::Revealed => {
                self.phase = LoadPhase::Interactive;
            }
            LoadPhase::Interactive => {}
        }
        self.phase
    }
}

impl Default for LoadSequence {
    fn default() -> Self {
        Self::new()
    }
}
