//! Rendering seam between the timed sequences and the document.
//!
//! The splash and boot playback never touch `web_sys` directly; they talk to
//! a [`Stage`] so the same sequencing logic can run against a recording
//! implementation under a virtual clock.

use web_sys::{Document, Element};

/// Everything the timed sequences are allowed to do to the page.
pub trait Stage {
    /// Mark `target` as revealed page content.
    fn reveal(&mut self, target: &str);
    /// Take `target` out of view for good.
    fn hide(&mut self, target: &str);
    /// Append one line of markup to the terminal view and pin its scroll
    /// position to the bottom.
    fn append_line(&mut self, markup: &str);
    /// Replace the coarse status indicator text.
    fn set_status(&mut self, text: &str);
    /// Force a class on or off an element.
    fn toggle_class(&mut self, target: &str, class: &str, on: bool);
}

const TERMINAL_ID: &str = "terminalContent";
const STATUS_ID: &str = "statusText";

/// [`Stage`] backed by the live document. Targets are element ids.
pub struct DomStage {
    document: Document,
}

impl DomStage {
    pub fn new() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|document| Self { document })
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            log::warn!("expected element #{} is missing, skipping", id);
        }
        element
    }
}

impl Stage for DomStage {
    fn reveal(&mut self, target: &str) {
        self.toggle_class(target, "loaded", true);
    }

    fn hide(&mut self, target: &str) {
        self.toggle_class(target, "hidden", true);
    }

    fn append_line(&mut self, markup: &str) {
        let terminal = match self.by_id(TERMINAL_ID) {
            Some(el) => el,
            None => return,
        };
        if let Ok(line) = self.document.create_element("div") {
            line.set_class_name("terminal-line");
            line.set_inner_html(markup);
            let _ = terminal.append_child(&line);
            terminal.set_scroll_top(terminal.scroll_height());
        }
    }

    fn set_status(&mut self, text: &str) {
        if let Some(status) = self.by_id(STATUS_ID) {
            status.set_text_content(Some(text));
        }
    }

    fn toggle_class(&mut self, target: &str, class: &str, on: bool) {
        if let Some(element) = self.by_id(target) {
            let result = if on {
                element.class_list().add_1(class)
            } else {
                element.class_list().remove_1(class)
            };
            if let Err(e) = result {
                log::error!("class toggle failed on #{}: {:?}", target, e);
            }
        }
    }
}
