//! One-shot character-by-character reveal for the prize banner.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::TYPEWRITER_INTERVAL_MS;

pub const PRIZE_BANNER: &str = "🏆 Total Prizes worth ₹ 55,000/-";

pub const CURSOR_MARKUP: &str = r#"<span class="typewriter-cursor">&nbsp;</span>"#;

#[derive(Debug, PartialEq, Eq)]
pub enum TypeStep {
    /// Append this character to the target.
    Char(char),
    /// All characters are out; append the blinking cursor, exactly once.
    Cursor,
    /// Nothing left to do.
    Done,
}

/// Steps through a fixed string one character at a time, then yields the
/// cursor once. Ticking past the end is a no-op.
pub struct Typewriter {
    chars: Vec<char>,
    pos: usize,
    cursor_written: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            cursor_written: false,
        }
    }

    pub fn tick(&mut self) -> TypeStep {
        if self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            self.pos += 1;
            TypeStep::Char(c)
        } else if !self.cursor_written {
            self.cursor_written = true;
            TypeStep::Cursor
        } else {
            TypeStep::Done
        }
    }
}

/// Clear the target and start revealing `text` into it, one character per
/// configured interval, via chained one-shot callbacks.
pub fn start_typewriter(target: Element, text: &str) {
    target.set_inner_html("");
    type_step(Rc::new(RefCell::new(Typewriter::new(text))), target);
}

fn type_step(typewriter: Rc<RefCell<Typewriter>>, target: Element) {
    let step = typewriter.borrow_mut().tick();
    match step {
        TypeStep::Char(c) => {
            let mut html = target.inner_html();
            html.push(c);
            target.set_inner_html(&html);
            Timeout::new(TYPEWRITER_INTERVAL_MS, move || type_step(typewriter, target)).forget();
        }
        TypeStep::Cursor => {
            let mut html = target.inner_html();
            html.push_str(CURSOR_MARKUP);
            target.set_inner_html(&html);
        }
        TypeStep::Done => {}
    }
}
