//! Caret for the text field.
//!
//! The cursor is embedded in [`crate::textfield::Model`] and updated by
//! forwarding messages to it. It blinks on a timer while focused, and its block
//! takes the configured cursor color.
//!
//! ```rust
//! use floating_input::cursor;
//!
//! let mut cur = cursor::new();
//! cur.set_color(Some("#2196F3"));
//! let _ = cur.focus();
//! cur.set_char("x");
//! assert!(!cur.view().is_empty());
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Blink messages carry the id of the cursor that scheduled them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Starts blinking on a freshly focused cursor.
#[derive(Debug, Clone)]
pub struct InitialBlinkMsg;

/// Toggles a cursor's blink phase.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Cursor this message belongs to.
    pub id: usize,
    /// Blink sequence; stale tags are dropped.
    pub tag: usize,
}

/// How the cursor is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Alternates between block and plain character.
    Blink,
    /// Always drawn as a block.
    Static,
    /// Never drawn.
    Hide,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::Blink => "blink",
            Mode::Static => "static",
            Mode::Hide => "hidden",
        })
    }
}

/// Cursor state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Interval between blink phases.
    pub blink_speed: Duration,
    color: Option<String>,
    char: String,
    id: usize,
    focus: bool,
    // `true` while the block is *not* shown.
    blink: bool,
    blink_tag: usize,
    mode: Mode,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            color: None,
            char: " ".to_string(),
            id: next_id(),
            focus: false,
            blink: true,
            blink_tag: 0,
            mode: Mode::Blink,
        }
    }
}

impl Model {
    /// Creates an unfocused, blinking cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the block color. `None` falls back to reverse video only.
    pub fn set_color(&mut self, color: Option<&str>) {
        self.color = color.map(str::to_string);
    }

    /// The configured block color.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Handles blink messages addressed to this cursor.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if msg.downcast_ref::<InitialBlinkMsg>().is_some() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            return self.blink_cmd();
        }

        if let Some(blink_msg) = msg.downcast_ref::<BlinkMsg>() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            if blink_msg.id != self.id || blink_msg.tag != self.blink_tag {
                return None;
            }
            self.blink = !self.blink;
            return self.blink_cmd();
        }

        None
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Changes the mode. Switching to [`Mode::Blink`] returns the command that starts it.
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.blink = self.mode == Mode::Hide || !self.focus;
        if mode == Mode::Blink {
            return Some(blink());
        }
        None
    }

    fn blink_cmd(&mut self) -> Option<Cmd> {
        if self.mode != Mode::Blink {
            return None;
        }

        self.blink_tag += 1;
        let tag = self.blink_tag;
        let id = self.id;

        Some(tick(self.blink_speed, move |_| {
            Box::new(BlinkMsg { id, tag }) as Msg
        }))
    }

    /// Shows the cursor and starts blinking when in blink mode.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.blink = self.mode == Mode::Hide;
        if self.mode == Mode::Blink {
            return self.blink_cmd();
        }
        None
    }

    /// Hides the cursor.
    pub fn blur(&mut self) {
        self.focus = false;
        self.blink = true;
    }

    /// Whether the cursor is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the character drawn under the cursor.
    pub fn set_char(&mut self, s: &str) {
        self.char = s.to_string();
    }

    /// Renders the cursor cell.
    pub fn view(&self) -> String {
        if self.mode == Mode::Hide || self.blink {
            return Style::new().inline(true).render(&self.char);
        }
        let style = match &self.color {
            Some(color) => Style::new().background(Color::from(color.as_str())),
            None => Style::new().reverse(true),
        };
        style.inline(true).render(&self.char)
    }
}

/// Command that kicks off blinking.
pub fn blink() -> Cmd {
    tick(Duration::from_millis(0), |_| Box::new(InitialBlinkMsg) as Msg)
}

/// Creates a cursor. Same as [`Model::new`].
pub fn new() -> Model {
    Model::new()
}
