//! The capabilities the widget needs from whatever draws it.
//!
//! The widget's state machine never touches a terminal directly. After every
//! change it pushes colors, texts, visibility, heights and margins through a
//! [`Renderer`], and asks it to measure warning text. [`TerminalRenderer`]
//! is the lipgloss implementation; hosts with their own drawing layer can
//! supply another.
//!
//! [`TerminalRenderer`]: super::TerminalRenderer

use bubbletea_rs::{Cmd, Msg};
use std::time::Duration;

/// Parts of the widget that take a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    /// Fill behind the widget.
    Background,
    /// The floating hint.
    Hint,
    /// The divider under the field.
    Divider,
    /// The warning text.
    Warning,
}

/// Parts of the widget that show text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    /// The floating hint.
    Hint,
    /// The warning area.
    Warning,
    /// Glyph left of the field.
    LeftIcon,
    /// Glyph right of the field.
    RightIcon,
}

/// Parts of the widget that can be shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibleSlot {
    /// The floating hint.
    Hint,
    /// The warning area.
    Warning,
}

/// Parts of the widget with a height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeightSlot {
    /// The hint row.
    Hint,
    /// The divider line.
    Divider,
    /// The whole widget.
    Container,
}

/// Sides of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left of the field.
    Leading,
    /// Right of the field.
    Trailing,
}

/// Timing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Starts slow.
    EaseIn,
    /// Ends slow.
    EaseOut,
    /// Starts and ends slow.
    #[default]
    EaseInOut,
}

impl Curve {
    /// Maps linear progress in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t * t,
            Curve::EaseOut => 1.0 - (1.0 - t).powi(3),
            Curve::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A timed change between two visual states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Time from start to end, after the delay.
    pub duration: Duration,
    /// Time before the change starts.
    pub delay: Duration,
    /// Timing curve.
    pub curve: Curve,
}

impl Transition {
    /// A transition with the given timing.
    pub const fn new(duration: Duration, delay: Duration, curve: Curve) -> Self {
        Self {
            duration,
            delay,
            curve,
        }
    }

    /// Eased progress in `[0, 1]` after `elapsed` time, counting the delay.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        self.curve
            .apply(running.as_secs_f64() / self.duration.as_secs_f64())
    }

    /// Total time including the delay.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

/// What the widget needs from its drawing layer.
///
/// Every setter receives the complete end state, so a renderer may drop or
/// coalesce intermediate calls. `set_visible` may return a command that drives
/// an animation; frames come back through [`Renderer::update`]. A new transition
/// on the same slot supersedes the previous one.
pub trait Renderer {
    /// Colors a part of the widget. `None` restores the renderer's default.
    fn set_color(&mut self, slot: ColorSlot, color: Option<&str>);

    /// Sets or clears the text of a part.
    fn set_text(&mut self, slot: TextSlot, text: Option<&str>);

    /// Shows or hides a part, optionally animated.
    fn set_visible(&mut self, slot: VisibleSlot, visible: bool, transition: Option<Transition>) -> Option<Cmd>;

    /// Sets the height of a part, in layout units.
    fn set_height(&mut self, slot: HeightSlot, height: f64);

    /// Sets the margin reserved on one side of the field, in layout units.
    fn set_margin(&mut self, edge: Edge, margin: f64);

    /// Height, in layout units, that `text` needs when laid out at `width`.
    fn measure_text_height(&self, text: &str, width: f64) -> f64;

    /// Handles the renderer's own messages, such as animation frames.
    fn update(&mut self, _msg: &Msg) -> Option<Cmd> {
        None
    }
}
