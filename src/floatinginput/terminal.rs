//! Terminal renderer.
//!
//! Keeps the last state pushed by the widget and draws it as stacked rows:
//!
//! ```text
//!    Email                      <- floating hint (fades in and out)
//! ✉  ray@example.net            <- icons and the text field
//! ──────────────────────────    <- divider
//! Not a valid address           <- warning, wrapped to the widget width
//! ```
//!
//! The hint fade runs on frame ticks like the progress bar's spring. Each new
//! transition bumps a tag so frames from the previous one are ignored. Between
//! fully hidden and fully shown the hint is drawn faint.

use super::renderer::{ColorSlot, Edge, HeightSlot, Renderer, TextSlot, Transition, VisibleSlot};
use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Layout units per terminal row.
pub const ROW_HEIGHT: f64 = 15.0;

const FPS: u64 = 60;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Advances the hint fade of one renderer.
#[derive(Debug, Clone)]
pub struct HintFrameMsg {
    id: usize,
    tag: usize,
}

#[derive(Debug, Clone)]
struct Fade {
    from: f64,
    to: f64,
    elapsed: Duration,
    transition: Transition,
}

/// Draws a floating input with lipgloss.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    id: usize,
    tag: usize,

    background: Option<String>,
    hint_color: Option<String>,
    divider_color: Option<String>,
    warning_color: Option<String>,

    hint_text: Option<String>,
    warning_text: Option<String>,
    left_icon: Option<String>,
    right_icon: Option<String>,

    hint_visible: bool,
    warning_visible: bool,
    hint_opacity: f64,
    fade: Option<Fade>,

    hint_height: f64,
    divider_height: f64,
    container_height: f64,
    leading_margin: f64,
    trailing_margin: f64,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            id: next_id(),
            tag: 0,
            background: None,
            hint_color: None,
            divider_color: None,
            warning_color: None,
            hint_text: None,
            warning_text: None,
            left_icon: None,
            right_icon: None,
            hint_visible: false,
            warning_visible: false,
            hint_opacity: 0.0,
            fade: None,
            hint_height: 0.0,
            divider_height: 1.0,
            container_height: 0.0,
            leading_margin: 0.0,
            trailing_margin: 0.0,
        }
    }
}

impl TerminalRenderer {
    /// A renderer with nothing pushed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last color pushed for a slot.
    pub fn color(&self, slot: ColorSlot) -> Option<&str> {
        match slot {
            ColorSlot::Background => self.background.as_deref(),
            ColorSlot::Hint => self.hint_color.as_deref(),
            ColorSlot::Divider => self.divider_color.as_deref(),
            ColorSlot::Warning => self.warning_color.as_deref(),
        }
    }

    /// Last text pushed for a slot.
    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        match slot {
            TextSlot::Hint => self.hint_text.as_deref(),
            TextSlot::Warning => self.warning_text.as_deref(),
            TextSlot::LeftIcon => self.left_icon.as_deref(),
            TextSlot::RightIcon => self.right_icon.as_deref(),
        }
    }

    /// Visibility end state for a slot, regardless of a running fade.
    pub fn is_visible(&self, slot: VisibleSlot) -> bool {
        match slot {
            VisibleSlot::Hint => self.hint_visible,
            VisibleSlot::Warning => self.warning_visible,
        }
    }

    /// Current hint opacity in `[0, 1]`.
    pub fn hint_opacity(&self) -> f64 {
        self.hint_opacity
    }

    /// Whether a hint fade is running.
    pub fn is_animating(&self) -> bool {
        self.fade.is_some()
    }

    /// Last height pushed for a slot.
    pub fn height(&self, slot: HeightSlot) -> f64 {
        match slot {
            HeightSlot::Hint => self.hint_height,
            HeightSlot::Divider => self.divider_height,
            HeightSlot::Container => self.container_height,
        }
    }

    /// Last margin pushed for an edge.
    pub fn margin(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Leading => self.leading_margin,
            Edge::Trailing => self.trailing_margin,
        }
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let interval = Duration::from_nanos(1_000_000_000 / FPS);
        tick(interval, move |_| Box::new(HintFrameMsg { id, tag }) as Msg)
    }

    /// Draws the widget around an already rendered text field.
    ///
    /// `width` is the widget width in cells; 0 sizes it to the field row.
    /// The warning wraps at `width` exactly as [`Renderer::measure_text_height`]
    /// measures it, so 0 leaves it unwrapped.
    pub fn render(&self, field: &str, width: usize) -> String {
        let wrap_width = width;
        let left = if self.leading_margin > 0.0 {
            format!("{} ", self.left_icon.as_deref().unwrap_or(" "))
        } else {
            String::new()
        };
        let right = if self.trailing_margin > 0.0 {
            format!(" {}", self.right_icon.as_deref().unwrap_or(" "))
        } else {
            String::new()
        };

        let left_width = left.width();
        let field_width = lipgloss::width_visible(field);
        let natural = left_width + field_width + right.width();
        let width = if width == 0 { natural } else { width.max(natural) };

        let mut rows = Vec::new();

        if self.hint_height > 0.0 {
            let hint = match self.hint_text.as_deref() {
                Some(text) if self.hint_opacity > 0.0 => {
                    let mut style = self.style(self.hint_color.as_deref());
                    if self.hint_opacity < 1.0 {
                        style = style.faint(true);
                    }
                    let padded = pad(&format!("{}{}", " ".repeat(left_width), text), width);
                    style.render(&padded)
                }
                _ => self.style(None).render(&" ".repeat(width)),
            };
            rows.push(hint);
        }

        let gap = " ".repeat(width - natural);
        let bg = self.style(None);
        rows.push(format!(
            "{}{}{}{}",
            bg.render(&left),
            field,
            bg.render(&gap),
            bg.render(&right)
        ));

        let rule = if self.divider_height >= 2.0 { "━" } else { "─" };
        rows.push(
            self.style(self.divider_color.as_deref())
                .render(&rule.repeat(width)),
        );

        if self.warning_visible {
            if let Some(text) = self.warning_text.as_deref() {
                let style = self.style(self.warning_color.as_deref());
                for line in wrap(text, wrap_width) {
                    rows.push(style.render(&pad(&line, width)));
                }
            }
        }

        rows.join("\n")
    }

    fn style(&self, foreground: Option<&str>) -> Style {
        let mut style = Style::new();
        if let Some(color) = foreground {
            style = style.foreground(Color::from(color));
        }
        if let Some(color) = self.background.as_deref() {
            style = style.background(Color::from(color));
        }
        style
    }
}

impl Renderer for TerminalRenderer {
    fn set_color(&mut self, slot: ColorSlot, color: Option<&str>) {
        let color = color.map(str::to_string);
        match slot {
            ColorSlot::Background => self.background = color,
            ColorSlot::Hint => self.hint_color = color,
            ColorSlot::Divider => self.divider_color = color,
            ColorSlot::Warning => self.warning_color = color,
        }
    }

    fn set_text(&mut self, slot: TextSlot, text: Option<&str>) {
        let text = text.map(str::to_string);
        match slot {
            TextSlot::Hint => self.hint_text = text,
            TextSlot::Warning => self.warning_text = text,
            TextSlot::LeftIcon => self.left_icon = text,
            TextSlot::RightIcon => self.right_icon = text,
        }
    }

    fn set_visible(&mut self, slot: VisibleSlot, visible: bool, transition: Option<Transition>) -> Option<Cmd> {
        if slot == VisibleSlot::Warning {
            self.warning_visible = visible;
            return None;
        }

        self.hint_visible = visible;
        let target = if visible { 1.0 } else { 0.0 };
        // Any running fade is superseded.
        self.tag += 1;

        match transition {
            Some(transition) if self.hint_opacity != target => {
                tracing::trace!(id = self.id, tag = self.tag, visible, "hint fade started");
                self.fade = Some(Fade {
                    from: self.hint_opacity,
                    to: target,
                    elapsed: Duration::ZERO,
                    transition,
                });
                Some(self.next_frame())
            }
            _ => {
                self.fade = None;
                self.hint_opacity = target;
                None
            }
        }
    }

    fn set_height(&mut self, slot: HeightSlot, height: f64) {
        match slot {
            HeightSlot::Hint => self.hint_height = height,
            HeightSlot::Divider => self.divider_height = height,
            HeightSlot::Container => self.container_height = height,
        }
    }

    fn set_margin(&mut self, edge: Edge, margin: f64) {
        match edge {
            Edge::Leading => self.leading_margin = margin,
            Edge::Trailing => self.trailing_margin = margin,
        }
    }

    fn measure_text_height(&self, text: &str, width: f64) -> f64 {
        let columns = if width.is_finite() && width > 0.0 {
            width as usize
        } else {
            0
        };
        wrap(text, columns).len() as f64 * ROW_HEIGHT
    }

    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let frame = msg.downcast_ref::<HintFrameMsg>()?;
        if frame.id != self.id || frame.tag != self.tag {
            return None;
        }
        let fade = self.fade.as_mut()?;

        fade.elapsed += Duration::from_nanos(1_000_000_000 / FPS);
        let progress = fade.transition.progress(fade.elapsed);
        self.hint_opacity = fade.from + (fade.to - fade.from) * progress;

        if fade.elapsed >= fade.transition.total() {
            self.hint_opacity = fade.to;
            self.fade = None;
            tracing::trace!(id = self.id, "hint fade finished");
            return None;
        }
        Some(self.next_frame())
    }
}

fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - used))
    }
}

/// Word-wraps plain text to `width` cells. Words wider than a line are split.
/// A width of 0 only breaks at newlines.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let plain = strip_ansi_escapes::strip_str(text);
    let mut lines = Vec::new();

    for paragraph in plain.split('\n') {
        if width == 0 {
            lines.push(paragraph.to_string());
            continue;
        }

        let mut line = String::new();
        for word in paragraph.split(' ') {
            let needed = if line.is_empty() {
                word.width()
            } else {
                line.width() + 1 + word.width()
            };
            if needed <= width {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if !line.is_empty() && line.width() + w > width {
                    lines.push(std::mem::take(&mut line));
                }
                line.push(ch);
            }
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floatinginput::HINT_TRANSITION;

    fn frame(r: &TerminalRenderer) -> Msg {
        Box::new(HintFrameMsg { id: r.id, tag: r.tag })
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("short", 20), vec!["short"]);
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("a\nb", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_measure_in_rows() {
        let r = TerminalRenderer::new();
        assert_eq!(r.measure_text_height("fits", 40.0), ROW_HEIGHT);
        assert_eq!(r.measure_text_height("one two three", 7.0), 2.0 * ROW_HEIGHT);
        assert_eq!(r.measure_text_height("no wrap at all here", 0.0), ROW_HEIGHT);
    }

    #[test]
    fn test_immediate_visibility() {
        let mut r = TerminalRenderer::new();
        assert!(r.set_visible(VisibleSlot::Hint, true, None).is_none());
        assert_eq!(r.hint_opacity(), 1.0);
        assert!(r.is_visible(VisibleSlot::Hint));
    }

    #[test]
    fn test_fade_runs_to_completion() {
        let mut r = TerminalRenderer::new();
        assert!(r.set_visible(VisibleSlot::Hint, true, Some(HINT_TRANSITION)).is_some());
        assert!(r.is_animating());
        assert_eq!(r.hint_opacity(), 0.0);

        let mut frames = 0;
        while r.update(&frame(&r)).is_some() {
            frames += 1;
            assert!(r.hint_opacity() > 0.0 && r.hint_opacity() <= 1.0);
            assert!(frames < 30, "fade never finished");
        }
        assert_eq!(r.hint_opacity(), 1.0);
        assert!(!r.is_animating());
        // 300ms at 60fps.
        assert!((17..=19).contains(&frames));
    }

    #[test]
    fn test_new_transition_supersedes_old_frames() {
        let mut r = TerminalRenderer::new();
        let _ = r.set_visible(VisibleSlot::Hint, true, Some(HINT_TRANSITION));
        let stale = frame(&r);
        r.update(&frame(&r));
        let midway = r.hint_opacity();

        let _ = r.set_visible(VisibleSlot::Hint, false, Some(HINT_TRANSITION));
        assert!(r.update(&stale).is_none());
        assert_eq!(r.hint_opacity(), midway);

        while r.update(&frame(&r)).is_some() {}
        assert_eq!(r.hint_opacity(), 0.0);
        assert!(!r.is_visible(VisibleSlot::Hint));
    }

    #[test]
    fn test_frames_for_other_renderers_are_ignored() {
        let mut a = TerminalRenderer::new();
        let b = TerminalRenderer::new();
        let _ = a.set_visible(VisibleSlot::Hint, true, Some(HINT_TRANSITION));
        let foreign: Msg = Box::new(HintFrameMsg { id: b.id, tag: a.tag });
        assert!(a.update(&foreign).is_none());
        assert_eq!(a.hint_opacity(), 0.0);
    }

    #[test]
    fn test_render_rows() {
        let mut r = TerminalRenderer::new();
        r.set_height(HeightSlot::Hint, 15.0);
        r.set_text(TextSlot::Hint, Some("Email"));
        let _ = r.set_visible(VisibleSlot::Hint, true, None);
        r.set_text(TextSlot::Warning, Some("Required"));
        let _ = r.set_visible(VisibleSlot::Warning, true, None);
        r.set_margin(Edge::Leading, 48.0);
        r.set_text(TextSlot::LeftIcon, Some("@"));

        let out = strip_ansi_escapes::strip_str(r.render("ray", 10));
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].trim_end(), "  Email");
        assert_eq!(rows[1].trim_end(), "@ ray");
        assert_eq!(rows[2], "─".repeat(10));
        assert_eq!(rows[3].trim_end(), "Required");
    }

    #[test]
    fn test_warning_wraps_at_measured_width() {
        let mut r = TerminalRenderer::new();
        r.set_text(TextSlot::Warning, Some("this field is required"));
        let _ = r.set_visible(VisibleSlot::Warning, true, None);

        for width in [0, 10] {
            let out = strip_ansi_escapes::strip_str(r.render("ab", width));
            let drawn = out.split('\n').count() - 2;
            let measured = r.measure_text_height("this field is required", width as f64);
            assert_eq!(drawn as f64 * ROW_HEIGHT, measured, "width {width}");
        }
    }

    #[test]
    fn test_styled_field_measured_by_visible_width() {
        let r = TerminalRenderer::new();
        let field = Style::new().foreground(Color::from("#ff0000")).render("abc");
        let out = strip_ansi_escapes::strip_str(r.render(&field, 6));
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows[0].trim_end(), "abc");
        assert_eq!(rows[1], "─".repeat(6));
    }

    #[test]
    fn test_render_without_hint_row() {
        let r = TerminalRenderer::new();
        let out = strip_ansi_escapes::strip_str(r.render("abc", 0));
        assert_eq!(out.split('\n').count(), 2);
    }

    #[test]
    fn test_thick_divider() {
        let mut r = TerminalRenderer::new();
        r.set_height(HeightSlot::Divider, 2.0);
        let out = strip_ansi_escapes::strip_str(r.render("abc", 0));
        assert!(out.contains("━━━"));
    }
}
