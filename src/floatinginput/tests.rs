//! Tests for the floating input widget.

use super::*;
use crate::textfield::KeyboardType;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Remembers everything pushed to it.
#[derive(Default)]
struct Recording {
    colors: HashMap<ColorSlot, Option<String>>,
    texts: HashMap<TextSlot, Option<String>>,
    visible: HashMap<VisibleSlot, bool>,
    hint_changes: Vec<(bool, Option<Transition>)>,
    heights: HashMap<HeightSlot, f64>,
    margins: HashMap<Edge, f64>,
    row_height: f64,
}

impl Recording {
    fn with_row_height(row_height: f64) -> Self {
        Self {
            row_height,
            ..Self::default()
        }
    }

    fn color(&self, slot: ColorSlot) -> Option<&str> {
        self.colors.get(&slot).and_then(|c| c.as_deref())
    }

    fn text(&self, slot: TextSlot) -> Option<&str> {
        self.texts.get(&slot).and_then(|t| t.as_deref())
    }

    fn height(&self, slot: HeightSlot) -> f64 {
        self.heights.get(&slot).copied().unwrap_or(-1.0)
    }

    fn margin(&self, edge: Edge) -> f64 {
        self.margins.get(&edge).copied().unwrap_or(-1.0)
    }
}

impl Renderer for Recording {
    fn set_color(&mut self, slot: ColorSlot, color: Option<&str>) {
        self.colors.insert(slot, color.map(str::to_string));
    }

    fn set_text(&mut self, slot: TextSlot, text: Option<&str>) {
        self.texts.insert(slot, text.map(str::to_string));
    }

    fn set_visible(&mut self, slot: VisibleSlot, visible: bool, transition: Option<Transition>) -> Option<Cmd> {
        if slot == VisibleSlot::Hint {
            self.hint_changes.push((visible, transition));
        }
        self.visible.insert(slot, visible);
        None
    }

    fn set_height(&mut self, slot: HeightSlot, height: f64) {
        self.heights.insert(slot, height);
    }

    fn set_margin(&mut self, edge: Edge, margin: f64) {
        self.margins.insert(edge, margin);
    }

    fn measure_text_height(&self, _text: &str, _width: f64) -> f64 {
        self.row_height
    }
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn typed<R: Renderer>(input: &mut Model<R>, text: &str) {
    for ch in text.chars() {
        let _ = input.update(key(KeyCode::Char(ch)));
    }
}

fn palette() -> Settings {
    Settings::new()
        .with_placeholder("Nickname")
        .with_hint_colors("hint", "hint-accent")
        .with_divider_colors("divider", "divider-accent")
        .with_warning_color("warn")
}

fn recorded(settings: Settings) -> Model<Recording> {
    let mut input = Model::with_renderer(Recording::with_row_height(15.0));
    input.configure(settings);
    input
}

#[test]
fn test_height_without_warning() {
    let settings = palette()
        .with_max_length(10)
        .with_input_type(InputType::Any)
        .with_show_hint(false);
    let mut input = recorded(settings.clone());
    input.set_text("hello");
    assert_eq!(input.status(), ViolationStatus::Valid);
    assert_eq!(input.container_height(), 31.0);
    assert_eq!(input.hint_height(), 0.0);
    assert_eq!(input.renderer().height(HeightSlot::Hint), 0.0);
    assert_eq!(input.renderer().height(HeightSlot::Container), 31.0);

    input.configure(settings.with_show_hint(true));
    assert_eq!(input.container_height(), 46.0);
    assert_eq!(input.hint_height(), 15.0);
    assert_eq!(input.renderer().height(HeightSlot::Hint), 15.0);
}

#[test]
fn test_height_with_warning_floors_measurement() {
    let mut input = Model::with_renderer(Recording::with_row_height(14.6));
    input.configure(palette());
    input.trigger_warning(Some("Required"));
    assert_eq!(input.container_height(), 46.0 + 14.0 + 3.0);
    assert_eq!(input.renderer().height(HeightSlot::Container), 63.0);

    input.trigger_warning(None);
    assert_eq!(input.container_height(), 46.0);
}

#[test]
fn test_max_length_violation_switches_to_warning() {
    let mut input = recorded(
        palette()
            .with_max_length(5)
            .with_max_length_violation(InputViolation::new("Too long")),
    );
    input.set_text("hello world");

    assert_eq!(input.status(), ViolationStatus::MaxLengthViolated);
    assert_eq!(input.warning_message(), Some("Too long"));
    let r = input.renderer();
    assert_eq!(r.color(ColorSlot::Hint), Some("warn"));
    assert_eq!(r.color(ColorSlot::Divider), Some("warn"));
    assert_eq!(r.text(TextSlot::Warning), Some("Too long"));
    assert_eq!(r.visible.get(&VisibleSlot::Warning), Some(&true));
    assert_eq!(input.container_height(), 46.0 + 15.0 + 3.0);
}

#[test]
fn test_input_type_violation_without_message() {
    let mut input = recorded(palette().with_input_type(InputType::Number));
    input.set_text("12a");
    assert_eq!(input.status(), ViolationStatus::InputTypeViolated);
    assert!(input.warning_message().is_none());
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("warn"));
    assert_eq!(input.container_height(), 46.0);
}

#[test]
fn test_callback_fires_once_per_transition() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let mut input = recorded(palette().with_max_length(3).with_max_length_violation(
        InputViolation::new("Too long").with_callback(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    ));
    let _ = input.focus();

    typed(&mut input, "abcdef");
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    for _ in 0..3 {
        let _ = input.update(key(KeyCode::Backspace));
    }
    assert_eq!(input.status(), ViolationStatus::Valid);
    assert!(input.warning_message().is_none());

    typed(&mut input, "x");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn test_violation_at_configure_fires_callback() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let mut input = recorded(palette());
    input.set_text("hello world");
    input.configure(palette().with_max_length(5).with_max_length_violation(
        InputViolation::new("Too long").with_callback(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    ));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(input.warning_message(), Some("Too long"));
}

#[test]
fn test_clearing_warning_restores_focus_colors() {
    let mut input = recorded(palette());
    input.trigger_warning(Some("Required"));
    assert_eq!(input.renderer().color(ColorSlot::Hint), Some("warn"));

    input.trigger_warning(None);
    assert!(input.warning_message().is_none());
    assert_eq!(input.renderer().color(ColorSlot::Hint), Some("hint"));
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("divider"));
    assert_eq!(input.renderer().text(TextSlot::Warning), None);

    let _ = input.focus();
    input.trigger_warning(Some("Required"));
    input.trigger_warning(None);
    assert_eq!(input.renderer().color(ColorSlot::Hint), Some("hint-accent"));
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("divider-accent"));
}

#[test]
fn test_focus_switches_accent_colors() {
    let mut input = recorded(palette());
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("divider"));
    let _ = input.focus();
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("divider-accent"));
    input.blur();
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("divider"));
}

#[test]
fn test_manual_warning_persists_through_valid_text() {
    let mut input = recorded(palette().with_max_length(10));
    let _ = input.focus();
    input.trigger_warning(Some("Required"));
    typed(&mut input, "abc");
    assert_eq!(input.status(), ViolationStatus::Valid);
    assert_eq!(input.warning_message(), Some("Required"));
}

#[test]
fn test_manual_warning_cleared_on_valid_when_configured() {
    let mut input = recorded(
        palette()
            .with_warning("Required")
            .with_manual_warning_policy(ManualWarningPolicy::ClearOnValid),
    );
    assert_eq!(input.warning_message(), Some("Required"));
    assert_eq!(input.settings().warning.as_deref(), Some("Required"));

    let _ = input.focus();
    typed(&mut input, "a");
    assert!(input.warning_message().is_none());
    assert!(input.settings().warning.is_none());
    assert_eq!(input.renderer().color(ColorSlot::Hint), Some("hint-accent"));
}

#[test]
fn test_initial_warning_is_shown() {
    let input = recorded(palette().with_warning("Required"));
    assert_eq!(input.warning_message(), Some("Required"));
    assert_eq!(input.renderer().text(TextSlot::Warning), Some("Required"));
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("warn"));
}

#[test]
fn test_violation_replaces_manual_warning() {
    let mut input = recorded(
        palette()
            .with_max_length(2)
            .with_max_length_violation(InputViolation::new("Too long")),
    );
    input.trigger_warning(Some("Required"));
    input.set_text("abc");
    assert_eq!(input.warning_message(), Some("Too long"));
    input.set_text("ab");
    assert!(input.warning_message().is_none());
}

#[test]
fn test_hint_animates_only_on_change() {
    let mut input = recorded(palette());
    assert_eq!(input.renderer().hint_changes.last(), Some(&(false, None)));
    let before = input.renderer().hint_changes.len();

    let _ = input.focus();
    assert_eq!(input.hint_visibility(), HintVisibility::Visible);
    assert_eq!(
        input.renderer().hint_changes.last(),
        Some(&(true, Some(HINT_TRANSITION)))
    );
    assert_eq!(input.renderer().text(TextSlot::Hint), Some("Nickname"));

    typed(&mut input, "abc");
    assert_eq!(input.renderer().hint_changes.len(), before + 1);

    input.set_text("");
    input.blur();
    assert_eq!(input.hint_visibility(), HintVisibility::Hidden);
    assert_eq!(
        input.renderer().hint_changes.last(),
        Some(&(false, Some(HINT_TRANSITION)))
    );
    assert_eq!(input.renderer().hint_changes.len(), before + 2);
}

#[test]
fn test_hint_stays_visible_with_text_after_blur() {
    let mut input = recorded(palette());
    input.set_text("abc");
    assert_eq!(input.hint_visibility(), HintVisibility::Visible);
    let _ = input.focus();
    input.blur();
    assert_eq!(input.hint_visibility(), HintVisibility::Visible);
}

#[test]
fn test_icons_reserve_margins() {
    let mut input = recorded(palette().with_icon("@"));
    assert_eq!(input.renderer().margin(Edge::Leading), ICON_MARGIN);
    assert_eq!(input.renderer().margin(Edge::Trailing), 0.0);
    assert_eq!(input.renderer().text(TextSlot::LeftIcon), Some("@"));

    input.set_right_icon(Some("x"));
    assert_eq!(input.renderer().margin(Edge::Trailing), 48.0);
    assert_eq!(input.right_icon(), Some("x"));

    input.set_left_icon(None);
    assert_eq!(input.renderer().margin(Edge::Leading), 0.0);
    assert!(input.left_icon().is_none());
    // Other state is untouched.
    assert_eq!(input.settings().placeholder.as_deref(), Some("Nickname"));
}

#[test]
fn test_icons_narrow_the_field() {
    let mut input = recorded(palette().with_icon("@").with_right_icon("x"));
    input.set_width(20);
    assert_eq!(input.text_field().width, 16);
}

#[test]
fn test_resign_first_responder() {
    let mut input = recorded(palette());
    assert!(!input.resign_first_responder());
    let _ = input.focus();
    assert!(input.focused());
    assert!(input.resign_first_responder());
    assert!(!input.focused());
    assert!(!input.resign_first_responder());
}

#[test]
fn test_text_accessor() {
    let mut input = recorded(palette());
    assert!(input.text().is_none());
    let _ = input.focus();
    typed(&mut input, "hi");
    assert_eq!(input.text().as_deref(), Some("hi"));
}

#[test]
fn test_disabled_input_ignores_typing() {
    let mut input = recorded(palette());
    let _ = input.focus();
    input.set_enabled(false);
    assert!(!input.enabled());
    typed(&mut input, "hi");
    assert!(input.text().is_none());
    input.set_enabled(true);
    typed(&mut input, "hi");
    assert_eq!(input.text().as_deref(), Some("hi"));
}

#[test]
fn test_keyboard_type_filters_typing() {
    let mut input = recorded(palette().with_keyboard_type(KeyboardType::NumberPad));
    let _ = input.focus();
    typed(&mut input, "1a2");
    assert_eq!(input.text().as_deref(), Some("12"));
}

#[test]
fn test_secure_setting_masks_text() {
    let mut input = new();
    input.configure(Settings::new().with_secure(true));
    input.set_text("secret");
    let view = strip_ansi_escapes::strip_str(input.view());
    assert!(view.contains("******"));
    assert!(!view.contains("secret"));
}

#[tokio::test]
async fn test_view_shows_hint_and_warning() {
    let mut input = new();
    input.configure(
        Settings::new()
            .with_placeholder("Email")
            .with_icon("@")
            .with_max_length(3)
            .with_max_length_violation(InputViolation::new("Too long")),
    );
    input.set_width(24);
    input.set_text("abcd");

    // Play the hint fade to the end.
    let mut cmd = input.take_deferred_cmd();
    let mut frames = 0;
    while let Some(next) = cmd {
        frames += 1;
        assert!(frames < 60, "fade never finished");
        cmd = match next.await {
            Some(msg) => input.update(msg),
            None => None,
        };
    }
    assert_eq!(input.renderer().hint_opacity(), 1.0);

    let view = strip_ansi_escapes::strip_str(input.view());
    let rows: Vec<&str> = view.split('\n').collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[0].contains("Email"));
    assert!(rows[1].starts_with("@ abcd"));
    assert!(rows[2].starts_with('─'));
    assert!(rows[3].contains("Too long"));
}

#[test]
fn test_violation_colors_hold_through_focus_changes() {
    let mut input = recorded(
        palette()
            .with_max_length(3)
            .with_max_length_violation(InputViolation::new("Too long")),
    );
    input.set_text("abcdef");
    assert_eq!(input.status(), ViolationStatus::MaxLengthViolated);

    let _ = input.focus();
    assert_eq!(input.status(), ViolationStatus::MaxLengthViolated);
    assert_eq!(input.renderer().color(ColorSlot::Hint), Some("warn"));
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("warn"));

    input.blur();
    assert_eq!(input.status(), ViolationStatus::MaxLengthViolated);
    assert_eq!(input.warning_message(), Some("Too long"));
    assert_eq!(input.renderer().color(ColorSlot::Hint), Some("warn"));
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("warn"));

    // Once the text is valid again the colors follow focus.
    input.set_text("ab");
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("divider"));
    let _ = input.focus();
    assert_eq!(input.renderer().color(ColorSlot::Hint), Some("hint-accent"));
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("divider-accent"));
}

#[test]
fn test_text_field_edits_are_validated_on_next_update() {
    let mut input = recorded(
        palette()
            .with_max_length(5)
            .with_max_length_violation(InputViolation::new("Too long")),
    );
    input.set_text("hello world");
    assert_eq!(input.status(), ViolationStatus::MaxLengthViolated);

    input.text_field_mut().reset();
    let _ = input.update(Box::new(()));
    assert_eq!(input.status(), ViolationStatus::Valid);
    assert!(input.warning_message().is_none());
    assert_eq!(input.renderer().color(ColorSlot::Divider), Some("divider"));
    assert_eq!(input.renderer().text(TextSlot::Warning), None);
}

/// Rows drawn below the divider.
fn warning_rows(view: &str) -> usize {
    let rows: Vec<&str> = view.split('\n').collect();
    let divider = rows
        .iter()
        .position(|row| row.starts_with('─'))
        .expect("divider row");
    rows.len() - divider - 1
}

#[test]
fn test_container_height_matches_drawn_warning() {
    for (width, expected_rows) in [(0, 1), (10, 3), (40, 1)] {
        let mut input = new();
        input.configure(Settings::new().with_placeholder("Name"));
        input.set_width(width);
        input.set_text("ab");
        input.trigger_warning(Some("this field is required"));

        let view = strip_ansi_escapes::strip_str(input.view());
        let rows = warning_rows(&view);
        assert_eq!(rows, expected_rows, "width {width}");
        assert_eq!(
            input.container_height(),
            46.0 + rows as f64 * ROW_HEIGHT + 3.0,
            "width {width}"
        );
    }
}

#[tokio::test]
async fn test_only_latest_hint_fade_is_kept() {
    let mut input = new();
    input.configure(Settings::new().with_placeholder("Name"));
    input.set_text("a");
    input.set_text("");
    input.set_text("a");

    let cmd = input.take_deferred_cmd().expect("pending fade");
    assert!(input.take_deferred_cmd().is_none());

    let msg = cmd.await.expect("frame");
    assert!(msg.is::<HintFrameMsg>());

    let mut cmd = input.update(msg);
    let mut frames = 1;
    while let Some(next) = cmd {
        frames += 1;
        assert!(frames < 60, "fade never finished");
        cmd = match next.await {
            Some(msg) => input.update(msg),
            None => None,
        };
    }
    assert_eq!(input.renderer().hint_opacity(), 1.0);
    assert!(input.renderer().is_visible(VisibleSlot::Hint));
}
