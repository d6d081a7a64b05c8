//! The floating input widget.

use super::binder::{self, Binder, VisualState, HINT_TRANSITION, ICON_MARGIN};
use super::renderer::{ColorSlot, Edge, HeightSlot, Renderer, TextSlot, VisibleSlot};
use super::settings::{Settings, ViolationCallback};
use super::terminal::TerminalRenderer;
use super::validation::{self, HintVisibility, ViolationStatus};
use crate::textfield::{self, EchoMode};
use crate::Component;
use bubbletea_rs::{batch, Cmd, Model as BubbleTeaModel, Msg};
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

/// A text field with a floating hint, a divider, icons and a warning area.
///
/// Text and focus changes re-run validation and push the derived visual state
/// through the renderer. Methods that cannot return a command (such as
/// [`Model::set_text`] or [`Model::blur`]) keep the animation command they
/// start, replacing any older one; it is returned from the next
/// [`Model::update`], or earlier through [`Model::take_deferred_cmd`].
pub struct Model<R: Renderer = TerminalRenderer> {
    settings: Settings,
    field: textfield::Model,
    binder: Binder,
    renderer: R,
    shown: Option<VisualState>,
    width: usize,
    validated: String,
    deferred: Option<Cmd>,
}

/// Creates a floating input drawn by a [`TerminalRenderer`], with default settings.
pub fn new() -> Model {
    Model::with_renderer(TerminalRenderer::new())
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl<R: Renderer> Model<R> {
    /// Creates a floating input drawn by `renderer`, with default settings.
    pub fn with_renderer(renderer: R) -> Self {
        let mut model = Self {
            settings: Settings::default(),
            field: textfield::new(),
            binder: Binder::new(),
            renderer,
            shown: None,
            width: 0,
            validated: String::new(),
            deferred: None,
        };
        model.configure(Settings::default());
        model
    }

    /// Replaces every visual and behavioral parameter.
    ///
    /// Derived state is rebuilt from scratch: icon margins are reserved, the
    /// text is validated again and `settings.warning` is raised when the text
    /// validates. A violation present now fires its callback.
    pub fn configure(&mut self, settings: Settings) {
        debug!(
            placeholder = ?settings.placeholder,
            max_length = ?settings.max_length,
            input_type = ?settings.input_type,
            show_hint = settings.show_hint,
            "configuring floating input"
        );
        self.settings = settings;

        let s = &self.settings;
        self.field.text_color = s.text_color.clone();
        self.field.cursor.set_color(s.cursor_color.as_deref());
        self.field.set_placeholder(s.placeholder.as_deref().unwrap_or(""));
        self.field.placeholder_color = s.placeholder_color.clone();
        self.field.set_echo_mode(if s.secure() {
            EchoMode::EchoPassword
        } else {
            EchoMode::EchoNormal
        });
        self.field.set_keyboard_type(s.keyboard_type);

        self.renderer
            .set_color(ColorSlot::Background, s.background_color.as_deref());
        self.renderer
            .set_color(ColorSlot::Warning, Some(&s.warning_color));
        self.renderer
            .set_text(TextSlot::Hint, s.placeholder.as_deref());
        self.renderer
            .set_height(HeightSlot::Divider, s.divider_height);
        self.apply_icons();

        self.binder.reset();
        self.shown = None;
        let callback = self.validate();
        if !self.binder.status().is_violated() {
            if let Some(warning) = self.settings.warning.clone() {
                self.binder.on_manual(Some(warning));
            }
        }
        let cmd = self.render(false);
        self.defer(cmd);
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Replaces the left icon.
    pub fn set_left_icon(&mut self, icon: Option<&str>) {
        self.settings.icon_image = icon.map(str::to_string);
        self.apply_icons();
    }

    /// Replaces the right icon.
    pub fn set_right_icon(&mut self, icon: Option<&str>) {
        self.settings.right_icon_image = icon.map(str::to_string);
        self.apply_icons();
    }

    /// The left icon.
    pub fn left_icon(&self) -> Option<&str> {
        self.settings.icon_image.as_deref()
    }

    /// The right icon.
    pub fn right_icon(&self) -> Option<&str> {
        self.settings.right_icon_image.as_deref()
    }

    fn apply_icons(&mut self) {
        let left = self.settings.icon_image.as_deref();
        let right = self.settings.right_icon_image.as_deref();
        self.renderer.set_text(TextSlot::LeftIcon, left);
        self.renderer.set_text(TextSlot::RightIcon, right);
        self.renderer
            .set_margin(Edge::Leading, if left.is_some() { ICON_MARGIN } else { 0.0 });
        self.renderer
            .set_margin(Edge::Trailing, if right.is_some() { ICON_MARGIN } else { 0.0 });
        let field_width = self.field_width();
        self.field.set_width(field_width);
    }

    /// Columns left for the text field once the icons are drawn.
    fn field_width(&self) -> usize {
        if self.width == 0 {
            return 0;
        }
        let icon = |glyph: Option<&str>| glyph.map_or(0, |g| g.width() + 1);
        let taken = icon(self.settings.icon_image.as_deref())
            + icon(self.settings.right_icon_image.as_deref());
        self.width.saturating_sub(taken).max(1)
    }

    /// The text, or `None` when empty.
    pub fn text(&self) -> Option<String> {
        if self.field.is_empty() {
            None
        } else {
            Some(self.field.value())
        }
    }

    /// Replaces the text and runs the validation pipeline.
    pub fn set_text(&mut self, text: &str) {
        self.field.set_value(text);
        let cmd = self.refresh();
        self.defer(cmd);
    }

    /// Enables or disables editing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.field.set_enabled(enabled);
    }

    /// Whether editing is enabled.
    pub fn enabled(&self) -> bool {
        self.field.enabled()
    }

    /// Raises a manual warning, or clears whatever warning is shown.
    ///
    /// Validation is not consulted. Clearing restores the accent colors when
    /// focused and the base colors otherwise, and forgets `settings.warning`.
    /// A later violation replaces a manual warning.
    pub fn trigger_warning(&mut self, message: Option<&str>) {
        match message {
            Some(warning) => debug!(warning, "warning raised"),
            None => {
                debug!("warning cleared");
                self.settings.warning = None;
            }
        }
        self.binder.on_manual(message.map(str::to_string));
        let cmd = self.render(true);
        self.defer(cmd);
    }

    /// Gives up input focus. Returns `true` only when focus was held and is
    /// now released.
    pub fn resign_first_responder(&mut self) -> bool {
        if !self.field.focused() {
            return false;
        }
        self.blur();
        !self.field.focused()
    }

    /// Takes input focus.
    pub fn focus(&mut self) -> Option<Cmd> {
        trace!("floating input focused");
        let mut cmds: Vec<Cmd> = self.field.focus().into_iter().collect();
        cmds.extend(self.render(true));
        combine(cmds)
    }

    /// Drops input focus.
    pub fn blur(&mut self) {
        trace!("floating input blurred");
        self.field.blur();
        let cmd = self.render(true);
        self.defer(cmd);
    }

    /// Whether the field has input focus.
    pub fn focused(&self) -> bool {
        self.field.focused()
    }

    /// Sets the widget width in columns; 0 sizes it to the text.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        let field_width = self.field_width();
        self.field.set_width(field_width);
        let cmd = self.render(false);
        self.defer(cmd);
    }

    /// The widget width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Handles key input, clipboard results, cursor blinks and hint frames.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = self.deferred.take().into_iter().collect();
        let was_focused = self.field.focused();

        cmds.extend(self.renderer.update(&msg));
        cmds.extend(self.field.update(msg));

        if self.field.value() != self.validated {
            cmds.extend(self.refresh());
        } else if self.field.focused() != was_focused {
            cmds.extend(self.render(true));
        }
        combine(cmds)
    }

    /// Commands started by methods that could not return them.
    pub fn take_deferred_cmd(&mut self) -> Option<Cmd> {
        self.deferred.take()
    }

    /// The settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The wrapped text field.
    pub fn text_field(&self) -> &textfield::Model {
        &self.field
    }

    /// The wrapped text field, mutably. Text changed here is validated on the
    /// next [`Model::update`], whatever the message.
    pub fn text_field_mut(&mut self) -> &mut textfield::Model {
        &mut self.field
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The validation status of the current text.
    pub fn status(&self) -> ViolationStatus {
        self.binder.status()
    }

    /// Whether the hint floats above the field.
    pub fn hint_visibility(&self) -> HintVisibility {
        HintVisibility::derive(&self.field.value(), self.field.focused())
    }

    /// The warning shown, if any.
    pub fn warning_message(&self) -> Option<&str> {
        self.binder.alert().message()
    }

    /// Height of the hint row.
    pub fn hint_height(&self) -> f64 {
        binder::hint_height(self.settings.show_hint)
    }

    /// Height of the whole widget.
    pub fn container_height(&self) -> f64 {
        self.shown.as_ref().map_or_else(
            || binder::container_height(self.settings.show_hint, None),
            |state| state.container_height,
        )
    }

    /// Validates the text, renders, then runs a callback for a new violation.
    fn refresh(&mut self) -> Option<Cmd> {
        let callback = self.validate();
        let cmd = self.render(true);
        if let Some(callback) = callback {
            callback();
        }
        cmd
    }

    fn validate(&mut self) -> Option<ViolationCallback> {
        let text = self.field.value();
        let status = validation::evaluate(
            &text,
            self.settings.max_length,
            self.settings.input_type.as_ref(),
        );
        self.validated = text;
        let previous = self.binder.status();
        let outcome = self.binder.on_status(status, &self.settings);
        if status != previous {
            debug!(?previous, ?status, "validation status changed");
        }
        if outcome.cleared && self.settings.warning.take().is_some() {
            debug!("configured warning cleared by valid text");
        }
        outcome.callback
    }

    /// Derives the visual state and pushes what changed to the renderer.
    fn render(&mut self, animate: bool) -> Option<Cmd> {
        let text = self.field.value();
        let focused = self.field.focused();
        let width = self.width as f64;
        let renderer = &self.renderer;
        let next = binder::derive(&self.settings, self.binder.alert(), &text, focused, |warning| {
            renderer.measure_text_height(warning, width)
        });

        let previous = self.shown.take();
        let mut cmds = Vec::new();

        let visibility_changed = previous
            .as_ref()
            .map_or(true, |p| p.hint_visibility != next.hint_visibility);
        if visibility_changed {
            let transition = (animate && previous.is_some()).then_some(HINT_TRANSITION);
            cmds.extend(self.renderer.set_visible(
                VisibleSlot::Hint,
                next.hint_visibility.is_visible(),
                transition,
            ));
        }
        // Keep the old hint text while it fades out.
        if let Some(hint) = next.hint_text.as_deref() {
            self.renderer.set_text(TextSlot::Hint, Some(hint));
        }

        if previous.as_ref().map_or(true, |p| p.hint_color != next.hint_color) {
            self.renderer.set_color(ColorSlot::Hint, Some(&next.hint_color));
        }
        if previous.as_ref().map_or(true, |p| p.divider_color != next.divider_color) {
            self.renderer.set_color(ColorSlot::Divider, Some(&next.divider_color));
        }
        if previous.as_ref().map_or(true, |p| p.warning_text != next.warning_text) {
            self.renderer.set_text(TextSlot::Warning, next.warning_text.as_deref());
            cmds.extend(self.renderer.set_visible(
                VisibleSlot::Warning,
                next.warning_text.is_some(),
                None,
            ));
        }
        self.renderer.set_height(HeightSlot::Hint, next.hint_height);
        self.renderer.set_height(HeightSlot::Container, next.container_height);

        self.shown = Some(next);
        combine(cmds)
    }

    /// Keeps only the newest animation; older fades would be dropped as stale
    /// frames anyway.
    fn defer(&mut self, cmd: Option<Cmd>) {
        if cmd.is_some() {
            self.deferred = cmd;
        }
    }
}

impl Model<TerminalRenderer> {
    /// Renders the widget.
    pub fn view(&self) -> String {
        self.renderer.render(&self.field.view(), self.width)
    }
}

fn combine(mut cmds: Vec<Cmd>) -> Option<Cmd> {
    match cmds.len() {
        0 => None,
        1 => cmds.pop(),
        _ => Some(batch(cmds)),
    }
}

impl<R: Renderer> Component for Model<R> {
    fn focus(&mut self) -> Option<Cmd> {
        Self::focus(self)
    }

    fn blur(&mut self) {
        Self::blur(self)
    }

    fn focused(&self) -> bool {
        Self::focused(self)
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
