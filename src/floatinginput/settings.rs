//! Configuration for a floating input.
//!
//! [`Settings`] bundles every visual and behavioral parameter of one widget.
//! Build it with the `with_*` methods and hand it to
//! [`Model::configure`](super::Model::configure); replacing it re-derives all
//! visual state.
//!
//! Colors are lipgloss color strings: `"#RRGGBB"` or an ANSI code such as `"240"`.
//! Icons are short glyph strings drawn beside the field.
//!
//! ```rust
//! use floating_input::floatinginput::{InputType, InputViolation, Settings};
//!
//! let settings = Settings::new()
//!     .with_placeholder("Phone")
//!     .with_icon("☎")
//!     .with_max_length(15)
//!     .with_input_type(InputType::Phone)
//!     .with_input_type_violation(InputViolation::new("Digits only"))
//!     .with_max_length_violation(InputViolation::new("Too long"));
//! assert_eq!(settings.max_length, Some(15));
//! ```

use super::validation::{InputType, ViolationStatus};
use crate::textfield::KeyboardType;
use std::fmt;
use std::sync::Arc;

/// Called when the widget enters a violated state.
pub type ViolationCallback = Arc<dyn Fn() + Send + Sync>;

/// The message and optional callback for one kind of violation.
#[derive(Clone)]
pub struct InputViolation {
    /// Shown in the warning area while the violation holds.
    pub message: String,
    /// Invoked once each time the widget enters this violation.
    pub callback: Option<ViolationCallback>,
}

impl InputViolation {
    /// A violation with a message and no callback.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            callback: None,
        }
    }

    /// Attaches a callback.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for InputViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputViolation")
            .field("message", &self.message)
            .field("callback", &self.callback.as_ref().map(|_| ".."))
            .finish()
    }
}

/// What the validation pipeline does with a manually triggered warning once
/// the text validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManualWarningPolicy {
    /// Manual warnings stay until cleared with `trigger_warning(None)` or
    /// replaced by a violation.
    #[default]
    Persist,
    /// Any valid evaluation clears a manual warning.
    ClearOnValid,
}

/// Every visual and behavioral parameter of a floating input.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Fill behind the whole widget.
    pub background_color: Option<String>,
    /// Glyph left of the field. Reserves the icon margin when present.
    pub icon_image: Option<String>,
    /// Glyph right of the field. Reserves the icon margin when present.
    pub right_icon_image: Option<String>,
    /// Color of the typed text.
    pub text_color: Option<String>,
    /// Color of the cursor block.
    pub cursor_color: Option<String>,
    /// Thickness of the divider in layout units.
    pub divider_height: f64,
    /// Placeholder in the empty field, also used as the floating hint text.
    pub placeholder: Option<String>,
    /// Masks the text. `None` means not secure.
    pub is_secure: Option<bool>,
    /// Color of the placeholder.
    pub placeholder_color: String,
    /// Which typed characters the field accepts.
    pub keyboard_type: KeyboardType,
    /// Divider color while unfocused.
    pub divider_color: String,
    /// Hint color while unfocused.
    pub hint_color: String,
    /// Hint color while focused.
    pub hint_accent_color: String,
    /// Divider color while focused.
    pub divider_accent_color: String,
    /// Hint, divider and warning text color while a warning is raised.
    pub warning_color: String,
    /// Warning to show as soon as the settings are applied. Cleared when the
    /// pipeline clears the warning.
    pub warning: Option<String>,
    /// Longest valid text, in grapheme clusters.
    pub max_length: Option<usize>,
    /// What the text may contain.
    pub input_type: Option<InputType>,
    /// Reserves the hint row above the field.
    pub show_hint: bool,
    /// Reported while the text fails `input_type`.
    pub input_type_violation: Option<InputViolation>,
    /// Reported while the text exceeds `max_length`.
    pub max_length_violation: Option<InputViolation>,
    /// Fate of manual warnings on valid text.
    pub manual_warning_policy: ManualWarningPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_color: None,
            icon_image: None,
            right_icon_image: None,
            text_color: None,
            cursor_color: None,
            divider_height: 1.0,
            placeholder: None,
            is_secure: None,
            placeholder_color: "240".to_string(),
            keyboard_type: KeyboardType::Default,
            divider_color: "240".to_string(),
            hint_color: "245".to_string(),
            hint_accent_color: "#2196F3".to_string(),
            divider_accent_color: "#2196F3".to_string(),
            warning_color: "#E53935".to_string(),
            warning: None,
            max_length: None,
            input_type: None,
            show_hint: true,
            input_type_violation: None,
            max_length_violation: None,
            manual_warning_policy: ManualWarningPolicy::Persist,
        }
    }
}

impl Settings {
    /// Default palette, no constraints, hint row shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background fill.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the left icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon_image = Some(icon.into());
        self
    }

    /// Sets the right icon.
    pub fn with_right_icon(mut self, icon: impl Into<String>) -> Self {
        self.right_icon_image = Some(icon.into());
        self
    }

    /// Sets the text color.
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Sets the cursor color.
    pub fn with_cursor_color(mut self, color: impl Into<String>) -> Self {
        self.cursor_color = Some(color.into());
        self
    }

    /// Sets the divider thickness.
    pub fn with_divider_height(mut self, height: f64) -> Self {
        self.divider_height = height;
        self
    }

    /// Sets the placeholder and hint text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Masks the text.
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.is_secure = Some(secure);
        self
    }

    /// Sets the placeholder color.
    pub fn with_placeholder_color(mut self, color: impl Into<String>) -> Self {
        self.placeholder_color = color.into();
        self
    }

    /// Sets the keyboard type.
    pub fn with_keyboard_type(mut self, keyboard_type: KeyboardType) -> Self {
        self.keyboard_type = keyboard_type;
        self
    }

    /// Sets the unfocused and focused divider colors.
    pub fn with_divider_colors(mut self, base: impl Into<String>, accent: impl Into<String>) -> Self {
        self.divider_color = base.into();
        self.divider_accent_color = accent.into();
        self
    }

    /// Sets the unfocused and focused hint colors.
    pub fn with_hint_colors(mut self, base: impl Into<String>, accent: impl Into<String>) -> Self {
        self.hint_color = base.into();
        self.hint_accent_color = accent.into();
        self
    }

    /// Sets the warning color.
    pub fn with_warning_color(mut self, color: impl Into<String>) -> Self {
        self.warning_color = color.into();
        self
    }

    /// Sets the warning shown when the settings are applied.
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    /// Sets the maximum length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the input type.
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    /// Shows or collapses the hint row.
    pub fn with_show_hint(mut self, show_hint: bool) -> Self {
        self.show_hint = show_hint;
        self
    }

    /// Sets the input type violation.
    pub fn with_input_type_violation(mut self, violation: InputViolation) -> Self {
        self.input_type_violation = Some(violation);
        self
    }

    /// Sets the max length violation.
    pub fn with_max_length_violation(mut self, violation: InputViolation) -> Self {
        self.max_length_violation = Some(violation);
        self
    }

    /// Sets the manual warning policy.
    pub fn with_manual_warning_policy(mut self, policy: ManualWarningPolicy) -> Self {
        self.manual_warning_policy = policy;
        self
    }

    /// Replaces the pending warning after construction.
    pub fn set_warning(&mut self, warning: Option<String>) {
        self.warning = warning;
    }

    /// Whether the text is masked.
    pub fn secure(&self) -> bool {
        self.is_secure.unwrap_or(false)
    }

    /// The violation configured for `status`, if any.
    pub fn violation_for(&self, status: ViolationStatus) -> Option<&InputViolation> {
        match status {
            ViolationStatus::Valid => None,
            ViolationStatus::InputTypeViolated => self.input_type_violation.as_ref(),
            ViolationStatus::MaxLengthViolated => self.max_length_violation.as_ref(),
        }
    }
}
