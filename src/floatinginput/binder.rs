//! Visual state binder.
//!
//! One state machine owns the warning, whether it came from validation or from
//! [`trigger_warning`](super::Model::trigger_warning). Everything the widget
//! shows (hint and divider colors, warning text, hint visibility, heights) is
//! derived from that state plus the text, focus and settings, so the two
//! paths can never leave the colors disagreeing with the label.

use super::renderer::{Curve, Transition};
use super::settings::{ManualWarningPolicy, Settings, ViolationCallback};
use super::validation::{HintVisibility, ViolationStatus};
use std::time::Duration;

/// Height of the hint row when shown.
pub const HINT_HEIGHT: f64 = 15.0;
/// Widget height with the hint row and no warning.
pub const BASE_HEIGHT_WITH_HINT: f64 = 46.0;
/// Widget height without the hint row and no warning.
pub const BASE_HEIGHT: f64 = 31.0;
/// Added below a measured warning.
pub const WARNING_PADDING: f64 = 3.0;
/// Margin reserved beside the field for an icon.
pub const ICON_MARGIN: f64 = 48.0;

/// How the hint fades in and out.
pub const HINT_TRANSITION: Transition =
    Transition::new(Duration::from_millis(300), Duration::ZERO, Curve::EaseInOut);

/// The warning currently raised, and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Alert {
    /// Nothing raised.
    #[default]
    None,
    /// Raised by `trigger_warning`.
    Manual(String),
    /// Raised by validation. `message` is `None` when no violation is
    /// configured for the status; the colors still switch.
    Violation {
        /// The violated status.
        status: ViolationStatus,
        /// Text shown in the warning area.
        message: Option<String>,
    },
}

impl Alert {
    /// Text for the warning area, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Alert::None => None,
            Alert::Manual(message) => Some(message),
            Alert::Violation { message, .. } => message.as_deref(),
        }
    }

    /// Whether hint and divider take the warning color.
    pub fn is_raised(&self) -> bool {
        !matches!(self, Alert::None)
    }
}

/// What happened to the alert after a validation pass.
#[derive(Default)]
pub struct Outcome {
    /// The callback to run, present only on entering a violation.
    pub callback: Option<ViolationCallback>,
    /// Whether the pass cleared a raised alert.
    pub cleared: bool,
}

/// Tracks the alert and the last validation status.
#[derive(Debug, Clone, Default)]
pub struct Binder {
    alert: Alert,
    status: ViolationStatus,
}

impl Binder {
    /// A binder with nothing raised and a valid status.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current alert.
    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    /// The last status seen.
    pub fn status(&self) -> ViolationStatus {
        self.status
    }

    /// Folds a fresh validation result into the state.
    ///
    /// Entering a violated status from any other status yields that violation's
    /// callback; staying in it does not. Returning to valid clears a
    /// validation alert, and a manual one as the policy says.
    pub fn on_status(&mut self, status: ViolationStatus, settings: &Settings) -> Outcome {
        let entered = status != self.status;
        self.status = status;
        let was_raised = self.alert.is_raised();

        let mut outcome = Outcome::default();
        if status.is_violated() {
            let violation = settings.violation_for(status);
            self.alert = Alert::Violation {
                status,
                message: violation.map(|v| v.message.clone()),
            };
            if entered {
                outcome.callback = violation.and_then(|v| v.callback.clone());
            }
        } else {
            let keep = matches!(self.alert, Alert::Manual(_))
                && settings.manual_warning_policy == ManualWarningPolicy::Persist;
            if !keep {
                self.alert = Alert::None;
            }
        }

        outcome.cleared = was_raised && !self.alert.is_raised();
        outcome
    }

    /// Raises a manual warning, or clears whatever is raised when `None`.
    pub fn on_manual(&mut self, message: Option<String>) {
        self.alert = match message {
            Some(message) => Alert::Manual(message),
            None => Alert::None,
        };
    }

    /// Forgets everything, as when settings are replaced.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Everything the widget shows, derived from its state.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
    /// Hint color.
    pub hint_color: String,
    /// Divider color.
    pub divider_color: String,
    /// Warning area text.
    pub warning_text: Option<String>,
    /// Whether the hint floats.
    pub hint_visibility: HintVisibility,
    /// Hint text; the placeholder while visible.
    pub hint_text: Option<String>,
    /// Hint row height.
    pub hint_height: f64,
    /// Whole widget height.
    pub container_height: f64,
}

/// Hint row height.
pub fn hint_height(show_hint: bool) -> f64 {
    if show_hint {
        HINT_HEIGHT
    } else {
        0.0
    }
}

/// Widget height for a measured warning height, or `None` without a warning.
/// The measurement is floored before the padding is added.
pub fn container_height(show_hint: bool, warning_height: Option<f64>) -> f64 {
    let base = if show_hint {
        BASE_HEIGHT_WITH_HINT
    } else {
        BASE_HEIGHT
    };
    base + warning_height.map_or(0.0, |h| h.floor() + WARNING_PADDING)
}

/// Hint and divider colors with nothing raised: accents while focused.
pub fn resting_colors(settings: &Settings, focused: bool) -> (&str, &str) {
    if focused {
        (settings.hint_accent_color.as_str(), settings.divider_accent_color.as_str())
    } else {
        (settings.hint_color.as_str(), settings.divider_color.as_str())
    }
}

/// Derives the visual state. `measure` returns the laid-out height of the
/// warning text.
pub fn derive<M>(settings: &Settings, alert: &Alert, text: &str, focused: bool, measure: M) -> VisualState
where
    M: FnOnce(&str) -> f64,
{
    let (hint_color, divider_color) = if alert.is_raised() {
        (settings.warning_color.as_str(), settings.warning_color.as_str())
    } else {
        resting_colors(settings, focused)
    };

    let warning_text = alert.message().map(str::to_string);
    let hint_visibility = HintVisibility::derive(text, focused);
    let hint_text = if hint_visibility.is_visible() {
        settings.placeholder.clone()
    } else {
        None
    };

    VisualState {
        hint_color: hint_color.to_string(),
        divider_color: divider_color.to_string(),
        container_height: container_height(settings.show_hint, warning_text.as_deref().map(measure)),
        warning_text,
        hint_visibility,
        hint_text,
        hint_height: hint_height(settings.show_hint),
    }
}
