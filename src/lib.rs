#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/floating-input/")]

//! # floating-input
//!
//! A floating-label text input for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: a text field with optional icons, a hint that floats above the
//! field once it has content or focus, a divider that tracks focus and
//! validation, and a warning area.
//!
//! ## Overview
//!
//! The widget follows the Elm Architecture like the rest of the bubbletea-rs
//! ecosystem: feed it messages through `update()` and draw it with `view()`.
//! Every text or focus change re-validates the text against the configured
//! maximum length and input type and recomputes colors, hint visibility and
//! layout height in one place.
//!
//! ## Modules
//!
//! - [`floatinginput`]: the widget, its settings, validation and renderers
//! - [`textfield`]: the single-line text field it wraps
//! - [`cursor`]: the blinking caret
//! - [`key`]: type-safe key bindings
//!
//! ## Focus Management
//!
//! Focusable parts implement [`Component`]:
//!
//! ```rust
//! use floating_input::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut input = floating_input_new();
//! handle_focus(&mut input);
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use floating_input::prelude::*;
//!
//! let mut input = floating_input_new();
//! input.configure(
//!     Settings::new()
//!         .with_placeholder("PIN")
//!         .with_input_type(InputType::Number)
//!         .with_max_length(4)
//!         .with_input_type_violation(InputViolation::new("Digits only"))
//!         .with_max_length_violation(InputViolation::new("Four digits")),
//! );
//!
//! input.set_text("12a");
//! assert_eq!(input.status(), ViolationStatus::InputTypeViolated);
//! assert_eq!(input.warning_message(), Some("Digits only"));
//!
//! input.set_text("1234");
//! assert_eq!(input.status(), ViolationStatus::Valid);
//! assert!(input.warning_message().is_none());
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events at `debug` and
//! `trace` level. Install a subscriber in the application to see them.

pub mod cursor;
pub mod floatinginput;
pub mod key;
pub mod textfield;

use bubbletea_rs::Cmd;

/// Common interface for components that take keyboard focus.
///
/// `focus()` may return a command, typically a cursor blink or a hint fade.
/// `blur()` drops focus and `focused()` reports it.
///
/// ```rust
/// use floating_input::prelude::*;
///
/// let mut field = text_field_new();
/// assert!(!field.focused());
///
/// let _ = field.focus();
/// assert!(field.focused());
///
/// field.blur();
/// assert!(!field.focused());
/// ```
pub trait Component {
    /// Takes focus. The returned command, if any, should be handed to the runtime.
    fn focus(&mut self) -> Option<Cmd>;

    /// Drops focus.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use cursor::Model as Cursor;
pub use floatinginput::{
    new as floating_input_new, HintVisibility, InputType, InputViolation, ManualWarningPolicy,
    Model as FloatingInput, Renderer, Settings, TerminalRenderer, ViolationStatus,
};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use textfield::{
    new as text_field_new, paste, EchoMode, KeyboardType, Model as TextField, PasteErrMsg,
    PasteMsg,
};

/// Everything needed to build a form with floating inputs.
///
/// ```rust
/// use floating_input::prelude::*;
///
/// let mut email = floating_input_new();
/// email.configure(Settings::new().with_placeholder("Email").with_input_type(InputType::Email));
/// let _ = email.focus();
/// assert_eq!(email.hint_visibility(), HintVisibility::Visible);
/// ```
pub mod prelude {
    pub use crate::Component;

    pub use crate::{Cursor, FloatingInput, TerminalRenderer, TextField};

    pub use crate::{
        HintVisibility, InputType, InputViolation, ManualWarningPolicy, Renderer, Settings,
        ViolationStatus,
    };

    pub use crate::{EchoMode, KeyboardType, PasteErrMsg, PasteMsg};

    pub use crate::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
        KeyHelp, KeyMap, KeyPress,
    };

    pub use crate::{floating_input_new, paste, text_field_new};
}
