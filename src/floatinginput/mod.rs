//! Floating-label text input.
//!
//! A text field with an icon on either side, a hint that floats above the
//! field once it has content or focus, a divider that changes color with focus
//! and validation, and a warning area below. Length and input-type constraints
//! are validated on every change; violations switch the hint and divider to the
//! warning color, show a message and fire an optional callback once per
//! transition.
//!
//! The widget computes its visual state and pushes it through a [`Renderer`].
//! [`TerminalRenderer`] draws it with lipgloss; [`Model::view`] returns the
//! rendered rows.
//!
//! # Basic Usage
//!
//! ```rust
//! use floating_input::floatinginput::{new, InputViolation, Settings};
//!
//! let mut input = new();
//! input.configure(
//!     Settings::new()
//!         .with_placeholder("Nickname")
//!         .with_max_length(5)
//!         .with_max_length_violation(InputViolation::new("5 characters at most")),
//! );
//! input.set_text("hello world");
//! assert_eq!(input.warning_message(), Some("5 characters at most"));
//! ```
//!
//! # Manual warnings
//!
//! ```rust
//! use floating_input::floatinginput::new;
//!
//! let mut input = new();
//! input.trigger_warning(Some("Required"));
//! assert_eq!(input.warning_message(), Some("Required"));
//! input.trigger_warning(None);
//! assert!(input.warning_message().is_none());
//! ```
//!
//! # Using in a bubbletea-rs application
//!
//! ```rust
//! use floating_input::floatinginput::{new, Model as FloatingInput, Settings};
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     email: FloatingInput,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut email = new();
//!         email.configure(Settings::new().with_placeholder("Email").with_icon("@"));
//!         email.set_width(32);
//!         let cmd = email.focus();
//!         (Self { email }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.email.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.email.view()
//!     }
//! }
//! ```

pub mod binder;
pub mod model;
pub mod renderer;
pub mod settings;
pub mod terminal;
pub mod validation;

#[cfg(test)]
mod tests;

pub use binder::{
    Alert, BASE_HEIGHT, BASE_HEIGHT_WITH_HINT, HINT_HEIGHT, HINT_TRANSITION, ICON_MARGIN,
    WARNING_PADDING,
};
pub use model::{new, Model};
pub use renderer::{ColorSlot, Curve, Edge, HeightSlot, Renderer, TextSlot, Transition, VisibleSlot};
pub use settings::{InputViolation, ManualWarningPolicy, Settings, ViolationCallback};
pub use terminal::{HintFrameMsg, TerminalRenderer, ROW_HEIGHT};
pub use validation::{evaluate, Classifier, HintVisibility, InputType, ViolationStatus};
