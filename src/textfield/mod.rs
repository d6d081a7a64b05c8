//! Single-line text field.
//!
//! The editing primitive behind the floating input. It handles the value, the
//! caret, horizontal scrolling, secure entry and keyboard-type filtering. The
//! hint, divider and warning live one level up in [`crate::floatinginput`].
//!
//! # Basic Usage
//!
//! ```rust
//! use floating_input::textfield::new;
//!
//! let mut field = new();
//! let _blink = field.focus();
//! field.set_placeholder("Email");
//! field.set_width(30);
//! ```
//!
//! # Secure entry
//!
//! ```rust
//! use floating_input::textfield::{new, EchoMode};
//!
//! let mut field = new();
//! field.set_echo_mode(EchoMode::EchoPassword);
//! field.set_value("secret");
//! assert!(field.view().contains("******"));
//! ```

pub mod editing;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model};
pub use types::{EchoMode, KeyboardType, PasteErrMsg, PasteMsg};
