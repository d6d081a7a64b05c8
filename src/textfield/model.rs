//! Text field state and construction.

use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{EchoMode, KeyboardType, PasteErrMsg};
use crate::cursor::{new as cursor_new, Model as Cursor};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::time::Duration;

/// Single-line text field.
///
/// This is the editing primitive the floating input wraps: it owns the value,
/// the caret and horizontal scrolling, and knows nothing about hints, dividers
/// or warnings.
///
/// ```rust
/// use floating_input::textfield::{new, EchoMode, KeyboardType};
///
/// let mut field = new();
/// field.set_placeholder("PIN");
/// field.set_keyboard_type(KeyboardType::NumberPad);
/// field.set_echo_mode(EchoMode::EchoPassword);
/// field.set_value("1234");
/// assert_eq!(field.value(), "1234");
/// ```
pub struct Model {
    /// Last error raised while editing, e.g. a failed clipboard read.
    pub err: Option<String>,

    /// Shown while the value is empty.
    pub placeholder: String,
    /// Color of the placeholder text.
    pub placeholder_color: String,
    /// Color of the typed text. `None` keeps the terminal default.
    pub text_color: Option<String>,

    /// The caret.
    pub cursor: Cursor,

    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    pub(super) enabled: bool,
    pub(super) pos: usize,

    /// Maximum number of cells shown at once. 0 shows everything.
    pub width: usize,

    /// Key bindings.
    pub key_map: KeyMap,

    /// How typed characters are displayed.
    pub echo_mode: EchoMode,
    /// Mask character for [`EchoMode::EchoPassword`].
    pub echo_character: char,
    /// Restricts which typed characters are inserted.
    pub keyboard_type: KeyboardType,

    // Visible window over `value`.
    pub(super) offset: usize,
    pub(super) offset_right: usize,
}

/// Creates an empty, unfocused, enabled text field.
pub fn new() -> Model {
    Model {
        err: None,
        placeholder: String::new(),
        placeholder_color: "240".to_string(),
        text_color: None,
        cursor: cursor_new(),
        value: Vec::new(),
        focus: false,
        enabled: true,
        pos: 0,
        width: 0,
        key_map: default_key_map(),
        echo_mode: EchoMode::EchoNormal,
        echo_character: '*',
        keyboard_type: KeyboardType::Default,
        offset: 0,
        offset_right: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// Reads the clipboard and delivers its contents as a [`PasteMsg`].
///
/// Failures arrive as [`PasteErrMsg`], including when the crate is built
/// without the `clipboard-support` feature.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
