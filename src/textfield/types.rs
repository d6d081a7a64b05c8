//! Core types for the text field.

use bubbletea_rs::Msg;

/// Clipboard contents to insert at the cursor.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// How typed characters are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoMode {
    /// Characters are shown as typed.
    #[default]
    EchoNormal,
    /// Every character is shown as the echo character. Used for secure entry.
    EchoPassword,
    /// Nothing is shown.
    EchoNone,
}

/// The kind of keyboard the field expects input from.
///
/// A terminal has no soft keyboard to swap, so the keyboard type restricts which
/// characters typed keys may insert. Programmatic values and pasted text are not
/// filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardType {
    /// Any character.
    #[default]
    Default,
    /// ASCII characters only.
    Ascii,
    /// Digits only.
    NumberPad,
    /// Digits and a decimal separator.
    DecimalPad,
    /// Digits and dial characters.
    PhonePad,
    /// Characters that can appear in an email address.
    EmailAddress,
    /// Characters that can appear in a URL.
    Url,
}

impl KeyboardType {
    /// Reports whether a typed character can be inserted into `current`.
    pub fn accepts(self, ch: char, current: &[char]) -> bool {
        match self {
            KeyboardType::Default => true,
            KeyboardType::Ascii => ch.is_ascii() && !ch.is_ascii_control(),
            KeyboardType::NumberPad => ch.is_ascii_digit(),
            KeyboardType::DecimalPad => {
                ch.is_ascii_digit()
                    || (matches!(ch, '.' | ',') && !current.iter().any(|c| matches!(c, '.' | ',')))
            }
            KeyboardType::PhonePad => ch.is_ascii_digit() || "+*#()- ".contains(ch),
            KeyboardType::EmailAddress => {
                ch.is_ascii_alphanumeric() || "@.!#$%&'*+-/=?^_`{|}~".contains(ch)
            }
            KeyboardType::Url => ch.is_ascii_graphic(),
        }
    }
}
