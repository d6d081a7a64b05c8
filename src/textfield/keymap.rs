//! Key bindings for the text field.

use crate::key::{new_binding, with_help, with_keys_str, Binding, KeyMap as HelpKeyMap};

/// Editing and movement bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move one character right.
    pub character_forward: Binding,
    /// Move one character left.
    pub character_backward: Binding,
    /// Move one word right.
    pub word_forward: Binding,
    /// Move one word left.
    pub word_backward: Binding,
    /// Delete the previous word.
    pub delete_word_backward: Binding,
    /// Delete the next word.
    pub delete_word_forward: Binding,
    /// Delete from the cursor to the end of the line.
    pub delete_after_cursor: Binding,
    /// Delete from the start of the line to the cursor.
    pub delete_before_cursor: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Jump to the start of the line.
    pub line_start: Binding,
    /// Jump to the end of the line.
    pub line_end: Binding,
    /// Paste from the clipboard.
    pub paste: Binding,
}

/// The default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        word_forward: new_binding(vec![with_keys_str(&["alt+right", "ctrl+right", "alt+f"])]),
        word_backward: new_binding(vec![with_keys_str(&["alt+left", "ctrl+left", "alt+b"])]),
        delete_word_backward: new_binding(vec![
            with_keys_str(&["alt+backspace", "ctrl+w"]),
            with_help("ctrl+w", "delete word"),
        ]),
        delete_word_forward: new_binding(vec![with_keys_str(&["alt+delete", "alt+d"])]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        delete_before_cursor: new_binding(vec![
            with_keys_str(&["ctrl+u"]),
            with_help("ctrl+u", "clear"),
        ]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"]), with_help("home", "start")]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"]), with_help("end", "end")]),
        paste: new_binding(vec![with_keys_str(&["ctrl+v"]), with_help("ctrl+v", "paste")]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl HelpKeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.delete_before_cursor, &self.paste]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.line_start, &self.line_end],
            vec![&self.delete_word_backward, &self.delete_before_cursor, &self.paste],
        ]
    }
}
