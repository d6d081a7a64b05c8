//! Value, focus and message handling for the text field.

use super::model::{paste, Model};
use super::types::{EchoMode, KeyboardType, PasteErrMsg, PasteMsg};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl Model {
    /// Replaces the value. The cursor moves to the end when it was at the start
    /// of an empty field or would fall past the new end.
    ///
    /// ```rust
    /// use floating_input::textfield::new;
    ///
    /// let mut field = new();
    /// field.set_value("hello");
    /// assert_eq!(field.value(), "hello");
    /// assert_eq!(field.position(), 5);
    /// ```
    pub fn set_value(&mut self, s: &str) {
        let was_empty = self.value.is_empty();
        self.value = s.chars().collect();
        if (self.pos == 0 && was_empty) || self.pos > self.value.len() {
            self.set_cursor(self.value.len());
        }
        self.handle_overflow();
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Whether the field holds input focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Takes input focus. Returns the cursor's blink command.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.cursor.focus()
    }

    /// Gives up input focus.
    pub fn blur(&mut self) {
        self.focus = false;
        self.cursor.blur();
    }

    /// Allows or blocks user input. A disabled field keeps its value and focus
    /// but ignores key presses and pastes.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether user input is accepted.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Clears the value and moves the cursor to the start.
    pub fn reset(&mut self) {
        self.value.clear();
        self.set_cursor(0);
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the number of visible cells. 0 shows the whole value.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    /// Sets how typed characters are displayed.
    pub fn set_echo_mode(&mut self, mode: EchoMode) {
        self.echo_mode = mode;
    }

    /// Sets which typed characters are accepted.
    pub fn set_keyboard_type(&mut self, keyboard_type: KeyboardType) {
        self.keyboard_type = keyboard_type;
    }

    /// Handles key presses, pastes and cursor blinks.
    ///
    /// Unfocused fields ignore everything. Disabled fields still blink but
    /// ignore input.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if self.enabled {
            if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
                if matches_binding(key_msg, &self.key_map.paste) {
                    return Some(paste());
                }
                self.handle_deletion_keys(key_msg);
                self.handle_movement_keys(key_msg);
                self.handle_character_input(key_msg);
            }

            if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
                self.insert_runes(paste_msg.0.chars().collect());
            }

            if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
                tracing::debug!(error = %paste_err.0, "paste failed");
                self.err = Some(paste_err.0.clone());
            }
        }

        let cursor_cmd = self.cursor.update(&msg);
        self.handle_overflow();
        cursor_cmd
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            self.delete_word_backward();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            self.err = None;
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.delete_after_cursor();
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.delete_before_cursor();
        } else if matches_binding(key_msg, &self.key_map.delete_word_forward) {
            self.delete_word_forward();
        }
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.word_backward) {
            self.word_backward();
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.key_map.word_forward) {
            self.word_forward();
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            self.set_cursor(self.pos + 1);
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        let KeyCode::Char(ch) = key_msg.key else {
            return;
        };
        // Shift is carried by the character's case.
        if key_msg.modifiers.contains(KeyModifiers::CONTROL)
            || key_msg.modifiers.contains(KeyModifiers::ALT)
        {
            return;
        }
        if !self.keyboard_type.accepts(ch, &self.value) {
            tracing::trace!(?ch, keyboard = ?self.keyboard_type, "keyboard rejected character");
            return;
        }
        self.insert_runes(vec![ch]);
    }

    /// Inserts characters at the cursor.
    pub(super) fn insert_runes(&mut self, runes: Vec<char>) {
        let count = runes.len();
        let tail = self.value.split_off(self.pos);
        self.value.extend(runes);
        self.value.extend(tail);
        self.set_cursor(self.pos + count);
    }

    /// Keeps the cursor inside the visible window. The cell after the last
    /// character counts, since the cursor can sit there.
    pub(super) fn handle_overflow(&mut self) {
        if self.width == 0 {
            self.offset = 0;
            self.offset_right = self.value.len();
            return;
        }

        if self.pos < self.offset {
            self.offset = self.pos;
        } else if self.pos >= self.offset + self.width {
            self.offset = self.pos + 1 - self.width;
        }

        let max_offset = (self.value.len() + 1).saturating_sub(self.width);
        self.offset = self.offset.min(max_offset);
        self.offset_right = (self.offset + self.width).min(self.value.len());
    }

    pub(super) fn is_masked(&self) -> bool {
        self.echo_mode != EchoMode::EchoNormal
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
