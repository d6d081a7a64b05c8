//! Word-wise movement and range deletion.
//!
//! Masked fields treat the whole value as one word so word boundaries can't
//! leak the shape of a secret.

use super::model::Model;

impl Model {
    pub(super) fn delete_before_cursor(&mut self) {
        self.value.drain(..self.pos);
        self.offset = 0;
        self.set_cursor(0);
    }

    pub(super) fn delete_after_cursor(&mut self) {
        self.value.truncate(self.pos);
        self.set_cursor(self.value.len());
    }

    pub(super) fn delete_word_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        if self.is_masked() {
            self.delete_before_cursor();
            return;
        }

        let end = self.pos;
        let start = self.word_start_before(end);
        self.value.drain(start..end);
        self.set_cursor(start);
    }

    pub(super) fn delete_word_forward(&mut self) {
        if self.pos >= self.value.len() {
            return;
        }
        if self.is_masked() {
            self.delete_after_cursor();
            return;
        }

        let start = self.pos;
        let end = self.word_end_after(start);
        self.value.drain(start..end);
        self.set_cursor(start);
    }

    pub(super) fn word_backward(&mut self) {
        if self.is_masked() {
            self.cursor_start();
            return;
        }
        let target = self.word_start_before(self.pos);
        self.set_cursor(target);
    }

    pub(super) fn word_forward(&mut self) {
        if self.is_masked() {
            self.cursor_end();
            return;
        }
        let target = self.word_end_after(self.pos);
        self.set_cursor(target);
    }

    // Start of the word ending at or before `from`, skipping trailing whitespace.
    fn word_start_before(&self, from: usize) -> usize {
        let mut i = from;
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        i
    }

    // End of the word starting at or after `from`, skipping leading whitespace.
    fn word_end_after(&self, from: usize) -> usize {
        let mut i = from;
        while i < self.value.len() && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < self.value.len() && !self.value[i].is_whitespace() {
            i += 1;
        }
        i
    }
}
