//! Rendering for the text field.

use super::model::Model;
use super::types::EchoMode;
use lipgloss_extras::prelude::*;

impl Model {
    /// Renders the visible window of the value with the cursor, padded to the
    /// field width.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let text_style = match &self.text_color {
            Some(color) => Style::new().foreground(Color::from(color.as_str())),
            None => Style::new(),
        };

        let end = self.offset_right.min(self.value.len());
        let start = self.offset.min(end);
        let visible = self.echo_transform(&self.value[start..end]);
        let pos = self.pos.saturating_sub(start);

        let mut v = String::new();
        let before: String = visible.iter().take(pos).collect();
        v.push_str(&text_style.render(&before));

        if self.focus {
            let mut cur = self.cursor.clone();
            match visible.get(pos) {
                Some(ch) => cur.set_char(&ch.to_string()),
                None => cur.set_char(" "),
            }
            v.push_str(&cur.view());
        } else if let Some(ch) = visible.get(pos) {
            v.push_str(&text_style.render(&ch.to_string()));
        }

        if pos + 1 < visible.len() {
            let after: String = visible[pos + 1..].iter().collect();
            v.push_str(&text_style.render(&after));
        }

        // The cursor cell past the end counts toward the width.
        let used = visible.len() + usize::from(self.focus && pos >= visible.len());
        if self.width > used {
            v.push_str(&" ".repeat(self.width - used));
        }
        v
    }

    fn placeholder_view(&self) -> String {
        let style = Style::new().foreground(Color::from(self.placeholder_color.as_str()));
        let mut chars: Vec<char> = self.placeholder.chars().collect();
        if self.width > 0 && chars.len() > self.width {
            chars.truncate(self.width);
        }

        let mut v = String::new();
        if self.focus {
            let mut cur = self.cursor.clone();
            cur.set_char(&chars[0].to_string());
            v.push_str(&cur.view());
            let rest: String = chars[1..].iter().collect();
            v.push_str(&style.render(&rest));
        } else {
            let all: String = chars.iter().collect();
            v.push_str(&style.render(&all));
        }

        if self.width > chars.len() {
            v.push_str(&" ".repeat(self.width - chars.len()));
        }
        v
    }

    fn echo_transform(&self, v: &[char]) -> Vec<char> {
        match self.echo_mode {
            EchoMode::EchoNormal => v.to_vec(),
            EchoMode::EchoPassword => vec![self.echo_character; v.len()],
            EchoMode::EchoNone => Vec::new(),
        }
    }
}
