//! Validation engine.
//!
//! Maps the current text and the configured constraints to exactly one
//! [`ViolationStatus`]. The input type is checked first, so text that fails its
//! classifier reports [`ViolationStatus::InputTypeViolated`] whatever its
//! length. Absent constraints never fail.
//!
//! ```rust
//! use floating_input::floatinginput::{evaluate, InputType, ViolationStatus};
//!
//! assert_eq!(evaluate("hello", Some(10), Some(&InputType::Any)), ViolationStatus::Valid);
//! assert_eq!(evaluate("hello world", Some(5), None), ViolationStatus::MaxLengthViolated);
//! assert_eq!(evaluate("12a", Some(2), Some(&InputType::Number)), ViolationStatus::InputTypeViolated);
//! ```

use std::fmt;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Result of validating the current text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationStatus {
    /// Every configured constraint holds.
    #[default]
    Valid,
    /// The text fails the input type classifier.
    InputTypeViolated,
    /// The text is longer than the maximum length.
    MaxLengthViolated,
}

impl ViolationStatus {
    /// Whether this status is one of the violations.
    pub fn is_violated(self) -> bool {
        self != ViolationStatus::Valid
    }
}

/// Whether the floating hint is shown above the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintVisibility {
    /// Shown.
    Visible,
    /// Hidden.
    #[default]
    Hidden,
}

impl HintVisibility {
    /// The hint floats whenever there is content under it or the field has focus.
    pub fn derive(text: &str, focused: bool) -> Self {
        if !text.is_empty() || focused {
            HintVisibility::Visible
        } else {
            HintVisibility::Hidden
        }
    }

    /// Whether this is [`HintVisibility::Visible`].
    pub fn is_visible(self) -> bool {
        self == HintVisibility::Visible
    }
}

/// A caller-supplied classifier for [`InputType::Custom`].
pub type Classifier = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Classifies what the text is allowed to contain.
///
/// Empty text passes every classifier. Whether a field may be left empty is a
/// separate concern, handled with a manual warning.
#[derive(Clone)]
pub enum InputType {
    /// Anything.
    Any,
    /// ASCII digits.
    Number,
    /// Digits with at most one `.` or `,` separator.
    Decimal,
    /// Letters.
    Alphabet,
    /// Letters and digits.
    Alphanumeric,
    /// A single `local@domain.tld` address.
    Email,
    /// An optional leading `+`, then digits, spaces, dashes and parentheses.
    Phone,
    /// A caller-supplied predicate.
    Custom(Classifier),
}

impl fmt::Debug for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::Any => f.write_str("Any"),
            InputType::Number => f.write_str("Number"),
            InputType::Decimal => f.write_str("Decimal"),
            InputType::Alphabet => f.write_str("Alphabet"),
            InputType::Alphanumeric => f.write_str("Alphanumeric"),
            InputType::Email => f.write_str("Email"),
            InputType::Phone => f.write_str("Phone"),
            InputType::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl InputType {
    /// Wraps a predicate as a custom input type.
    pub fn custom<F>(classifier: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        InputType::Custom(Arc::new(classifier))
    }

    /// Reports whether `text` belongs to this input type.
    pub fn accepts(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        match self {
            InputType::Any => true,
            InputType::Number => text.chars().all(|c| c.is_ascii_digit()),
            InputType::Decimal => is_decimal(text),
            InputType::Alphabet => text.chars().all(char::is_alphabetic),
            InputType::Alphanumeric => text.chars().all(char::is_alphanumeric),
            InputType::Email => is_email(text),
            InputType::Phone => is_phone(text),
            InputType::Custom(classifier) => classifier(text),
        }
    }
}

fn is_decimal(text: &str) -> bool {
    let mut separators = 0;
    let mut digits = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' | ',' => separators += 1,
            _ => return false,
        }
    }
    digits > 0 && separators <= 1
}

fn is_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

fn is_phone(text: &str) -> bool {
    let body = text.strip_prefix('+').unwrap_or(text);
    body.chars().any(|c| c.is_ascii_digit())
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
}

/// Length as the user sees it, in grapheme clusters.
pub fn text_length(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Classifies `text` against the constraints. The input type is checked
/// before the length.
pub fn evaluate(text: &str, max_length: Option<usize>, input_type: Option<&InputType>) -> ViolationStatus {
    if let Some(input_type) = input_type {
        if !input_type.accepts(text) {
            return ViolationStatus::InputTypeViolated;
        }
    }
    if let Some(max) = max_length {
        if text_length(text) > max {
            return ViolationStatus::MaxLengthViolated;
        }
    }
    ViolationStatus::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_constraints_is_valid() {
        for text in ["", "a", "hello", "0123456789"] {
            assert_eq!(evaluate(text, Some(10), Some(&InputType::Any)), ViolationStatus::Valid);
        }
    }

    #[test]
    fn test_longer_than_max_length() {
        assert_eq!(evaluate("hello world", Some(5), None), ViolationStatus::MaxLengthViolated);
        assert_eq!(evaluate("hello", Some(5), None), ViolationStatus::Valid);
        assert_eq!(evaluate("hello!", Some(5), Some(&InputType::Any)), ViolationStatus::MaxLengthViolated);
    }

    #[test]
    fn test_input_type_wins_over_length() {
        assert_eq!(
            evaluate("abc", Some(100), Some(&InputType::Number)),
            ViolationStatus::InputTypeViolated
        );
        assert_eq!(
            evaluate("abcdefghijk", Some(3), Some(&InputType::Number)),
            ViolationStatus::InputTypeViolated
        );
    }

    #[test]
    fn test_absent_constraints_never_violate() {
        let long = "x".repeat(10_000);
        assert_eq!(evaluate(&long, None, None), ViolationStatus::Valid);
        assert_eq!(evaluate("not a number", None, None), ViolationStatus::Valid);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let ty = InputType::Email;
        let first = evaluate("a@b", Some(3), Some(&ty));
        assert_eq!(first, evaluate("a@b", Some(3), Some(&ty)));
    }

    #[test]
    fn test_length_counts_graphemes() {
        // "é" as e + combining acute, and a family emoji.
        assert_eq!(text_length("e\u{301}"), 1);
        assert_eq!(text_length("👨‍👩‍👧"), 1);
        assert_eq!(evaluate("e\u{301}e\u{301}", Some(2), None), ViolationStatus::Valid);
    }

    #[test]
    fn test_builtin_classifiers() {
        assert!(InputType::Number.accepts("0042"));
        assert!(!InputType::Number.accepts("4.2"));
        assert!(InputType::Decimal.accepts("4.2"));
        assert!(InputType::Decimal.accepts("4,2"));
        assert!(!InputType::Decimal.accepts("4.2.1"));
        assert!(!InputType::Decimal.accepts("."));
        assert!(InputType::Alphabet.accepts("\u{e9}t\u{e9}"));
        assert!(!InputType::Alphabet.accepts("abc1"));
        assert!(InputType::Alphanumeric.accepts("abc1"));
        assert!(InputType::Email.accepts("ray@example.net"));
        assert!(!InputType::Email.accepts("ray@example"));
        assert!(!InputType::Email.accepts("@example.net"));
        assert!(!InputType::Email.accepts("ray@@example.net"));
        assert!(!InputType::Email.accepts("ray @example.net"));
        assert!(InputType::Phone.accepts("+886 (2) 1234-5678"));
        assert!(!InputType::Phone.accepts("call me"));
        assert!(!InputType::Phone.accepts("+"));
    }

    #[test]
    fn test_empty_text_passes_every_classifier() {
        assert!(InputType::Email.accepts(""));
        assert!(InputType::custom(|_| false).accepts(""));
    }

    #[test]
    fn test_custom_classifier() {
        let even = InputType::custom(|s| s.len() % 2 == 0);
        assert!(even.accepts("ab"));
        assert!(!even.accepts("abc"));
        assert_eq!(format!("{:?}", even), "Custom(..)");
    }

    #[test]
    fn test_hint_visibility() {
        assert_eq!(HintVisibility::derive("", false), HintVisibility::Hidden);
        assert_eq!(HintVisibility::derive("", true), HintVisibility::Visible);
        assert_eq!(HintVisibility::derive("a", false), HintVisibility::Visible);
        assert!(HintVisibility::derive("a", true).is_visible());
    }
}
