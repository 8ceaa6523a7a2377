//! Field-level validation rules.

use std::sync::LazyLock;

use regex::Regex;

use super::{FieldKind, FieldState};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Classify a field value. Emptiness is checked on the trimmed value;
/// the email pattern runs on the raw value.
pub fn classify(kind: FieldKind, required: bool, value: &str) -> FieldState {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return if required {
            FieldState::Error(REQUIRED_MESSAGE.to_string())
        } else {
            FieldState::Success
        };
    }
    if kind == FieldKind::Email && !is_valid_email(value) {
        return FieldState::Error(EMAIL_MESSAGE.to_string());
    }
    FieldState::Success
}
