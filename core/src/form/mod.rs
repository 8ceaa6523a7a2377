//! Contact form state.
//!
//! Fields move between `Untouched`, `Error` and `Success` on blur and input.
//! Submission is split in two so the host can await the [`Submitter`]
//! without holding the form: [`ContactForm::begin_submit`] validates and
//! locks the form, [`ContactForm::finish_submit`] applies the outcome.

mod submit;
mod validator;

use crate::error::SubmitError;
use crate::notify::NotificationKind;

pub use submit::{ContactMessage, Submitter, deliver};
pub use validator::{EMAIL_MESSAGE, REQUIRED_MESSAGE, classify, is_valid_email};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

pub const INVALID_NOTICE: &str = "Please fill in all required fields correctly.";
pub const SUCCESS_NOTICE: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_NOTICE: &str =
    "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Error(String),
    Success,
}

impl FieldState {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Class added to the field's container.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Self::Untouched => None,
            Self::Error(_) => Some("error"),
            Self::Success => Some("success"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub state: FieldState,
}

impl Field {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            value: String::new(),
            state: FieldState::Untouched,
        }
    }

    fn validate(&mut self) -> &FieldState {
        self.state = classify(self.kind, self.required, &self.value);
        &self.state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

/// Why a submission did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Names of the fields that failed validation
    Invalid(Vec<&'static str>),
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: Vec<Field>,
    phase: SubmitPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// The portfolio contact form: name, email, optional subject, message.
    pub fn new() -> Self {
        Self::with_fields(vec![
            Field::new("name", "Your Name", FieldKind::Text, true),
            Field::new("email", "Your Email", FieldKind::Email, true),
            Field::new("subject", "Subject", FieldKind::Text, false),
            Field::new("message", "Your Message", FieldKind::TextArea, true),
        ])
    }

    pub fn with_fields(fields: Vec<Field>) -> Self {
        Self {
            fields,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => SUBMIT_LABEL,
            SubmitPhase::Sending => SENDING_LABEL,
        }
    }

    /// Input event: store the value and clear any displayed error.
    pub fn input(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.value = value.into();
            if field.state.is_error() {
                field.state = FieldState::Untouched;
            }
        }
    }

    /// Blur event: classify the field.
    pub fn blur(&mut self, name: &str) -> Option<FieldState> {
        self.field_mut(name).map(|f| f.validate().clone())
    }

    /// Validate every field. Returns the names of failing fields.
    pub fn validate_all(&mut self) -> Vec<&'static str> {
        self.fields
            .iter_mut()
            .filter_map(|f| f.validate().is_error().then_some(f.name))
            .collect()
    }

    /// Validate and lock the form for sending.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitRejection> {
        if self.phase == SubmitPhase::Sending {
            return Err(SubmitRejection::Busy);
        }
        let invalid = self.validate_all();
        if !invalid.is_empty() {
            tracing::debug!(?invalid, "contact form rejected");
            return Err(SubmitRejection::Invalid(invalid));
        }
        self.phase = SubmitPhase::Sending;

        let value = |name: &str| {
            self.field(name)
                .map(|f| f.value.trim().to_string())
                .unwrap_or_default()
        };
        Ok(ContactMessage {
            name: value("name"),
            email: value("email"),
            subject: value("subject"),
            message: value("message"),
        })
    }

    /// Apply a submission outcome and return the banner to show.
    ///
    /// Success clears the form; failure keeps what the user typed. Either
    /// way the submit control is re-enabled.
    pub fn finish_submit(
        &mut self,
        outcome: &Result<(), SubmitError>,
    ) -> (NotificationKind, &'static str) {
        self.phase = SubmitPhase::Idle;
        match outcome {
            Ok(()) => {
                self.reset();
                (NotificationKind::Success, SUCCESS_NOTICE)
            }
            Err(_) => (NotificationKind::Error, FAILURE_NOTICE),
        }
    }

    /// Clear every value and state.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.state = FieldState::Untouched;
        }
    }
}

impl SubmitRejection {
    /// Banner for a rejected submission, if one should be shown.
    pub fn notice(&self) -> Option<(NotificationKind, &'static str)> {
        match self {
            Self::Invalid(_) => Some((NotificationKind::Error, INVALID_NOTICE)),
            Self::Busy => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.input("name", "Ada");
        form.input("email", "ada@example.com");
        form.input("message", "Hello there");
        form
    }

    struct Recording {
        calls: Cell<usize>,
        fail: bool,
    }

    impl Submitter for Recording {
        async fn submit(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(SubmitError::Delivery("offline".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_blur_classifies() {
        let mut form = ContactForm::new();
        assert_eq!(
            form.blur("name"),
            Some(FieldState::Error(REQUIRED_MESSAGE.to_string()))
        );
        form.input("email", "not-an-email");
        assert!(form.blur("email").unwrap().is_error());
        form.input("email", "a@b.co");
        assert_eq!(form.blur("email"), Some(FieldState::Success));
        assert_eq!(form.blur("subject"), Some(FieldState::Success));
        assert_eq!(form.blur("missing"), None);
    }

    #[test]
    fn test_input_clears_error_only() {
        let mut form = ContactForm::new();
        form.blur("name");
        assert!(form.field("name").unwrap().state.is_error());
        form.input("name", "A");
        assert_eq!(form.field("name").unwrap().state, FieldState::Untouched);

        form.blur("name");
        form.input("name", "Ab");
        assert_eq!(form.field("name").unwrap().state, FieldState::Success);
    }

    #[test]
    fn test_invalid_submit_is_rejected_without_sending() {
        let mut form = ContactForm::new();
        form.input("email", "bad");
        let err = form.begin_submit().unwrap_err();
        assert_eq!(err, SubmitRejection::Invalid(vec!["name", "email", "message"]));
        assert_eq!(err.notice(), Some((NotificationKind::Error, INVALID_NOTICE)));
        assert!(!form.submit_disabled());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_begin_submit_locks_form() {
        let mut form = filled();
        let message = form.begin_submit().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.subject, "");
        assert!(form.submit_disabled());
        assert_eq!(form.submit_label(), SENDING_LABEL);
        assert_eq!(form.begin_submit(), Err(SubmitRejection::Busy));
        assert_eq!(SubmitRejection::Busy.notice(), None);
    }

    #[tokio::test]
    async fn test_successful_submission_resets_form() {
        let mut form = filled();
        let submitter = Recording {
            calls: Cell::new(0),
            fail: false,
        };

        let message = form.begin_submit().unwrap();
        let outcome = deliver(&submitter, &message).await;
        let notice = form.finish_submit(&outcome);

        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(notice, (NotificationKind::Success, SUCCESS_NOTICE));
        assert!(!form.submit_disabled());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
        assert!(form.fields().iter().all(|f| f.state == FieldState::Untouched));
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_values() {
        let mut form = filled();
        let submitter = Recording {
            calls: Cell::new(0),
            fail: true,
        };

        let message = form.begin_submit().unwrap();
        let outcome = deliver(&submitter, &message).await;
        let notice = form.finish_submit(&outcome);

        assert_eq!(notice, (NotificationKind::Error, FAILURE_NOTICE));
        assert_eq!(form.field("name").unwrap().value, "Ada");
        assert!(!form.submit_disabled());
    }

    #[test]
    fn test_field_state_class() {
        assert_eq!(FieldState::Untouched.class(), None);
        assert_eq!(FieldState::Error("x".into()).class(), Some("error"));
        assert_eq!(FieldState::Success.class(), Some("success"));
        assert_eq!(FieldState::Error("x".into()).message(), Some("x"));
    }
}
