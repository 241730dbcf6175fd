//! Contact form validation and submit-button feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has no backend. A valid submission is only logged; the user
//! sees a short "sent" state on the submit button before the form resets.
//! Validation is deliberately shallow: trimmed lengths and a
//! `local@domain.tld` shape for the email.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::ContactConfig;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_SHAPE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Form fields, named the way the page's `data-for` attributes name them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// A failed rule. `Display` is the inline message shown next to the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your name (min 2 chars).")]
    NameTooShort,
    #[error("Please enter a valid email.")]
    InvalidEmail,
    #[error("Message should be at least 10 characters.")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            Self::NameTooShort => Field::Name,
            Self::InvalidEmail => Field::Email,
            Self::MessageTooShort => Field::Message,
        }
    }
}

/// Trimmed field values that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Diagnostic record logged for a valid submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub time: &'a str,
}

impl ContactSubmission {
    pub fn record<'a>(&'a self, time: &'a str) -> SubmissionRecord<'a> {
        SubmissionRecord {
            name: &self.name,
            email: &self.email,
            message: &self.message,
            time,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_ok_and(|re| re.is_match(email))
}

/// Validate raw field values. Every failing field is reported, in form
/// order.
pub fn validate(name: &str, email: &str, message: &str) -> Result<ContactSubmission, Vec<FieldError>> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    let mut errors = Vec::new();
    if name.chars().count() < NAME_MIN_CHARS {
        errors.push(FieldError::NameTooShort);
    }
    if !is_valid_email(email) {
        errors.push(FieldError::InvalidEmail);
    }
    if message.chars().count() < MESSAGE_MIN_CHARS {
        errors.push(FieldError::MessageTooShort);
    }

    if errors.is_empty() {
        Ok(ContactSubmission {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    } else {
        Err(errors)
    }
}

/// Submit button state across a successful submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sent,
}

impl SubmitState {
    pub fn label(self, config: &ContactConfig) -> &str {
        match self {
            Self::Idle => &config.submit_label,
            Self::Sent => &config.sent_label,
        }
    }

    /// The button is disabled while sent, which blocks re-submission.
    pub fn is_disabled(self) -> bool {
        self == Self::Sent
    }

    pub fn accepts_submit(self) -> bool {
        self == Self::Idle
    }
}
