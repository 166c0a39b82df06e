//! Inquiry wire types and the form submission state machine.
//!
//! Both forms post JSON to the inquiry relay and read back the unified
//! [`ApiReply`] contract. Validation is synchronous and local; a request
//! that fails validation never reaches the network.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Accepts `local@domain.tld` shapes without trying to be RFC-complete.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .unwrap_or_else(|err| panic!("email pattern must compile: {err}"))
});

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns whether `value` looks like a deliverable email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Booking inquiry posted from the room dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BookingRequest {
    /// Checks the required fields; returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.name) {
            return Err(ValidationError::MissingField("name"));
        }
        if is_blank(&self.phone) {
            return Err(ValidationError::MissingField("phone number"));
        }
        Ok(())
    }
}

/// Contact message posted from the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Checks the required fields; returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.name) {
            return Err(ValidationError::MissingField("name"));
        }
        if is_blank(&self.email) {
            return Err(ValidationError::MissingField("email"));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if is_blank(&self.message) {
            return Err(ValidationError::MissingField("message"));
        }
        Ok(())
    }
}

/// Unified relay response body.
///
/// Successful replies carry confirmation wording in `message`; failures
/// put their reason in `error`. Older relays reported failures through
/// `message` as well, so [`ApiReply::failure`] falls back to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiReply {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ApiReply {
    /// Confirmation wording for a 2xx reply, if the relay sent any.
    pub fn confirmation(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Best available failure wording; `error` wins over `message`.
    pub fn failure(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// Lifecycle of one form instance.
///
/// `Failed` is sticky until the next submit; the entered values are
/// preserved so the visitor can correct and retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmissionState::Succeeded)
    }

    /// Whether the submit control should accept another attempt.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed(_))
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
