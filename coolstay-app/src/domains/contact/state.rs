//! Contact domain state.

use coolstay_model::{ContactRequest, SubmissionState};
use iced::widget::text_editor;

/// Toast wording when the relay confirms without a message of its own.
pub const DEFAULT_CONFIRMATION: &str =
    "Message sent! We will get back to you soon.";

#[derive(Debug, Default)]
pub struct ContactState {
    pub name: String,
    pub email: String,
    pub message: text_editor::Content,
    pub submission: SubmissionState,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire request for the current field values.
    pub fn request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.text().trim().to_owned(),
        }
    }

    /// Wipe the fields after the success panel has had its moment.
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message = text_editor::Content::new();
    }
}
