//! Booking dialog form state.

use coolstay_model::{BookingRequest, Room, RoomId, SubmissionState};
use iced::widget::text_editor;

/// Shown under the success heading when the relay sends no wording of
/// its own.
pub const DEFAULT_CONFIRMATION: &str = "We will contact you soon.";

/// One open booking dialog. Dropped entirely when the dialog closes;
/// reopening always starts from a blank form.
#[derive(Debug)]
pub struct BookingForm {
    pub room_id: RoomId,
    pub room_name: String,
    pub name: String,
    pub phone: String,
    pub message: text_editor::Content,
    pub submission: SubmissionState,
    /// Relay confirmation wording, kept for the success panel.
    pub confirmation: Option<String>,
}

impl BookingForm {
    pub fn for_room(room: &Room) -> Self {
        Self {
            room_id: room.id,
            room_name: room.name.clone(),
            name: String::new(),
            phone: String::new(),
            message: text_editor::Content::new(),
            submission: SubmissionState::Idle,
            confirmation: None,
        }
    }

    /// Wire request for the current field values. The optional message
    /// is dropped when blank.
    pub fn request(&self) -> BookingRequest {
        let message = self.message.text();
        let message = message.trim();

        BookingRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            message: (!message.is_empty()).then(|| message.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family_room() -> Room {
        crate::content::rooms()
            .into_iter()
            .next()
            .expect("catalog has rooms")
    }

    #[test]
    fn blank_message_is_omitted_from_the_request() {
        let mut form = BookingForm::for_room(&family_room());
        form.name = "Asha".to_owned();
        form.phone = "+91 9876543210".to_owned();
        form.message = text_editor::Content::with_text("  \n ");

        let request = form.request();
        assert_eq!(request.message, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn message_text_is_trimmed_into_the_request() {
        let mut form = BookingForm::for_room(&family_room());
        form.name = "Asha".to_owned();
        form.phone = "+91 9876543210".to_owned();
        form.message =
            text_editor::Content::with_text("Arriving late.\n");

        assert_eq!(
            form.request().message.as_deref(),
            Some("Arriving late.")
        );
    }
}
