//! Rooms domain messages.

use coolstay_model::RoomId;
use iced::widget::{image, text_editor};

/// Showcase carousel, listing cards, and booking dialog messages.
#[derive(Clone)]
pub enum Message {
    // Showcase carousel
    ShowcaseNext,
    ShowcasePrevious,
    ShowcaseGoTo(usize),
    /// Auto-advance tick, active only while the showcase is on screen.
    ShowcaseAdvance,
    /// The slide's call to action: jump down to the room listing.
    ShowcaseBookNow,

    // Listing cards
    /// Pointer entered (`true`) or left (`false`) a card.
    CardHovered(RoomId, bool),
    /// Hover auto-advance tick for the hovered card's image strip.
    CardAdvance,
    CardGoTo(RoomId, usize),

    // Booking dialog
    OpenBookingDialog(RoomId),
    CloseBookingDialog,
    BookingNameChanged(String),
    BookingPhoneChanged(String),
    BookingMessageEdited(text_editor::Action),
    SubmitBooking,
    /// Relay outcome: `Ok` carries optional confirmation wording,
    /// `Err` the user-facing failure reason.
    BookingCompleted(Result<Option<String>, String>),
    /// Delayed wipe after a successful booking.
    BookingReset,

    // Boot image loads
    ImageLoaded {
        key: String,
        handle: image::Handle,
    },
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShowcaseNext => "Rooms::ShowcaseNext",
            Self::ShowcasePrevious => "Rooms::ShowcasePrevious",
            Self::ShowcaseGoTo(_) => "Rooms::ShowcaseGoTo",
            Self::ShowcaseAdvance => "Rooms::ShowcaseAdvance",
            Self::ShowcaseBookNow => "Rooms::ShowcaseBookNow",
            Self::CardHovered(..) => "Rooms::CardHovered",
            Self::CardAdvance => "Rooms::CardAdvance",
            Self::CardGoTo(..) => "Rooms::CardGoTo",
            Self::OpenBookingDialog(_) => "Rooms::OpenBookingDialog",
            Self::CloseBookingDialog => "Rooms::CloseBookingDialog",
            Self::BookingNameChanged(_) => "Rooms::BookingNameChanged",
            Self::BookingPhoneChanged(_) => "Rooms::BookingPhoneChanged",
            Self::BookingMessageEdited(_) => "Rooms::BookingMessageEdited",
            Self::SubmitBooking => "Rooms::SubmitBooking",
            Self::BookingCompleted(_) => "Rooms::BookingCompleted",
            Self::BookingReset => "Rooms::BookingReset",
            Self::ImageLoaded { .. } => "Rooms::ImageLoaded",
        }
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShowcaseGoTo(index) => {
                write!(f, "Rooms::ShowcaseGoTo({index})")
            }
            Self::CardHovered(id, entered) => {
                write!(f, "Rooms::CardHovered({id:?}, {entered})")
            }
            Self::CardGoTo(id, index) => {
                write!(f, "Rooms::CardGoTo({id:?}, {index})")
            }
            Self::OpenBookingDialog(id) => {
                write!(f, "Rooms::OpenBookingDialog({id:?})")
            }
            Self::BookingCompleted(outcome) => {
                write!(f, "Rooms::BookingCompleted({outcome:?})")
            }
            Self::ImageLoaded { key, .. } => {
                write!(f, "Rooms::ImageLoaded({key})")
            }
            other => write!(f, "{}", other.name()),
        }
    }
}
