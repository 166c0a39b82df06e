//! Rooms domain: showcase carousel, listing cards, and the booking
//! dialog.

pub mod booking;
pub mod carousel;
pub mod messages;
pub mod state;
pub mod update;
pub mod views;

use std::sync::Arc;

use iced::Task;

use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::domains::Domain;
use crate::infrastructure::inquiry::InquiryService;

pub use messages::Message;
pub use state::RoomsState;

#[derive(Debug)]
pub struct RoomsDomain {
    pub state: RoomsState,
    inquiry: Arc<dyn InquiryService>,
}

impl RoomsDomain {
    pub fn new(inquiry: Arc<dyn InquiryService>) -> Self {
        Self {
            state: RoomsState::new(),
            inquiry,
        }
    }
}

impl Domain for RoomsDomain {
    type Message = Message;

    fn update(&mut self, message: Message) -> DomainUpdateResult {
        update::update(&mut self.state, &self.inquiry, message)
    }

    fn handle_event(
        &mut self,
        _event: &CrossDomainEvent,
    ) -> Task<DomainMessage> {
        Task::none()
    }
}
