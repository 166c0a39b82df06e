//! Contact domain: the inquiry form and the static info card.

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
pub use state::ContactState;

#[derive(Debug)]
pub struct ContactDomain {
    pub state: ContactState,
    inquiry: Arc<dyn InquiryService>,
}

impl ContactDomain {
    pub fn new(inquiry: Arc<dyn InquiryService>) -> Self {
        Self {
            state: ContactState::new(),
            inquiry,
        }
    }
}

impl Domain for ContactDomain {
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
