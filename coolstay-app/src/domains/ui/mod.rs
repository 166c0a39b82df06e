//! Ui domain: page chrome, navigation, scroll reveals, and toasts.
//!
//! Everything that is not hotel content lives here: which top-level
//! view is showing, where the landing page is scrolled to, which
//! sections have revealed, the hero entrance, the mobile menu, and the
//! toast overlay.

pub mod layout;
pub mod messages;
pub mod reveal;
pub mod state;
pub mod toast;
pub mod transitions;
pub mod update;
pub mod views;

use std::time::Instant;

use iced::widget::scrollable;
use iced::{Size, Task};

use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::domains::Domain;

pub use messages::Message;
pub use state::UiState;

/// Top-level views the navbar routes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Landing,
    Gallery,
}

/// Id of the landing page scrollable, shared between the view and the
/// scroll tasks issued from the update loop.
pub fn landing_scroll_id() -> scrollable::Id {
    scrollable::Id::new("landing-scroll")
}

#[derive(Debug)]
pub struct UiDomain {
    pub state: UiState,
}

impl UiDomain {
    pub fn new(window_size: Size) -> Self {
        Self {
            state: UiState::new(window_size),
        }
    }
}

impl Domain for UiDomain {
    type Message = Message;

    fn update(&mut self, message: Message) -> DomainUpdateResult {
        update::update(&mut self.state, message)
    }

    fn handle_event(
        &mut self,
        event: &CrossDomainEvent,
    ) -> Task<DomainMessage> {
        match event {
            CrossDomainEvent::Notify(level, text) => {
                self.state.toasts.push(
                    *level,
                    text.clone(),
                    Instant::now(),
                );
                Task::none()
            }
            CrossDomainEvent::ScrollToSection(section) => {
                Task::done(Message::NavigateToSection(*section).into())
            }
            CrossDomainEvent::ViewOpened(_) => Task::none(),
        }
    }
}
