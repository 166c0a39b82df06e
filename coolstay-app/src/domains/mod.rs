//! Domain modules for the Coolstay app
//!
//! This module organizes the application into domain-driven modules,
//! breaking up state and update logic into focused, testable domains.

pub mod contact;
pub mod gallery;
pub mod rooms;
pub mod ui;

use std::sync::Arc;

use iced::Task;

use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::infrastructure::assets::AssetLoader;
use crate::infrastructure::inquiry::InquiryService;

/// Domain trait that all domains must implement
/// Provides a unified interface for updating domain state
pub trait Domain {
    /// The message type for this domain
    type Message;

    /// Update the domain state based on a message
    /// Returns a DomainUpdateResult containing a task and events to emit
    fn update(&mut self, message: Self::Message) -> DomainUpdateResult;

    /// Handle a cross-domain event
    /// Returns a Task that will produce domain messages
    fn handle_event(&mut self, event: &CrossDomainEvent)
    -> Task<DomainMessage>;
}

/// Domain registry that manages all domain states
#[derive(Debug)]
pub struct DomainRegistry {
    pub ui: ui::UiDomain,
    pub rooms: rooms::RoomsDomain,
    pub contact: contact::ContactDomain,
    pub gallery: gallery::GalleryDomain,
}

impl DomainRegistry {
    pub fn new(
        window_size: iced::Size,
        inquiry: Arc<dyn InquiryService>,
        loader: Arc<AssetLoader>,
    ) -> Self {
        Self {
            ui: ui::UiDomain::new(window_size),
            rooms: rooms::RoomsDomain::new(Arc::clone(&inquiry)),
            contact: contact::ContactDomain::new(inquiry),
            gallery: gallery::GalleryDomain::new(loader),
        }
    }

    /// Handle a cross-domain event by notifying all domains, the
    /// originator included.
    pub fn handle_event(
        &mut self,
        event: &CrossDomainEvent,
    ) -> Task<DomainMessage> {
        let tasks = vec![
            self.ui.handle_event(event),
            self.rooms.handle_event(event),
            self.contact.handle_event(event),
            self.gallery.handle_event(event),
        ];

        Task::batch(tasks)
    }
}
