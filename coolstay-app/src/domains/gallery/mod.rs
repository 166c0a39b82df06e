//! Gallery domain: the photo grid page and its lightbox.

pub mod messages;
pub mod state;
pub mod update;
pub mod views;

use std::sync::Arc;

use iced::Task;
use log::info;

use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::domains::Domain;
use crate::domains::ui::ViewId;
use crate::infrastructure::assets::AssetLoader;

pub use messages::Message;
pub use state::GalleryState;

#[derive(Debug)]
pub struct GalleryDomain {
    pub state: GalleryState,
    loader: Arc<AssetLoader>,
}

impl GalleryDomain {
    pub fn new(loader: Arc<AssetLoader>) -> Self {
        Self {
            state: GalleryState::new(),
            loader,
        }
    }
}

impl Domain for GalleryDomain {
    type Message = Message;

    fn update(&mut self, message: Message) -> DomainUpdateResult {
        update::update(&mut self.state, message)
    }

    fn handle_event(
        &mut self,
        event: &CrossDomainEvent,
    ) -> Task<DomainMessage> {
        match event {
            // Photo loads are deferred to the first gallery visit.
            CrossDomainEvent::ViewOpened(ViewId::Gallery)
                if !self.state.probing_started =>
            {
                self.state.probing_started = true;
                info!(
                    "[Gallery] loading {} images",
                    self.state.images.len()
                );

                let loads = self.state.images.iter().map(|image| {
                    let loader = Arc::clone(&self.loader);
                    let source = image.source.clone();
                    let id = image.id;
                    Task::perform(
                        async move { loader.load(&source).await },
                        move |loaded| {
                            Message::ImageProbed {
                                id,
                                handle: loaded.handle,
                                dimensions: loaded.dimensions,
                            }
                            .into()
                        },
                    )
                });
                Task::batch(loads)
            }
            _ => Task::none(),
        }
    }
}
