//! Gallery domain update logic.

use log::debug;

use super::messages::Message;
use super::state::GalleryState;
use crate::common::messages::DomainUpdateResult;
use crate::infrastructure::assets::LoadedImage;

pub fn update(
    state: &mut GalleryState,
    message: Message,
) -> DomainUpdateResult {
    match message {
        Message::ImageProbed {
            id,
            handle,
            dimensions,
        } => {
            state.loaded.insert(
                id,
                LoadedImage {
                    handle,
                    dimensions,
                },
            );
            DomainUpdateResult::none()
        }

        Message::Open(id) => {
            if state.image(id).is_some() {
                debug!("[Gallery] opening lightbox for {id:?}");
                state.lightbox = Some(id);
            }
            DomainUpdateResult::none()
        }

        Message::CloseLightbox => {
            state.lightbox = None;
            DomainUpdateResult::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coolstay_model::GalleryImageId;

    #[test]
    fn lightbox_only_opens_for_catalog_images() {
        let mut state = GalleryState::new();
        let known = state.images[0].id;

        update(&mut state, Message::Open(GalleryImageId(999)));
        assert!(!state.lightbox_open());

        update(&mut state, Message::Open(known));
        assert_eq!(state.lightbox, Some(known));

        update(&mut state, Message::CloseLightbox);
        assert!(!state.lightbox_open());
    }
}
