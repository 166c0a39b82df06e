//! Gallery domain state.

use std::collections::HashMap;

use coolstay_model::{GalleryImage, GalleryImageId, SpanBucket};

use crate::content;
use crate::infrastructure::assets::LoadedImage;

#[derive(Debug)]
pub struct GalleryState {
    pub images: Vec<GalleryImage>,
    /// Loaded bytes and probed dimensions, filled in as loads land.
    pub loaded: HashMap<GalleryImageId, LoadedImage>,
    /// `Some` while the lightbox is open.
    pub lightbox: Option<GalleryImageId>,
    /// Loads fire once, on the first gallery visit.
    pub probing_started: bool,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            images: content::gallery_images(),
            loaded: HashMap::new(),
            lightbox: None,
            probing_started: false,
        }
    }

    pub fn image(&self, id: GalleryImageId) -> Option<&GalleryImage> {
        self.images.iter().find(|image| image.id == id)
    }

    pub fn photo(&self, id: GalleryImageId) -> Option<&LoadedImage> {
        self.loaded.get(&id)
    }

    /// Grid placement for an image; unprobed images sit in a single
    /// square cell.
    pub fn span(&self, id: GalleryImageId) -> SpanBucket {
        self.loaded
            .get(&id)
            .map(|photo| photo.dimensions.span_bucket())
            .unwrap_or(SpanBucket::Square)
    }

    pub fn lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coolstay_model::ImageDimensions;
    use crate::infrastructure::assets::placeholder_handle;

    #[test]
    fn unprobed_images_default_to_square() {
        let state = GalleryState::new();
        let first = state.images[0].id;
        assert_eq!(state.span(first), SpanBucket::Square);
    }

    #[test]
    fn span_follows_probed_dimensions() {
        let mut state = GalleryState::new();
        let first = state.images[0].id;
        state.loaded.insert(
            first,
            LoadedImage {
                handle: placeholder_handle(),
                dimensions: ImageDimensions::try_from((1800, 900))
                    .unwrap(),
            },
        );
        assert_eq!(state.span(first), SpanBucket::Wide);
    }
}
