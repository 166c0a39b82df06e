//! Gallery domain messages.

use coolstay_model::{GalleryImageId, ImageDimensions};
use iced::widget::image;

/// Gallery grid loads and lightbox selection.
#[derive(Clone)]
pub enum Message {
    /// One image finished loading and probing.
    ImageProbed {
        id: GalleryImageId,
        handle: image::Handle,
        dimensions: ImageDimensions,
    },
    /// A grid tile was clicked open.
    Open(GalleryImageId),
    CloseLightbox,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ImageProbed { .. } => "Gallery::ImageProbed",
            Self::Open(_) => "Gallery::Open",
            Self::CloseLightbox => "Gallery::CloseLightbox",
        }
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageProbed { id, dimensions, .. } => write!(
                f,
                "Gallery::ImageProbed({id:?}, {}x{})",
                dimensions.width_u32(),
                dimensions.height_u32(),
            ),
            Self::Open(id) => write!(f, "Gallery::Open({id:?})"),
            Self::CloseLightbox => write!(f, "Gallery::CloseLightbox"),
        }
    }
}
