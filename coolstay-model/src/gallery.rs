//! Gallery catalog types.

use crate::image::ImageSource;

/// Stable identifier for a gallery image within the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GalleryImageId(pub u32);

/// One photograph in the gallery grid.
///
/// Dimensions are not part of the catalog; they are probed from the actual
/// bytes after loading and tracked by the gallery domain.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: GalleryImageId,
    pub source: ImageSource,
    pub caption: String,
}
