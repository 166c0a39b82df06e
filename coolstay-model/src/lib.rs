//! Core data model definitions shared across Coolstay crates.

pub mod error;
pub mod gallery;
pub mod image;
pub mod inquiry;
pub mod room;

// Intentionally curated re-exports for downstream consumers.
pub use error::{Result as ModelResult, ValidationError};
pub use gallery::{GalleryImage, GalleryImageId};
pub use image::{
    ImageDimensions, ImageDimensionsError, ImageSource, SpanBucket,
};
pub use inquiry::{
    ApiReply, BookingRequest, ContactRequest, SubmissionState,
};
pub use room::{Room, RoomId};
