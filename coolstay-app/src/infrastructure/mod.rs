//! Infrastructure shared by the domains: the inquiry relay client and
//! the image asset loader.

pub mod assets;
pub mod inquiry;

pub use assets::{AssetLoader, LoadedImage};
pub use inquiry::{
    HttpInquiryService, InquiryError, InquiryResult, InquiryService,
};
