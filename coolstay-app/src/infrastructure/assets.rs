//! Image loading and dimension probing.
//!
//! [`AssetLoader`] resolves an [`ImageSource`] into displayable bytes
//! plus the probed natural dimensions. Everything here is best-effort:
//! a source that cannot be read or decoded degrades to a neutral
//! placeholder with 1:1 dimensions and a warning in the log, never an
//! error on screen.

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use coolstay_model::{ImageDimensions, ImageSource};
use iced::widget::image::Handle;
use image::ImageReader;
use log::warn;

/// Display handle plus the dimensions probed from the same bytes.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub dimensions: ImageDimensions,
}

/// Resolves image sources against the assets directory or the network.
#[derive(Debug)]
pub struct AssetLoader {
    assets_dir: PathBuf,
    client: reqwest::Client,
}

impl AssetLoader {
    pub fn new(assets_dir: PathBuf) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self { assets_dir, client }
    }

    /// Load a source, falling back to the placeholder on any failure.
    pub async fn load(&self, source: &ImageSource) -> LoadedImage {
        match self.try_load(source).await {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!(
                    "[Assets] could not load {}: {err:#}",
                    source.key()
                );
                LoadedImage {
                    handle: placeholder_handle(),
                    dimensions: ImageDimensions::SQUARE,
                }
            }
        }
    }

    async fn try_load(&self, source: &ImageSource) -> Result<LoadedImage> {
        let bytes = self.fetch(source).await?;

        // A probe failure alone does not discard the bytes; the image
        // still displays, just in the square bucket.
        let dimensions = match probe_dimensions(&bytes) {
            Ok(dimensions) => dimensions,
            Err(err) => {
                warn!(
                    "[Assets] could not probe {}: {err:#}",
                    source.key()
                );
                ImageDimensions::SQUARE
            }
        };

        Ok(LoadedImage {
            handle: Handle::from_bytes(bytes),
            dimensions,
        })
    }

    async fn fetch(&self, source: &ImageSource) -> Result<Vec<u8>> {
        match source {
            ImageSource::Asset(path) => {
                let full = self.assets_dir.join(path);
                tokio::fs::read(&full).await.with_context(|| {
                    format!("reading {}", full.display())
                })
            }
            ImageSource::Remote(url) => {
                let response = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .with_context(|| format!("requesting {url}"))?
                    .error_for_status()
                    .with_context(|| format!("fetching {url}"))?;

                let bytes = response
                    .bytes()
                    .await
                    .with_context(|| format!("downloading {url}"))?;
                Ok(bytes.to_vec())
            }
        }
    }
}

/// Read the pixel dimensions out of an encoded image's header.
pub fn probe_dimensions(bytes: &[u8]) -> Result<ImageDimensions> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("unrecognized image format")?
        .into_dimensions()
        .context("decoding image header")?;

    ImageDimensions::try_from((width, height))
        .map_err(|_| anyhow!("image reports a zero dimension"))
}

/// Neutral 1x1 pixel shown when an image cannot be loaded.
pub fn placeholder_handle() -> Handle {
    Handle::from_rgba(1, 1, vec![229, 223, 214, 255])
}
