//! Image references and probed pixel dimensions.

use std::num::NonZeroU32;

/// Where an image's bytes come from.
///
/// Marketing content mixes bundled files (gallery shots under the assets
/// directory) with remotely hosted photography (room imagery). The loader
/// treats both uniformly; the variant only decides the fetch path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// A file path relative to the configured assets directory.
    Asset(String),
    /// An absolute `http(s)` URL.
    Remote(String),
}

impl ImageSource {
    /// Stable string key for caching and message routing.
    pub fn key(&self) -> &str {
        match self {
            ImageSource::Asset(path) => path,
            ImageSource::Remote(url) => url,
        }
    }
}

/// Non-zero pixel dimensions for a decoded image.
///
/// These are the authoritative width/height of the actual bytes, probed
/// lazily when the image loads. They exist purely to pick a display span
/// bucket; nothing correctness-bearing depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDimensionsError {
    ZeroWidth,
    ZeroHeight,
}

impl ImageDimensions {
    pub const fn new(width: NonZeroU32, height: NonZeroU32) -> Self {
        Self { width, height }
    }

    /// The 1:1 fallback used when a probe fails.
    pub const SQUARE: Self = Self {
        width: NonZeroU32::MIN,
        height: NonZeroU32::MIN,
    };

    pub const fn width_u32(self) -> u32 {
        self.width.get()
    }

    pub const fn height_u32(self) -> u32 {
        self.height.get()
    }

    pub fn aspect_ratio(self) -> f32 {
        self.width.get() as f32 / self.height.get() as f32
    }

    pub fn span_bucket(self) -> SpanBucket {
        SpanBucket::classify(self.aspect_ratio())
    }
}

impl TryFrom<(u32, u32)> for ImageDimensions {
    type Error = ImageDimensionsError;

    fn try_from(value: (u32, u32)) -> Result<Self, Self::Error> {
        let (width, height) = value;
        let width =
            NonZeroU32::new(width).ok_or(ImageDimensionsError::ZeroWidth)?;
        let height =
            NonZeroU32::new(height).ok_or(ImageDimensionsError::ZeroHeight)?;
        Ok(Self { width, height })
    }
}

/// Presentation-only grid placement for a gallery image.
///
/// Buckets follow the aspect ratio of the probed dimensions; images that
/// never probe successfully render as [`SpanBucket::Square`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanBucket {
    /// Ratio above 1.7: spans two columns.
    Wide,
    /// Ratio in (1.3, 1.7]: spans two columns on mid-size layouts.
    Landscape,
    /// Ratio below 0.7: spans two rows.
    Tall,
    /// Everything else renders in a single cell.
    Square,
}

impl SpanBucket {
    pub fn classify(aspect_ratio: f32) -> Self {
        if aspect_ratio > 1.7 {
            SpanBucket::Wide
        } else if aspect_ratio > 1.3 {
            SpanBucket::Landscape
        } else if aspect_ratio < 0.7 {
            SpanBucket::Tall
        } else {
            SpanBucket::Square
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> ImageDimensions {
        ImageDimensions::try_from((width, height)).unwrap()
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            ImageDimensions::try_from((0, 100)),
            Err(ImageDimensionsError::ZeroWidth)
        );
        assert_eq!(
            ImageDimensions::try_from((100, 0)),
            Err(ImageDimensionsError::ZeroHeight)
        );
    }

    #[test]
    fn buckets_follow_aspect_ratio() {
        assert_eq!(dims(1800, 1000).span_bucket(), SpanBucket::Wide);
        assert_eq!(dims(1500, 1000).span_bucket(), SpanBucket::Landscape);
        assert_eq!(dims(600, 1000).span_bucket(), SpanBucket::Tall);
        assert_eq!(dims(1000, 1000).span_bucket(), SpanBucket::Square);
        assert_eq!(dims(1200, 1000).span_bucket(), SpanBucket::Square);
    }

    #[test]
    fn fallback_is_square() {
        assert_eq!(ImageDimensions::SQUARE.span_bucket(), SpanBucket::Square);
        assert_eq!(ImageDimensions::SQUARE.aspect_ratio(), 1.0);
    }

    #[test]
    fn bucket_boundaries_are_exclusive_above() {
        // 1.7 and 1.3 exactly stay in the lower bucket.
        assert_eq!(SpanBucket::classify(1.7), SpanBucket::Landscape);
        assert_eq!(SpanBucket::classify(1.3), SpanBucket::Square);
        assert_eq!(SpanBucket::classify(0.7), SpanBucket::Square);
    }
}
