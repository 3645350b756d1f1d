use std::path::Path;

use image::DynamicImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

/// One pixel, expanded to four 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// Gray images repeat the single channel into red, green and blue.
    /// A missing alpha channel reads as fully opaque.
    fn from_channels(channels: &[u8]) -> Self {
        match *channels {
            [gray] => Self::new(gray, gray, gray, u8::MAX),
            [gray, alpha] => Self::new(gray, gray, gray, alpha),
            [red, green, blue] => Self::new(red, green, blue, u8::MAX),
            [red, green, blue, alpha, ..] => Self::new(red, green, blue, alpha),
            [] => Self::default(),
        }
    }

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha == u8::MAX
    }
}

/// A decoded raster image with 8-bit channels, stored row-major.
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl RasterImage {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_dynamic(image::open(path)?)
    }

    /// 8-bit gray, gray+alpha, RGB and RGBA images keep their layout;
    /// everything else is converted to RGBA.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self, LoadError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(LoadError::Empty { width, height });
        }

        let (channels, data) = match image {
            DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
            other => (4, other.to_rgba8().into_raw()),
        };
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Wrap raw row-major samples. Returns `None` for a zero-area image, a
    /// channel count outside 1 to 4, or a buffer that does not match the
    /// dimensions.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 || !(1..=4).contains(&channels) {
            return None;
        }
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(channels as usize)?;
        if data.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channel_count(&self) -> u8 {
        self.channels
    }

    pub fn has_color(&self) -> bool {
        self.channels >= 3
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 2 || self.channels == 4
    }

    /// Raw channel samples of one pixel.
    pub fn pixel(&self, row: u32, col: u32) -> Option<&[u8]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let channels = self.channels as usize;
        let start = (row as usize * self.width as usize + col as usize) * channels;
        self.data.get(start..start + channels)
    }

    pub fn rgba(&self, row: u32, col: u32) -> Option<Rgba> {
        self.pixel(row, col).map(Rgba::from_channels)
    }

    /// Like [`rgba`](Self::rgba), but out-of-range coordinates are clamped
    /// to the nearest edge pixel. Every constructor rejects zero-area
    /// images, so there is always one.
    pub fn rgba_clamped(&self, row: i64, col: i64) -> Rgba {
        let row = row.clamp(0, i64::from(self.height) - 1) as u32;
        let col = col.clamp(0, i64::from(self.width) - 1) as u32;
        self.rgba(row, col).unwrap_or_default()
    }
}
