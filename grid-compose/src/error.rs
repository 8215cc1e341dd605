// SPDX-License-Identifier: MIT
// Error type for the raster layer. Wraps decode/encode failures from the
// `image` crate and scaling failures from fast_image_resize.

use fast_image_resize as fir;

#[derive(Debug)]
pub enum ComposeError {
    /// Target dimensions must both be at least 1 pixel.
    BadTargetSize { width: u32, height: u32 },
    /// Padded 2x2 composition accepts groups of 2 to 4 photos.
    BadGroupSize { got: usize },
    /// Square-grid composition requires a perfect-square photo count.
    NotSquareCount { got: usize },
    /// Input bytes could not be decoded as a raster image.
    Decode(image::ImageError),
    /// The output image could not be encoded.
    Encode(image::ImageError),
    Resize(fir::ResizeError),
    ImageBuf(fir::ImageBufferError),
    Crop(fir::CropBoxError),
}

impl From<fir::ResizeError> for ComposeError {
    fn from(e: fir::ResizeError) -> Self {
        Self::Resize(e)
    }
}
impl From<fir::ImageBufferError> for ComposeError {
    fn from(e: fir::ImageBufferError) -> Self {
        Self::ImageBuf(e)
    }
}
impl From<fir::CropBoxError> for ComposeError {
    fn from(e: fir::CropBoxError) -> Self {
        Self::Crop(e)
    }
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComposeError::BadTargetSize { width, height } => {
                write!(f, "Target size {}x{} is invalid (both sides must be >= 1)", width, height)
            }
            ComposeError::BadGroupSize { got } => {
                write!(f, "Merge group must hold 2 to 4 photos, got {}", got)
            }
            ComposeError::NotSquareCount { got } => {
                write!(f, "Square-grid composition needs a perfect-square photo count, got {}", got)
            }
            ComposeError::Decode(e) => write!(f, "Image decode failed: {}", e),
            ComposeError::Encode(e) => write!(f, "Image encode failed: {}", e),
            ComposeError::Resize(e) => write!(f, "Fast image resize error: {}", e),
            ComposeError::ImageBuf(e) => write!(f, "Image buffer error: {}", e),
            ComposeError::Crop(e) => write!(f, "Crop error: {}", e),
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComposeError::Decode(e) | ComposeError::Encode(e) => Some(e),
            ComposeError::Resize(e) => Some(e),
            ComposeError::ImageBuf(e) => Some(e),
            ComposeError::Crop(e) => Some(e),
            _ => None,
        }
    }
}
