// SPDX-License-Identifier: MIT
//! Opaque photo handle and blank-tile synthesis.
//!
//! A [`Photo`] carries its encoded bytes plus the decoded pixel dimensions
//! and a file-extension hint. It is immutable once created and moves by
//! value through the pipeline; every compositing or resizing step produces
//! a freshly allocated `Photo` rather than mutating an existing one.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageFormat, Rgb, RgbImage};

use crate::error::ComposeError;

/// Nominal size of a synthesized blank tile. The exact dimensions are
/// unimportant since every grid cell is stretch-fit anyway.
pub const BLANK_TILE_WIDTH: u32 = 800;
pub const BLANK_TILE_HEIGHT: u32 = 600;

/// Output dimensions in pixels for composites and resized photos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetSize {
    width: u32,
    height: u32,
}

impl TargetSize {
    /// Both sides must be at least 1 pixel.
    pub fn new(width: u32, height: u32) -> Result<Self, ComposeError> {
        if width == 0 || height == 0 {
            return Err(ComposeError::BadTargetSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// An encoded raster image with declared dimensions and an extension hint.
#[derive(Clone, Debug)]
pub struct Photo {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
    ext: String,
}

impl Photo {
    /// Wrap encoded image bytes, decoding once to learn the dimensions.
    ///
    /// `ext` is a file-extension hint ("jpeg", "png", ...) used when the
    /// photo is later re-encoded; decoding itself sniffs the real format
    /// from the bytes.
    pub fn from_bytes(bytes: Vec<u8>, ext: impl Into<String>) -> Result<Self, ComposeError> {
        let decoded = image::load_from_memory(&bytes).map_err(ComposeError::Decode)?;
        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            ext: ext.into(),
            bytes,
        })
    }

    pub(crate) fn from_encoded(bytes: Vec<u8>, width: u32, height: u32, ext: &str) -> Self {
        Self {
            bytes,
            width,
            height,
            ext: ext.to_string(),
        }
    }

    /// Synthesize a solid-white placeholder photo used to pad undersized
    /// merge groups up to 4 grid slots.
    pub fn blank_tile() -> Result<Self, ComposeError> {
        let canvas = RgbImage::from_pixel(BLANK_TILE_WIDTH, BLANK_TILE_HEIGHT, Rgb([255, 255, 255]));
        let bytes = encode_rgb(
            canvas.as_raw(),
            BLANK_TILE_WIDTH,
            BLANK_TILE_HEIGHT,
            ImageFormat::Jpeg,
        )?;
        Ok(Self::from_encoded(bytes, BLANK_TILE_WIDTH, BLANK_TILE_HEIGHT, "jpeg"))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// File-extension hint for persisting or re-encoding this photo.
    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// The `image` format matching the extension hint, defaulting to JPEG
    /// when the hint is missing or unknown.
    pub fn format(&self) -> ImageFormat {
        ImageFormat::from_extension(&self.ext).unwrap_or(ImageFormat::Jpeg)
    }
}

/// Encode a tightly-packed RGB8 buffer in the given format.
///
/// JPEG goes through `JpegEncoder` pinned at maximum quality; the original
/// catalog photos are what sellers upload, so recompression loss is kept as
/// small as the format allows. Other formats use their default encoder
/// settings.
pub(crate) fn encode_rgb(
    rgb: &[u8],
    width: u32,
    height: u32,
    format: ImageFormat,
) -> Result<Vec<u8>, ComposeError> {
    let mut out = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => {
            let mut encoder = JpegEncoder::new_with_quality(&mut out, 100);
            encoder
                .encode(rgb, width, height, ExtendedColorType::Rgb8)
                .map_err(ComposeError::Encode)?;
        }
        other => {
            image::write_buffer_with_format(
                &mut out,
                rgb,
                width,
                height,
                ExtendedColorType::Rgb8,
                other,
            )
            .map_err(ComposeError::Encode)?;
        }
    }
    Ok(out.into_inner())
}
