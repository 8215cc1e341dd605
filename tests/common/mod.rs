//! Common test utilities for the photopack integration tests.
//!
//! Fixtures are tiny in-memory PNG photos; solid fills keep encode/decode
//! cheap while distinct colors make each catalog position identifiable.

use std::io::Cursor;

use grid_compose::Photo;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// Encode a solid-color PNG photo of the given size.
pub fn solid_photo(width: u32, height: u32, rgb: [u8; 3]) -> Photo {
    let img = RgbImage::from_pixel(width, height, Rgb(rgb));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("png encode");
    Photo::from_bytes(bytes, "png").expect("png decode")
}

/// A catalog of `count` photos with per-position colors, 24×18 px each.
pub fn catalog(count: usize) -> Vec<Photo> {
    (0..count)
        .map(|i| solid_photo(24, 18, [(i * 7 % 256) as u8, (i * 29 % 256) as u8, 80]))
        .collect()
}

/// Byte-level equality between two photos.
pub fn same_photo(a: &Photo, b: &Photo) -> bool {
    a.bytes() == b.bytes()
}
