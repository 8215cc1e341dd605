// SPDX-License-Identifier: MIT
//! Stretch-fit resizing of single photos.

use fast_image_resize::Resizer;

use crate::error::ComposeError;
use crate::photo::{encode_rgb, Photo, TargetSize};
use crate::raster::stretch_rgb_into;

/// Stretch `photo` to exactly `target` dimensions.
///
/// No cropping and no letterboxing; the aspect ratio is allowed to change.
/// The result is re-encoded in the source's format (per its extension hint),
/// at maximum quality for JPEG, so a whole photo set keeps uniform encoding
/// behavior across every resize call.
pub fn stretch_fit(photo: &Photo, target: TargetSize) -> Result<Photo, ComposeError> {
    let src = image::load_from_memory(photo.bytes())
        .map_err(ComposeError::Decode)?
        .to_rgb8();

    let mut canvas = vec![0u8; target.width() as usize * target.height() as usize * 3];
    let mut resizer = Resizer::new();
    stretch_rgb_into(
        &mut resizer,
        src.as_raw(),
        src.width(),
        src.height(),
        &mut canvas,
        target.width(),
        target.height(),
        None,
    )?;

    let bytes = encode_rgb(&canvas, target.width(), target.height(), photo.format())?;
    Ok(Photo::from_encoded(bytes, target.width(), target.height(), photo.ext()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn solid(w: u32, h: u32) -> Photo {
        let img = RgbImage::from_pixel(w, h, Rgb([120, 80, 40]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        Photo::from_bytes(bytes, "png").unwrap()
    }

    #[test]
    fn stretch_fit_hits_exact_target() {
        let photo = solid(37, 91);
        let target = TargetSize::new(160, 90).unwrap();
        let out = stretch_fit(&photo, target).unwrap();
        assert_eq!((out.width(), out.height()), (160, 90));
    }

    #[test]
    fn stretch_fit_keeps_source_format() {
        let photo = solid(20, 20);
        let out = stretch_fit(&photo, TargetSize::new(10, 10).unwrap()).unwrap();
        assert_eq!(out.ext(), "png");
        assert_eq!(
            image::guess_format(out.bytes()).unwrap(),
            image::ImageFormat::Png
        );
        // Resampling a solid fill stays within rounding of the fill color.
        let decoded = image::load_from_memory(out.bytes()).unwrap().to_rgb8();
        let px = decoded.get_pixel(5, 5);
        assert!((px[0] as i32 - 120).abs() <= 1);
        assert!((px[1] as i32 - 80).abs() <= 1);
        assert!((px[2] as i32 - 40).abs() <= 1);
    }
}
