// SPDX-License-Identifier: MIT
// CPU scaler built on fast_image_resize (SIMD-accelerated).
// RGB8 in → RGB8 out, written straight into a caller-provided canvas, either
// filling it entirely or landing in one rectangular cell of it.

use fast_image_resize as fir;
use fir::images::{TypedCroppedImageMut, TypedImage, TypedImageRef};
use fir::pixels::U8x3;
use fir::{ResizeOptions, Resizer};

use crate::error::ComposeError;

/// Destination cell in canvas coordinates: (x, y, w, h).
pub(crate) type CellRect = (u32, u32, u32, u32);

/// Stretch-fit a tightly-packed RGB8 source into a region of `canvas`.
///
/// `canvas` must be exactly `canvas_w * canvas_h * 3` bytes. When `cell` is
/// `None` the source fills the whole canvas; otherwise it is resized into
/// the given sub-rectangle and the rest of the canvas is left untouched.
/// Aspect ratio is not preserved.
pub(crate) fn stretch_rgb_into(
    resizer: &mut Resizer,
    src_rgb: &[u8],
    src_w: u32,
    src_h: u32,
    canvas: &mut [u8],
    canvas_w: u32,
    canvas_h: u32,
    cell: Option<CellRect>,
) -> Result<(), ComposeError> {
    let src_view = TypedImageRef::<U8x3>::from_buffer(src_w, src_h, src_rgb)?;
    let mut dst_image = TypedImage::<U8x3>::from_buffer(canvas_w, canvas_h, canvas)?;

    let opts = ResizeOptions::new().use_alpha(false);

    match cell {
        Some((x, y, w, h)) => {
            let mut roi = TypedCroppedImageMut::from_ref(&mut dst_image, x, y, w, h)?;
            resizer.resize_typed::<U8x3>(&src_view, &mut roi, &opts)?;
        }
        None => {
            resizer.resize_typed::<U8x3>(&src_view, &mut dst_image, &opts)?;
        }
    }

    Ok(())
}

/// Solid fill for a fresh RGB8 canvas.
#[inline]
pub(crate) fn fill_rgb(canvas: &mut [u8], rgb: [u8; 3]) {
    for px in canvas.chunks_exact_mut(3) {
        px.copy_from_slice(&rgb);
    }
}
