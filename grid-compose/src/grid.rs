// SPDX-License-Identifier: MIT
//! Grid compositing of merge groups.
//!
//! Two configurations are exposed:
//!
//! - [`compose_padded`]: the compaction pipeline's variant. Always lays out
//!   a 2×2 grid; groups of 2 or 3 photos are padded with blank tiles so
//!   every output reads the same visually.
//! - [`compose_square`]: a generic variant that accepts any perfect-square
//!   photo count and derives the grid side from it, with no padding.
//!
//! Both produce one new JPEG photo at exactly the requested target size.
//! Each source is stretch-fit into its cell (aspect ratio not preserved),
//! item `i` landing at column `i % cols`, row `i / cols`. Cell dimensions
//! use integer division of the target size; with odd target sides the
//! rightmost/bottom sliver stays background-white.

use fast_image_resize::Resizer;
use image::ImageFormat;

use crate::error::ComposeError;
use crate::photo::{encode_rgb, Photo, TargetSize};
use crate::raster::{fill_rgb, stretch_rgb_into};

/// The padded variant always renders this many grid slots.
pub const PADDED_GRID_SLOTS: usize = 4;

const GRID_BG: [u8; 3] = [255, 255, 255];

/// Pixel rectangle of cell `index` on a `cols`-wide grid over `target`.
///
/// Pure layout arithmetic, exposed separately so placement can be verified
/// without running the full compositor. For a 1960×1280 target and 2
/// columns, index 2 sits at origin (0, 640) with a 980×640 cell.
///
/// `cols` must be at least 1; a grid with no columns has no cells.
pub fn cell_rect(index: usize, cols: u32, target: TargetSize) -> (u32, u32, u32, u32) {
    debug_assert!(cols >= 1, "grid needs at least one column");
    // Grids here are always square, so rows == cols.
    let rows = cols;
    let cell_w = target.width() / cols;
    let cell_h = target.height() / rows;
    let col = index as u32 % cols;
    let row = index as u32 / cols;
    (col * cell_w, row * cell_h, cell_w, cell_h)
}

/// Merge 2–4 photos into one 2×2 grid composite at `target` size.
///
/// Undersized groups are padded with synthesized blank tiles: a 2-photo
/// group gets 2 tiles, a 3-photo group gets 1. A 4-photo group uses all
/// four slots with no padding.
pub fn compose_padded(group: &[Photo], target: TargetSize) -> Result<Photo, ComposeError> {
    if group.len() < 2 || group.len() > PADDED_GRID_SLOTS {
        return Err(ComposeError::BadGroupSize { got: group.len() });
    }

    let mut slots: Vec<Photo> = group.to_vec();
    while slots.len() < PADDED_GRID_SLOTS {
        slots.push(Photo::blank_tile()?);
    }
    compose_cells(&slots, 2, target)
}

/// Merge a perfect-square photo count onto a square grid at `target` size.
///
/// No padding is applied; any count whose square root is not an integer is
/// rejected with a validation error. Independent of the compaction flow,
/// which always goes through [`compose_padded`].
pub fn compose_square(group: &[Photo], target: TargetSize) -> Result<Photo, ComposeError> {
    let side = (group.len() as f64).sqrt() as u32;
    if group.is_empty() || (side * side) as usize != group.len() {
        return Err(ComposeError::NotSquareCount { got: group.len() });
    }
    compose_cells(group, side, target)
}

fn compose_cells(slots: &[Photo], cols: u32, target: TargetSize) -> Result<Photo, ComposeError> {
    let mut canvas = vec![0u8; target.width() as usize * target.height() as usize * 3];
    fill_rgb(&mut canvas, GRID_BG);

    let mut resizer = Resizer::new();
    for (i, photo) in slots.iter().enumerate() {
        let src = image::load_from_memory(photo.bytes())
            .map_err(ComposeError::Decode)?
            .to_rgb8();
        let cell = cell_rect(i, cols, target);
        stretch_rgb_into(
            &mut resizer,
            src.as_raw(),
            src.width(),
            src.height(),
            &mut canvas,
            target.width(),
            target.height(),
            Some(cell),
        )?;
    }

    let bytes = encode_rgb(&canvas, target.width(), target.height(), ImageFormat::Jpeg)?;
    Ok(Photo::from_encoded(bytes, target.width(), target.height(), "jpeg"))
}
