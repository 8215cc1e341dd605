// SPDX-License-Identifier: MIT
//! # grid-compose: Grid Compositing for Product Photo Sets
//!
//! This crate provides the raster capabilities behind photo-set compaction:
//! merging 2–4 product photos into a single fixed-size grid image, and
//! stretch-fitting individual photos to a storefront's target resolution.
//!
//! ## Key Components
//!
//! - [`photo`]: The opaque [`photo::Photo`] handle (encoded bytes + declared
//!   dimensions + extension hint) and blank-tile synthesis.
//! - [`grid`]: Grid compositing in two configurations: a padded 2×2 layout
//!   (undersized groups are filled with blank tiles) and a strict
//!   square-grid layout for perfect-square group counts.
//! - [`resize`]: Stretch-fit resizing to exact target dimensions.
//!
//! ## Pipeline Position
//!
//! Decode and encode go through the `image` crate; the actual pixel scaling
//! uses `fast_image_resize` typed views so each source is resized directly
//! into its destination cell of the output canvas, with no intermediate
//! per-cell allocation.
//!
//! ## Usage Example
//!
//! ```no_run
//! use grid_compose::{grid, photo::Photo, TargetSize};
//!
//! # fn run(photos: Vec<Photo>) -> Result<(), grid_compose::ComposeError> {
//! let target = TargetSize::new(1960, 1280)?;
//! // Three photos: laid out on a 2x2 grid with one blank tile.
//! let merged = grid::compose_padded(&photos[0..3], target)?;
//! assert_eq!((merged.width(), merged.height()), (1960, 1280));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod grid;
pub mod photo;
pub mod resize;

mod raster;

pub use error::ComposeError;
pub use photo::{Photo, TargetSize};
