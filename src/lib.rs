//! # photopack: Product Photo-Set Preparation for E-Commerce Storefronts
//!
//! Prepares one ordered set of product photographs for upload to multiple
//! storefronts, each enforcing its own maximum image count and target
//! resolution. When a set exceeds a storefront's limit, runs of middle
//! photos are merged into 2×2 grid composites until the count fits, while
//! the first and last photos (the catalog's cover and closer) always stay
//! untouched and the original ordering is preserved.
//!
//! ## Architecture
//!
//! - [`planner`]: the merge arithmetic, deciding how many 4-, 3-, and
//!   2-photo merges eliminate exactly the excess, with a tie-break that
//!   favors visually regular grids.
//! - [`compactor`]: orchestrates one run, from tail-first group consumption
//!   through compositing, reassembly, and optional resizing.
//! - [`config`]: per-storefront value objects plus the stock table.
//! - [`batch`]: concurrent, failure-isolated runs across storefronts.
//! - [`error`]: the error taxonomy (validation vs fatal run failures).
//!
//! Pixel work lives in the `grid_compose` member crate and is reached
//! through the [`compactor::GridCompositor`] and [`compactor::Resizer`]
//! capability traits; [`compactor::RasterEngine`] is the stock backend.
//!
//! ## Usage Example
//!
//! ```no_run
//! use photopack::{batch, config};
//! use grid_compose::Photo;
//!
//! # async fn run(photos: Vec<Photo>) -> Result<(), photopack::PackError> {
//! let reports = batch::run_storefronts(&photos, &config::default_storefronts()).await?;
//! for report in &reports {
//!     if let Some(set) = report.photos() {
//!         println!("{}: {} images", report.name, set.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod compactor;
pub mod config;
pub mod error;
pub mod planner;

/// Decode one input photo, attaching its name to any failure.
///
/// This is the decode seam of the pipeline: undecodable bytes surface as
/// the fatal [`PackError::Decode`] variant rather than a generic error, so
/// batch callers and the CLI can report exactly which input was broken.
pub fn decode_photo(
    name: &str,
    bytes: Vec<u8>,
    ext: impl Into<String>,
) -> Result<Photo, PackError> {
    Photo::from_bytes(bytes, ext).map_err(|e| PackError::decode(name, e))
}

pub use batch::{RunStatus, StorefrontReport, run_storefronts};
pub use compactor::{CompactOutcome, Compactor, RasterEngine, ResizePolicy};
pub use config::{StorefrontConfig, default_storefronts};
pub use error::{ErrorSeverity, PackError};
pub use planner::{MergePlan, plan_merges};

// Re-exported so downstream callers don't need a direct grid-compose
// dependency for the common types.
pub use grid_compose::{Photo, TargetSize};
