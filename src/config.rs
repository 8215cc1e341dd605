//! # Storefront Configuration
//!
//! Per-storefront upload constraints: how many images the storefront
//! accepts, the target resolution for composites, and whether untouched
//! photos should be stretch-fit to that resolution too. Each configuration
//! is a plain value object keyed by a stable `id`, so batch results can be
//! matched back to their storefront without relying on positional indexes.
//!
//! ## Default Set
//!
//! The stock table mirrors the storefronts this tool was built around:
//!
//! | id | limit | size |
//! |----|-------|------|
//! | honten (本店) | 50 | 1960×1280 |
//! | digimart (デジマート) | 11 | 1960×1280 |
//! | yahoo-auction (ヤフオク) | 10 | 1960×1280 |
//! | mercari (メルカリ) | 20 | 1960×1280 |
//! | reverb | 25 | 1960×1280 |
//! | shopify | 100 | 1960×1280 |
//! | rakuten (楽天) | 20 | 640×427 |

use grid_compose::TargetSize;

use crate::error::PackError;

/// A selection of at least this many photos is required before any run:
/// the first and last are always kept untouched, and at least one middle
/// photo must exist for the sequence to be worth preparing.
pub const MIN_PHOTOS: usize = 3;

/// Upload constraints for a single storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Stable identifier used to key results and output directories.
    pub id: String,
    /// Human-readable storefront name.
    pub name: String,
    /// Maximum number of images the storefront accepts.
    pub limit: u32,
    /// Composite/resize target width in pixels.
    pub width: u32,
    /// Composite/resize target height in pixels.
    pub height: u32,
    /// Stretch-fit every output photo to the target size, not only the
    /// composites.
    pub resize: bool,
}

impl StorefrontConfig {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        limit: u32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            limit,
            width,
            height,
            resize: false,
        }
    }

    pub fn with_resize(mut self, resize: bool) -> Self {
        self.resize = resize;
        self
    }

    /// Validate the configuration before a run.
    pub fn validate(&self) -> Result<(), PackError> {
        if self.limit == 0 {
            return Err(PackError::validation(
                "limit",
                format!("{}: must be a positive integer", self.name),
            ));
        }
        if self.limit < MIN_PHOTOS as u32 {
            return Err(PackError::validation(
                "limit",
                format!(
                    "{}: must allow at least {} images (first and last stay untouched)",
                    self.name, MIN_PHOTOS
                ),
            ));
        }
        // TargetSize::new re-checks this at the raster layer; validating
        // here keeps the error attached to the configuration.
        if self.width == 0 || self.height == 0 {
            return Err(PackError::validation(
                "size",
                format!("{}: width and height must both be >= 1px", self.name),
            ));
        }
        Ok(())
    }

    /// The raster-layer target size for this storefront.
    pub fn target(&self) -> Result<TargetSize, PackError> {
        TargetSize::new(self.width, self.height)
            .map_err(|e| PackError::validation("size", e.to_string()))
    }
}

/// The stock storefront table.
pub fn default_storefronts() -> Vec<StorefrontConfig> {
    vec![
        StorefrontConfig::new("honten", "本店", 50, 1960, 1280),
        StorefrontConfig::new("digimart", "デジマート", 11, 1960, 1280),
        StorefrontConfig::new("yahoo-auction", "ヤフオク", 10, 1960, 1280),
        StorefrontConfig::new("mercari", "メルカリ", 20, 1960, 1280),
        StorefrontConfig::new("reverb", "Reverb", 25, 1960, 1280),
        StorefrontConfig::new("shopify", "shopify", 100, 1960, 1280),
        StorefrontConfig::new("rakuten", "楽天", 20, 640, 427),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_complete_and_valid() {
        let configs = default_storefronts();
        assert_eq!(configs.len(), 7);
        for config in &configs {
            assert!(config.validate().is_ok(), "{} invalid", config.id);
        }
        // Ids are stable keys: no duplicates.
        let mut ids: Vec<_> = configs.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let config = StorefrontConfig::new("x", "X", 0, 100, 100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn limit_below_minimum_is_rejected() {
        let config = StorefrontConfig::new("x", "X", 2, 100, 100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_size_is_rejected() {
        let config = StorefrontConfig::new("x", "X", 10, 0, 100);
        assert!(config.validate().is_err());
        assert!(config.target().is_err());
    }

    #[test]
    fn builder_sets_resize_flag() {
        let config = StorefrontConfig::new("x", "X", 10, 100, 100).with_resize(true);
        assert!(config.resize);
    }
}
