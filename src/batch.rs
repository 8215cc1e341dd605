//! # Batch Runs Across Storefronts
//!
//! Runs one compaction per storefront configuration over the same input
//! photo set. Runs are independent and side-effect-free, so they are all
//! dispatched concurrently; each one's verdict (or failure) lands in its
//! own [`StorefrontReport`] and can never corrupt or abort a sibling run.
//!
//! The only check shared across the batch is the minimum photo count:
//! with fewer than 3 photos no storefront run is meaningful, so the batch
//! fails fast before any pixel work.

use futures_util::future::join_all;
use grid_compose::Photo;

use crate::compactor::{CompactOutcome, Compactor, RasterEngine, ResizePolicy, Resizer};
use crate::config::{MIN_PHOTOS, StorefrontConfig};
use crate::error::PackError;

/// Verdict of one storefront's run.
#[derive(Debug)]
pub enum RunStatus {
    /// The sequence was over the limit and was compacted to fit.
    Packed(Vec<Photo>),
    /// The sequence already fit; photos pass through (stretch-fit to the
    /// storefront size when its `resize` flag is set).
    Passthrough(Vec<Photo>),
    /// Merging cannot reach the limit even at the maximal 4-photo ratio.
    Infeasible { middle_count: usize, capacity: usize },
    /// The run failed; no partial photo set is reported.
    Failed(PackError),
}

/// One storefront's outcome, keyed by the configuration's stable id.
#[derive(Debug)]
pub struct StorefrontReport {
    pub id: String,
    pub name: String,
    pub status: RunStatus,
}

impl StorefrontReport {
    /// Final photo set, if the run produced one.
    pub fn photos(&self) -> Option<&[Photo]> {
        match &self.status {
            RunStatus::Packed(photos) | RunStatus::Passthrough(photos) => Some(photos),
            RunStatus::Infeasible { .. } | RunStatus::Failed(_) => None,
        }
    }
}

/// Run every storefront configuration against `photos`, concurrently.
///
/// Returns one report per configuration, in configuration order. Fails as
/// a whole only when the input set is too small to prepare at all.
pub async fn run_storefronts(
    photos: &[Photo],
    configs: &[StorefrontConfig],
) -> Result<Vec<StorefrontReport>, PackError> {
    if photos.len() < MIN_PHOTOS {
        return Err(PackError::validation(
            "photos",
            format!("select at least {} photos, got {}", MIN_PHOTOS, photos.len()),
        ));
    }

    let runs = configs.iter().map(|config| async move {
        StorefrontReport {
            id: config.id.clone(),
            name: config.name.clone(),
            status: run_one(photos, config).await,
        }
    });

    Ok(join_all(runs).await)
}

async fn run_one(photos: &[Photo], config: &StorefrontConfig) -> RunStatus {
    match prepare(photos, config).await {
        Ok(status) => status,
        Err(err) => RunStatus::Failed(err),
    }
}

async fn prepare(photos: &[Photo], config: &StorefrontConfig) -> Result<RunStatus, PackError> {
    config.validate()?;
    let target = config.target()?;
    let compactor = Compactor::raster();

    // Under the limit there is nothing to merge: pass the set through,
    // stretch-fitting it only when the storefront asks for normalization.
    if photos.len() <= config.limit as usize {
        let set = if config.resize {
            let engine = RasterEngine;
            join_all(
                photos
                    .iter()
                    .cloned()
                    .map(|photo| engine.stretch_fit(photo, target)),
            )
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?
        } else {
            photos.to_vec()
        };
        return Ok(RunStatus::Passthrough(set));
    }

    // With `resize` set, every output (composites included) is normalized
    // after assembly; otherwise only the untouched singles are brought to
    // the target size, matching the composites they sit next to.
    let policy = if config.resize {
        ResizePolicy::AllAfterAssembly
    } else {
        ResizePolicy::SinglesBeforeAssembly
    };

    match compactor
        .compact(photos.to_vec(), config.limit, target, policy)
        .await?
    {
        CompactOutcome::Compacted(set) => Ok(RunStatus::Packed(set)),
        // The length test above already filtered the unchanged case.
        CompactOutcome::Unchanged(set) => Ok(RunStatus::Passthrough(set)),
        CompactOutcome::Infeasible {
            middle_count,
            capacity,
        } => Ok(RunStatus::Infeasible {
            middle_count,
            capacity,
        }),
    }
}
