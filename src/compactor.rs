//! # Sequence Compaction
//!
//! Reduces an ordered photo sequence down to a storefront's image-count
//! limit by merging runs of middle photos into grid composites. The first
//! and last photos are never merged; the limit therefore translates to a
//! net limit of `limit - 2` middle-slot outputs.
//!
//! ## Pipeline
//!
//! 1. Short-circuit when the middle already fits (no-op) or can never fit
//!    even with maximal 4-photo merging (infeasible); both are reportable
//!    outcomes, not errors.
//! 2. Ask [`crate::planner`] how many 4-, 3-, and 2-merges are needed.
//! 3. Consume the middle from its tail (all 2-merges, then 3-merges, then
//!    4-merges), handing each group to the [`GridCompositor`] capability.
//!    This tail-first order decides exactly which photos get merged and is
//!    normative for output parity.
//! 4. Reassemble in catalog order and optionally stretch-fit the untouched
//!    photos through the [`Resizer`] capability.
//!
//! Pixel work is behind async capability traits so callers can swap the
//! raster backend; [`RasterEngine`] is the stock implementation on top of
//! `grid_compose`.

use async_trait::async_trait;
use futures_util::future::join_all;
use grid_compose::{ComposeError, Photo, TargetSize};

use crate::error::PackError;
use crate::planner::{self, MergePlan};

/// Merges a group of 2–4 photos into one composite at the target size.
#[async_trait]
pub trait GridCompositor: Send + Sync {
    async fn compose_group(&self, group: Vec<Photo>, target: TargetSize)
        -> Result<Photo, PackError>;
}

/// Stretch-fits a single photo to the target size.
#[async_trait]
pub trait Resizer: Send + Sync {
    async fn stretch_fit(&self, photo: Photo, target: TargetSize) -> Result<Photo, PackError>;
}

/// Stock raster backend: padded 2×2 compositing and stretch-fit resizing
/// from the `grid_compose` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct RasterEngine;

#[async_trait]
impl GridCompositor for RasterEngine {
    async fn compose_group(
        &self,
        group: Vec<Photo>,
        target: TargetSize,
    ) -> Result<Photo, PackError> {
        grid_compose::grid::compose_padded(&group, target)
            .map_err(|e| raster_error("grid merge", e))
    }
}

#[async_trait]
impl Resizer for RasterEngine {
    async fn stretch_fit(&self, photo: Photo, target: TargetSize) -> Result<Photo, PackError> {
        grid_compose::resize::stretch_fit(&photo, target)
            .map_err(|e| raster_error("resize", e))
    }
}

/// Keep the error taxonomy honest at the raster seam: a photo whose bytes
/// no longer decode is a decode failure, everything else is a composition
/// failure of the named stage. Both are fatal for the run.
fn raster_error(stage: &'static str, err: ComposeError) -> PackError {
    match err {
        decode @ ComposeError::Decode(_) => PackError::decode(stage, decode),
        other => PackError::composition(stage, other),
    }
}

/// When (if at all) untouched photos are stretch-fit to the target size.
///
/// Both historical orderings of resize-vs-merge exist in the wild, so the
/// choice is the caller's rather than baked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Leave untouched photos at their original dimensions.
    Keep,
    /// Stretch-fit first/last/untouched middle photos during assembly;
    /// composites already render at the target size and are left alone.
    SinglesBeforeAssembly,
    /// Stretch-fit every photo of the assembled output, composites included.
    AllAfterAssembly,
}

/// Result of a compaction run. `Unchanged` and `Infeasible` are legitimate
/// terminal states, distinct from each other and from errors.
#[derive(Debug)]
pub enum CompactOutcome {
    /// The sequence was reduced to exactly `limit` photos.
    Compacted(Vec<Photo>),
    /// The sequence already fit the limit; returned as passed in.
    Unchanged(Vec<Photo>),
    /// Even maximal 4-photo merging cannot reach the limit.
    Infeasible {
        middle_count: usize,
        /// Largest middle count the net limit can absorb (`net_limit * 4`).
        capacity: usize,
    },
}

/// Orchestrates compaction over a pair of raster capabilities.
pub struct Compactor<C, R> {
    compositor: C,
    resizer: R,
}

impl Compactor<RasterEngine, RasterEngine> {
    /// Compactor backed by the stock raster engine.
    pub fn raster() -> Self {
        Self::new(RasterEngine, RasterEngine)
    }
}

impl<C: GridCompositor, R: Resizer> Compactor<C, R> {
    pub fn new(compositor: C, resizer: R) -> Self {
        Self { compositor, resizer }
    }

    /// Compact `photos` down to at most `limit` images.
    ///
    /// The caller guarantees at least 3 photos (enforced at the batch/CLI
    /// surface, where too-small selections are rejected with a validation
    /// error before any run starts).
    ///
    /// On the compacted path the output holds exactly `limit` photos: the
    /// untouched first photo, the untouched middle remainder in catalog
    /// order, the composites in chronological order (4-merges, then
    /// 3-merges, then 2-merges), and the untouched last photo.
    pub async fn compact(
        &self,
        photos: Vec<Photo>,
        limit: u32,
        target: TargetSize,
        policy: ResizePolicy,
    ) -> Result<CompactOutcome, PackError> {
        if limit == 0 {
            return Err(PackError::validation("limit", "must be a positive integer"));
        }
        debug_assert!(photos.len() >= 3, "caller must supply at least 3 photos");

        let net_limit = (limit as usize).saturating_sub(2);
        let middle_count = photos.len().saturating_sub(2);

        if middle_count <= net_limit {
            return Ok(CompactOutcome::Unchanged(photos));
        }
        if middle_count > net_limit * 4 {
            return Ok(CompactOutcome::Infeasible {
                middle_count,
                capacity: net_limit * 4,
            });
        }

        let plan = planner::plan_merges(middle_count, net_limit);

        let mut middle = photos;
        // Popping the tail first keeps `remove(0)` as the only head shift.
        let last = middle.pop().expect("length checked above");
        let first = middle.remove(0);

        let (middle, composites) = self.merge_tail(middle, &plan, target).await?;

        let sequence = match policy {
            ResizePolicy::Keep => assemble(first, middle, composites, last),
            ResizePolicy::SinglesBeforeAssembly => {
                let first = self.resizer.stretch_fit(first, target).await?;
                let middle = self.resize_all(middle, target).await?;
                let last = self.resizer.stretch_fit(last, target).await?;
                assemble(first, middle, composites, last)
            }
            ResizePolicy::AllAfterAssembly => {
                let assembled = assemble(first, middle, composites, last);
                self.resize_all(assembled, target).await?
            }
        };

        Ok(CompactOutcome::Compacted(sequence))
    }

    /// Consume merge groups from the tail of `middle`, in the fixed order
    /// 2-merges, 3-merges, 4-merges. Each per-size composite list comes out
    /// in reverse chronological order relative to the catalog.
    async fn merge_tail(
        &self,
        mut middle: Vec<Photo>,
        plan: &MergePlan,
        target: TargetSize,
    ) -> Result<(Vec<Photo>, Composites), PackError> {
        let mut joined_two = Vec::with_capacity(plan.twos);
        for _ in 0..plan.twos {
            let group = middle.split_off(middle.len() - 2);
            joined_two.push(self.compositor.compose_group(group, target).await?);
        }

        let mut joined_three = Vec::with_capacity(plan.threes);
        for _ in 0..plan.threes {
            let group = middle.split_off(middle.len() - 3);
            joined_three.push(self.compositor.compose_group(group, target).await?);
        }

        let mut joined_four = Vec::with_capacity(plan.fours);
        for _ in 0..plan.fours {
            let group = middle.split_off(middle.len() - 4);
            joined_four.push(self.compositor.compose_group(group, target).await?);
        }

        Ok((
            middle,
            Composites {
                joined_four,
                joined_three,
                joined_two,
            },
        ))
    }

    /// Fan out independent resizes and re-join in input index order.
    /// `join_all` preserves ordering, so the result never depends on
    /// completion timing.
    async fn resize_all(
        &self,
        photos: Vec<Photo>,
        target: TargetSize,
    ) -> Result<Vec<Photo>, PackError> {
        join_all(
            photos
                .into_iter()
                .map(|photo| self.resizer.stretch_fit(photo, target)),
        )
        .await
        .into_iter()
        .collect()
    }
}

/// Per-size composite lists, each in reverse chronological order.
struct Composites {
    joined_four: Vec<Photo>,
    joined_three: Vec<Photo>,
    joined_two: Vec<Photo>,
}

/// Reassemble the final catalog order. Reversing each composite list
/// restores left-to-right chronology within and across the groups.
fn assemble(first: Photo, middle: Vec<Photo>, composites: Composites, last: Photo) -> Vec<Photo> {
    let Composites {
        joined_four,
        joined_three,
        joined_two,
    } = composites;

    let mut sequence = Vec::with_capacity(
        2 + middle.len() + joined_four.len() + joined_three.len() + joined_two.len(),
    );
    sequence.push(first);
    sequence.extend(middle);
    sequence.extend(joined_four.into_iter().rev());
    sequence.extend(joined_three.into_iter().rev());
    sequence.extend(joined_two.into_iter().rev());
    sequence.push(last);
    sequence
}
