//! Integration tests for the sequence compactor.
//!
//! These run the real raster engine end to end on tiny PNG fixtures and
//! check the counting, ordering, and boundary laws of compaction.

mod common;

use common::{catalog, same_photo};
use grid_compose::TargetSize;
use photopack::compactor::{CompactOutcome, Compactor, ResizePolicy};
use photopack::error::PackError;

fn target() -> TargetSize {
    TargetSize::new(64, 48).expect("valid target")
}

#[tokio::test]
async fn middle_at_net_limit_is_returned_unchanged() {
    // limit 8 → net 6; 8 photos → middle 6 == net limit.
    let photos = catalog(8);
    let original = photos.clone();

    let outcome = Compactor::raster()
        .compact(photos, 8, target(), ResizePolicy::Keep)
        .await
        .unwrap();

    let CompactOutcome::Unchanged(set) = outcome else {
        panic!("expected unchanged outcome");
    };
    assert_eq!(set.len(), original.len());
    for (out, orig) in set.iter().zip(&original) {
        assert!(same_photo(out, orig));
    }
}

#[tokio::test]
async fn one_over_capacity_is_infeasible() {
    // limit 4 → net 2 → capacity 8 middle photos; supply 9.
    let photos = catalog(11);

    let outcome = Compactor::raster()
        .compact(photos, 4, target(), ResizePolicy::Keep)
        .await
        .unwrap();

    let CompactOutcome::Infeasible {
        middle_count,
        capacity,
    } = outcome
    else {
        panic!("expected infeasible outcome");
    };
    assert_eq!(middle_count, 9);
    assert_eq!(capacity, 8);
}

#[tokio::test]
async fn at_capacity_everything_merges_into_fours() {
    // limit 4 → net 2; middle exactly 8 → two 4-merges, output == limit.
    let photos = catalog(10);

    let outcome = Compactor::raster()
        .compact(photos, 4, target(), ResizePolicy::Keep)
        .await
        .unwrap();

    let CompactOutcome::Compacted(set) = outcome else {
        panic!("expected compacted outcome");
    };
    assert_eq!(set.len(), 4);
    // Both middle slots are composites at the target size.
    for composite in &set[1..3] {
        assert_eq!(composite.width(), target().width());
        assert_eq!(composite.height(), target().height());
    }
}

#[tokio::test]
async fn output_count_always_equals_the_limit() {
    for limit in [5u32, 6, 7] {
        let net = limit as usize - 2;
        for middle in (net + 1)..=(net * 4) {
            let photos = catalog(middle + 2);
            let outcome = Compactor::raster()
                .compact(photos, limit, target(), ResizePolicy::Keep)
                .await
                .unwrap();
            let CompactOutcome::Compacted(set) = outcome else {
                panic!("limit {} middle {}: expected compaction", limit, middle);
            };
            assert_eq!(set.len(), limit as usize, "limit {} middle {}", limit, middle);
        }
    }
}

#[tokio::test]
async fn first_and_last_survive_and_composites_sit_before_last() {
    // 13 photos, limit 11 → net 9, middle 11, over 2 → one 3-merge.
    let photos = catalog(13);
    let original = photos.clone();

    let outcome = Compactor::raster()
        .compact(photos, 11, target(), ResizePolicy::Keep)
        .await
        .unwrap();

    let CompactOutcome::Compacted(set) = outcome else {
        panic!("expected compacted outcome");
    };
    assert_eq!(set.len(), 11);

    // First and last untouched.
    assert!(same_photo(&set[0], &original[0]));
    assert!(same_photo(&set[10], &original[12]));

    // The merge consumed the middle's tail (original indexes 9..=11); the
    // untouched middle keeps catalog order right after the first photo.
    for i in 1..=8 {
        assert!(same_photo(&set[i], &original[i]), "untouched middle {}", i);
    }

    // The single composite sits after the untouched middle, before last.
    assert_eq!(set[9].width(), target().width());
    assert_eq!(set[9].height(), target().height());
}

#[tokio::test]
async fn spare_four_is_traded_for_two_threes() {
    // 12 photos, limit 8 → net 6, middle 10, over 4 → two 3-merges.
    let photos = catalog(12);
    let original = photos.clone();

    let outcome = Compactor::raster()
        .compact(photos, 8, target(), ResizePolicy::Keep)
        .await
        .unwrap();

    let CompactOutcome::Compacted(set) = outcome else {
        panic!("expected compacted outcome");
    };
    assert_eq!(set.len(), 8);

    // Untouched middle: original indexes 1..=4. Two composites follow.
    for i in 1..=4 {
        assert!(same_photo(&set[i], &original[i]));
    }
    for composite in &set[5..7] {
        assert_eq!(composite.width(), target().width());
    }
    assert!(same_photo(&set[7], &original[11]));
}

#[tokio::test]
async fn singles_policy_normalizes_untouched_photos() {
    let photos = catalog(10);

    let outcome = Compactor::raster()
        .compact(photos, 8, target(), ResizePolicy::SinglesBeforeAssembly)
        .await
        .unwrap();

    let CompactOutcome::Compacted(set) = outcome else {
        panic!("expected compacted outcome");
    };
    // Composites render at target size and singles are stretch-fit to it,
    // so the whole set comes out uniform.
    for photo in &set {
        assert_eq!((photo.width(), photo.height()), (64, 48));
    }
}

#[tokio::test]
async fn keep_policy_leaves_untouched_photos_at_original_size() {
    let photos = catalog(10);

    let outcome = Compactor::raster()
        .compact(photos, 8, target(), ResizePolicy::Keep)
        .await
        .unwrap();

    let CompactOutcome::Compacted(set) = outcome else {
        panic!("expected compacted outcome");
    };
    assert_eq!((set[0].width(), set[0].height()), (24, 18));
    assert_eq!((set[1].width(), set[1].height()), (24, 18));
}

#[tokio::test]
async fn zero_limit_is_a_validation_error() {
    let photos = catalog(5);

    let err = Compactor::raster()
        .compact(photos, 0, target(), ResizePolicy::Keep)
        .await
        .unwrap_err();
    assert!(matches!(err, PackError::Validation { field: "limit", .. }));
}
