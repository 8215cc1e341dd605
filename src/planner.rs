//! # Merge Strategy Planning
//!
//! Decides, for a given excess of middle photos, how many merge groups of
//! 4, 3, and 2 photos are needed to land exactly on the storefront's net
//! limit. Each merge of `k` photos into one composite eliminates `k - 1`
//! photos, so a 4-merge is worth 3 and the plan starts from
//! `over_limit / 3` four-merges.
//!
//! ## Tie-break Policy
//!
//! The remainder of that division decides the tail of the plan. A lone
//! 2-merge looks irregular next to a field of 4-merges, so whenever a spare
//! 4-merge exists it is traded for two 3-merges instead of pairing a
//! 4-merge with a 2-merge. The single 2-merge only appears when there are
//! no 4-merges to trade at all.
//!
//! | `over_limit % 3` | plan tail |
//! |---|---|
//! | 0 | nothing extra |
//! | 1 | spare 4-merge? trade it for two 3-merges; else one 2-merge |
//! | 2 | one 3-merge |

/// Counts of merge operations to perform, by group size.
///
/// Computed once per compaction run and consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergePlan {
    /// Number of 4-photo merges (each eliminates 3 photos)
    pub fours: usize,
    /// Number of 3-photo merges (each eliminates 2 photos)
    pub threes: usize,
    /// Number of 2-photo merges (each eliminates 1 photo)
    pub twos: usize,
}

impl MergePlan {
    /// How many photos this plan eliminates from the middle sequence.
    pub fn reduction(&self) -> usize {
        3 * self.fours + 2 * self.threes + self.twos
    }

    /// How many source photos the merges consume in total.
    pub fn photos_consumed(&self) -> usize {
        4 * self.fours + 3 * self.threes + 2 * self.twos
    }

    pub fn is_empty(&self) -> bool {
        self.fours == 0 && self.threes == 0 && self.twos == 0
    }
}

/// Compute the merge plan for `middle_count` photos against `net_limit`
/// allowed middle-slot outputs.
///
/// Pure and total over its valid domain. Callers verify feasibility first:
/// `middle_count >= net_limit` must hold (otherwise no plan is needed), and
/// `middle_count <= net_limit * 4` (otherwise no plan can succeed).
pub fn plan_merges(middle_count: usize, net_limit: usize) -> MergePlan {
    debug_assert!(
        middle_count >= net_limit,
        "plan_merges called although no reduction is needed"
    );
    let over_limit = middle_count - net_limit;

    let base_fours = over_limit / 3;
    match over_limit % 3 {
        0 => MergePlan {
            fours: base_fours,
            threes: 0,
            twos: 0,
        },
        1 => {
            if base_fours > 0 {
                // Trading one 4-merge (worth 3) for two 3-merges (worth 4)
                // nets the one extra elimination the remainder asks for.
                MergePlan {
                    fours: base_fours - 1,
                    threes: 2,
                    twos: 0,
                }
            } else {
                MergePlan {
                    fours: 0,
                    threes: 0,
                    twos: 1,
                }
            }
        }
        2 => MergePlan {
            fours: base_fours,
            threes: 1,
            twos: 0,
        },
        // over_limit % 3 is 0, 1, or 2 by construction.
        _ => unreachable!("unexpected remainder"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_reduces(middle: usize, net: usize) -> MergePlan {
        let plan = plan_merges(middle, net);
        assert_eq!(plan.reduction(), middle - net, "plan {:?}", plan);
        plan
    }

    #[test]
    fn zero_excess_yields_empty_plan() {
        let plan = plan_merges(9, 9);
        assert_eq!(
            plan,
            MergePlan {
                fours: 0,
                threes: 0,
                twos: 0
            }
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn remainder_zero_is_all_fours() {
        let plan = assert_reduces(15, 9); // over_limit 6
        assert_eq!(
            plan,
            MergePlan {
                fours: 2,
                threes: 0,
                twos: 0
            }
        );
    }

    #[test]
    fn remainder_one_without_spare_four_falls_back_to_a_two_merge() {
        let plan = assert_reduces(10, 9); // over_limit 1
        assert_eq!(
            plan,
            MergePlan {
                fours: 0,
                threes: 0,
                twos: 1
            }
        );
    }

    #[test]
    fn remainder_one_with_spare_four_trades_for_two_threes() {
        let plan = assert_reduces(10, 6); // over_limit 4
        assert_eq!(
            plan,
            MergePlan {
                fours: 0,
                threes: 2,
                twos: 0
            }
        );

        let plan = assert_reduces(17, 10); // over_limit 7
        assert_eq!(
            plan,
            MergePlan {
                fours: 1,
                threes: 2,
                twos: 0
            }
        );
    }

    #[test]
    fn remainder_two_adds_one_three_merge() {
        let plan = assert_reduces(11, 9); // over_limit 2
        assert_eq!(
            plan,
            MergePlan {
                fours: 0,
                threes: 1,
                twos: 0
            }
        );

        let plan = assert_reduces(14, 6); // over_limit 8
        assert_eq!(
            plan,
            MergePlan {
                fours: 2,
                threes: 1,
                twos: 0
            }
        );
    }

    #[test]
    fn maximal_merging_is_all_fours() {
        // middle == net_limit * 4 must come out as exactly net_limit 4-merges.
        let net = 5;
        let plan = assert_reduces(net * 4, net);
        assert_eq!(
            plan,
            MergePlan {
                fours: net,
                threes: 0,
                twos: 0
            }
        );
        assert_eq!(plan.photos_consumed(), net * 4);
    }

    #[test]
    fn reduction_law_holds_over_a_range() {
        for net in 1..=12usize {
            for middle in net..=net * 4 {
                let plan = plan_merges(middle, net);
                assert_eq!(plan.reduction(), middle - net);
                // The table never mixes 2-merges with anything else.
                if plan.twos > 0 {
                    assert_eq!(plan.twos, 1);
                    assert_eq!(plan.fours, 0);
                    assert_eq!(plan.threes, 0);
                }
                assert!(plan.threes <= 2);
                // Consumed photos never exceed what the middle holds.
                assert!(plan.photos_consumed() <= middle);
            }
        }
    }
}
