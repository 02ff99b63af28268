//! Property-Based Tests for tiercalc
//!
//! Uses proptest for testing invariants of the tier engine:
//! - Totals ignore selection order and unknown ids
//! - Unlocked tiers form a prefix split exactly at the total
//! - Progress stays in range and only grows within a tier

use proptest::prelude::*;
use tiercalc::{
    compute_progress, compute_total, get_next_unlock, get_unlocked, Activity, Selection,
    UnlockTier,
};

// =============================================================================
// Strategies
// =============================================================================

/// Catalog of up to 8 activities with unique ids `a0..a7`
fn activities_strategy() -> impl Strategy<Value = Vec<Activity>> {
    prop::collection::vec(0u32..50, 1..8).prop_map(|points| {
        points
            .into_iter()
            .enumerate()
            .map(|(i, p)| Activity::new(&format!("a{}", i), &format!("Activity {}", i), "", p))
            .collect()
    })
}

/// Non-decreasing thresholds built from cumulative gaps (gaps may be 0)
fn tiers_strategy() -> impl Strategy<Value = Vec<UnlockTier>> {
    prop::collection::vec(0u32..40, 1..6).prop_map(|gaps| {
        let mut threshold = 0;
        gaps.into_iter()
            .enumerate()
            .map(|(i, gap)| {
                threshold += gap;
                UnlockTier::new(threshold, &format!("tier {}", i))
            })
            .collect()
    })
}

/// Ids drawn from the catalog range plus some that are never in a catalog
fn ids_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            (0usize..8).prop_map(|i| format!("a{}", i)),
            "[x-z]{1,4}".prop_map(|s| format!("stale_{}", s)),
        ],
        0..12,
    )
}

// =============================================================================
// Totals
// =============================================================================

proptest! {
    /// Reversing the insertion order never changes the total
    #[test]
    fn total_is_order_independent(activities in activities_strategy(), ids in ids_strategy()) {
        let forward: Selection = ids.iter().cloned().collect();
        let backward: Selection = ids.iter().rev().cloned().collect();
        prop_assert_eq!(
            compute_total(&activities, &forward),
            compute_total(&activities, &backward)
        );
    }

    /// Total equals the sum over known, deduplicated ids
    #[test]
    fn total_matches_known_ids(activities in activities_strategy(), ids in ids_strategy()) {
        let selection: Selection = ids.iter().cloned().collect();
        let expected: u32 = activities
            .iter()
            .filter(|a| selection.contains(&a.id))
            .map(|a| a.points)
            .sum();
        prop_assert_eq!(compute_total(&activities, &selection), expected);
    }

    #[test]
    fn empty_selection_totals_zero(activities in activities_strategy()) {
        prop_assert_eq!(compute_total(&activities, &Selection::new()), 0);
    }
}

// =============================================================================
// Unlocks
// =============================================================================

proptest! {
    /// Unlocked tiers are a prefix: everything returned is <= total, the rest > total
    #[test]
    fn unlocked_is_prefix(tiers in tiers_strategy(), total in 0u32..250) {
        let unlocked = get_unlocked(&tiers, total);
        prop_assert_eq!(&unlocked[..], &tiers[..unlocked.len()]);
        prop_assert!(unlocked.iter().all(|t| t.threshold <= total));
        prop_assert!(tiers[unlocked.len()..].iter().all(|t| t.threshold > total));
    }

    /// No next unlock exactly when every tier is unlocked
    #[test]
    fn next_none_iff_all_unlocked(tiers in tiers_strategy(), total in 0u32..250) {
        let all_unlocked = get_unlocked(&tiers, total).len() == tiers.len();
        prop_assert_eq!(get_next_unlock(&tiers, total).is_none(), all_unlocked);
        if let Some(next) = get_next_unlock(&tiers, total) {
            prop_assert!(next.threshold > total);
        }
    }
}

// =============================================================================
// Progress
// =============================================================================

proptest! {
    #[test]
    fn progress_in_range(tiers in tiers_strategy(), total in 0u32..250) {
        let progress = compute_progress(&tiers, total);
        prop_assert!((0.0..=100.0).contains(&progress.percent));
        if progress.maxed_out {
            prop_assert_eq!(progress.percent, 100.0);
            prop_assert_eq!(progress.points_remaining, 0);
        } else {
            let next = get_next_unlock(&tiers, total).expect("not maxed");
            prop_assert_eq!(progress.points_remaining, next.threshold - total);
        }
    }

    /// While the next tier stays the same, more credits never lower the meter
    #[test]
    fn progress_monotonic_within_tier(tiers in tiers_strategy(), total in 0u32..250, step in 1u32..20) {
        let higher = total + step;
        let same_next = get_next_unlock(&tiers, total) == get_next_unlock(&tiers, higher);
        let low = compute_progress(&tiers, total);
        let high = compute_progress(&tiers, higher);
        if same_next {
            prop_assert!(high.percent >= low.percent);
        }
        if low.maxed_out {
            prop_assert!(high.maxed_out);
            prop_assert_eq!(high.percent, 100.0);
        }
    }

    /// Same inputs, same outputs
    #[test]
    fn progress_is_idempotent(tiers in tiers_strategy(), total in 0u32..250) {
        prop_assert_eq!(compute_progress(&tiers, total), compute_progress(&tiers, total));
    }
}
