//! Credit Accumulation and Tier Unlock Engine
//!
//! Maps a selection of activities onto a credit total, and the total onto an
//! ordered list of unlock tiers.
//!
//! # Operations
//!
//! | Function           | Output |
//! |--------------------|--------|
//! | `compute_total`    | Sum of points of selected activities found in the catalog |
//! | `get_unlocked`     | Tiers with `threshold <= total`, in catalog order |
//! | `get_next_unlock`  | First tier with `threshold > total`, if any |
//! | `compute_progress` | Percent between the last reached and the next threshold |
//! | `summarize`        | All of the above in one [`Summary`] |
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects, identical output for identical input
//! - **Permissive**: Unknown ids count as zero, degenerate spans read as 100%
//! - **No re-sorting**: Tiers are assumed ascending; catalog validation enforces it

use crate::selection::Selection;
use crate::types::{Activity, Points, Progress, Summary, TierStatus, UnlockTier};

// ============================================================================
// Totals
// ============================================================================

/// Sum the points of every selected activity present in `activities`.
///
/// Ids with no catalog entry contribute 0. Overflow saturates at `Points::MAX`.
pub fn compute_total(activities: &[Activity], selection: &Selection) -> Points {
    selection
        .iter()
        .filter_map(|id| activities.iter().find(|a| a.id == id))
        .fold(0, |total: Points, a| total.saturating_add(a.points))
}

// ============================================================================
// Tier Lookup
// ============================================================================

/// Tiers reached by `total`, preserving catalog order.
pub fn get_unlocked(tiers: &[UnlockTier], total: Points) -> Vec<UnlockTier> {
    tiers
        .iter()
        .filter(|t| t.threshold <= total)
        .cloned()
        .collect()
}

/// First tier not yet reached, or `None` once every tier is unlocked.
pub fn get_next_unlock(tiers: &[UnlockTier], total: Points) -> Option<UnlockTier> {
    tiers.iter().find(|t| t.threshold > total).cloned()
}

/// Classify one tier against `total` for ladder displays.
pub fn tier_status(tier: &UnlockTier, next: Option<&UnlockTier>, total: Points) -> TierStatus {
    if tier.threshold <= total {
        TierStatus::Unlocked
    } else if next.is_some_and(|n| n == tier) {
        TierStatus::Next
    } else {
        TierStatus::Locked
    }
}

// ============================================================================
// Progress
// ============================================================================

/// Progress from the last reached threshold (or 0) toward the next tier.
///
/// A zero-width span reads as 100% instead of dividing by zero.
pub fn compute_progress(tiers: &[UnlockTier], total: Points) -> Progress {
    let unlocked = get_unlocked(tiers, total);
    let Some(next) = get_next_unlock(tiers, total) else {
        return Progress::MAXED;
    };

    let prev = unlocked.last().map_or(0, |t| t.threshold);
    let span = i64::from(next.threshold) - i64::from(prev);
    let into = i64::from(total) - i64::from(prev);

    let percent = if span == 0 {
        100.0
    } else {
        (into as f64 / span as f64 * 100.0).clamp(0.0, 100.0)
    };

    Progress {
        percent,
        points_remaining: next.threshold.saturating_sub(total),
        maxed_out: false,
    }
}

/// Run every engine operation for one selection snapshot.
pub fn summarize(activities: &[Activity], tiers: &[UnlockTier], selection: &Selection) -> Summary {
    let total = compute_total(activities, selection);
    Summary {
        total,
        unlocked: get_unlocked(tiers, total),
        next: get_next_unlock(tiers, total),
        progress: compute_progress(tiers, total),
    }
}
