//! Tier engine scenarios against the default catalog
//!
//! Catalog: guided_prompts=10, coparenting=15, journaling=12, goal_setting=10,
//! structured_checkin=8, reflection=10; tiers at 20/40/60/80.

use tiercalc::{
    compute_progress, compute_total, get_next_unlock, get_unlocked, summarize, Catalog, Selection,
};

fn selection(ids: &[&str]) -> Selection {
    ids.iter().copied().collect()
}

fn thresholds(tiers: &[tiercalc::UnlockTier]) -> Vec<u32> {
    tiers.iter().map(|t| t.threshold).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_empty_selection() {
    let catalog = Catalog::default();
    let summary = summarize(&catalog.activities, &catalog.tiers, &Selection::new());

    assert_eq!(summary.total, 0);
    assert!(summary.unlocked.is_empty());
    let next = summary.next.expect("first tier is next");
    assert_eq!(next.threshold, 20);
    assert!(next.label.starts_with("Additional call minutes"));
    assert_eq!(summary.progress.percent, 0.0);
    assert_eq!(summary.progress.points_remaining, 20);
    assert!(!summary.progress.maxed_out);
}

#[test]
fn test_example_bundle_lands_on_threshold() {
    let catalog = Catalog::default();
    let sel = selection(&["guided_prompts", "journaling", "structured_checkin", "goal_setting"]);
    let summary = summarize(&catalog.activities, &catalog.tiers, &sel);

    assert_eq!(summary.total, 40);
    assert_eq!(thresholds(&summary.unlocked), vec![20, 40]);
    assert_eq!(summary.next.map(|t| t.threshold), Some(60));
    assert_eq!(summary.progress.percent, 0.0);
    assert_eq!(summary.progress.points_remaining, 20);
}

#[test]
fn test_partial_progress_in_second_tier() {
    let catalog = Catalog::default();
    let summary = summarize(
        &catalog.activities,
        &catalog.tiers,
        &selection(&["guided_prompts", "coparenting"]),
    );

    assert_eq!(summary.total, 25);
    assert_eq!(thresholds(&summary.unlocked), vec![20]);
    assert_eq!(summary.next.map(|t| t.threshold), Some(40));
    assert_eq!(summary.progress.percent, 25.0);
    assert_eq!(summary.progress.points_remaining, 15);
}

#[test]
fn test_all_activities() {
    let catalog = Catalog::default();
    let all: Vec<&str> = catalog.activities.iter().map(|a| a.id.as_str()).collect();
    let summary = summarize(&catalog.activities, &catalog.tiers, &selection(&all));

    assert_eq!(summary.total, 65);
    assert_eq!(thresholds(&summary.unlocked), vec![20, 40, 60]);
    assert_eq!(summary.next.map(|t| t.threshold), Some(80));
    assert_eq!(summary.progress.percent, 25.0);
    assert_eq!(summary.progress.points_remaining, 15);
}

#[test]
fn test_unknown_id_contributes_zero() {
    let catalog = Catalog::default();
    let total = compute_total(&catalog.activities, &selection(&["stale_id", "guided_prompts"]));
    assert_eq!(total, 10);
}

#[test]
fn test_maxed_out_at_and_above_last_threshold() {
    let catalog = Catalog::default();
    for total in [80, 81, 1_000] {
        assert!(get_next_unlock(&catalog.tiers, total).is_none());
        assert_eq!(get_unlocked(&catalog.tiers, total).len(), catalog.tiers.len());

        let progress = compute_progress(&catalog.tiers, total);
        assert!(progress.maxed_out);
        assert_eq!(progress.percent, 100.0);
        assert_eq!(progress.points_remaining, 0);
    }
}

// =============================================================================
// Boundaries
// =============================================================================

#[test]
fn test_one_below_threshold() {
    let catalog = Catalog::default();
    let progress = compute_progress(&catalog.tiers, 39);
    assert_eq!(progress.percent, 95.0);
    assert_eq!(progress.points_remaining, 1);
    assert_eq!(get_unlocked(&catalog.tiers, 39).len(), 1);
}

#[test]
fn test_crossing_a_threshold_restarts_the_meter() {
    let catalog = Catalog::default();
    let before = compute_progress(&catalog.tiers, 59);
    let after = compute_progress(&catalog.tiers, 60);
    assert!(before.percent > after.percent);
    assert_eq!(after.percent, 0.0);
}

#[test]
fn test_repeated_calls_are_identical() {
    let catalog = Catalog::default();
    let sel = selection(&["journaling", "reflection"]);
    let first = summarize(&catalog.activities, &catalog.tiers, &sel);
    let second = summarize(&catalog.activities, &catalog.tiers, &sel);
    assert_eq!(first, second);
}
