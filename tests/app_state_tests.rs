//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - AppMode switching and per-mode cursors
//! - Selection changes driven through the state and key handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strum::IntoEnumIterator;
use tiercalc::app::{App, AppMode, AppState};
use tiercalc::Catalog;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_mode_is_activities() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::Activities);
}

#[test]
fn test_app_state_default_cursors_are_zero() {
    let state = AppState::default();
    assert_eq!(state.activity_cursor, 0);
    assert_eq!(state.tier_cursor, 0);
}

#[test]
fn test_app_state_default_help_not_visible() {
    let state = AppState::default();
    assert!(!state.help_visible);
}

#[test]
fn test_app_state_default_selection_is_empty() {
    let state = AppState::default();
    assert!(state.calculator.selection().is_empty());
    assert_eq!(state.calculator.summary().total, 0);
}

// =============================================================================
// AppMode Tests
// =============================================================================

#[test]
fn test_app_mode_display_names() {
    let names: Vec<String> = AppMode::iter().map(|m| m.to_string()).collect();
    assert_eq!(names, vec!["Activities", "Unlock Tiers"]);
}

#[test]
fn test_app_mode_other_round_trips() {
    for mode in AppMode::iter() {
        assert_ne!(mode.other(), mode);
        assert_eq!(mode.other().other(), mode);
    }
}

// =============================================================================
// State Transitions
// =============================================================================

#[test]
fn test_toggle_current_updates_total_and_status() {
    let mut state = AppState::default();
    state.move_down(); // coparenting
    state.toggle_current();

    assert_eq!(state.calculator.summary().total, 15);
    assert!(state.status_message.starts_with("Added Co-parenting exercise"));

    state.toggle_current();
    assert_eq!(state.calculator.summary().total, 0);
    assert!(state.status_message.starts_with("Removed"));
}

#[test]
fn test_load_example_then_reset() {
    let mut state = AppState::default();
    state.load_example();
    assert_eq!(state.calculator.summary().total, 40);
    assert_eq!(state.status_message, "Example loaded: 40 credits");

    state.reset();
    assert_eq!(state.calculator.summary().total, 0);
    assert_eq!(state.status_message, "Selection cleared");
}

#[test]
fn test_load_example_without_preset_reports_error() {
    let mut catalog = Catalog::default();
    catalog.presets.clear();
    let mut state = AppState::new(catalog);
    state.load_example();
    assert!(state.status_message.contains("Unknown preset"));
    assert!(state.calculator.selection().is_empty());
}

#[test]
fn test_toggle_on_empty_catalog_is_noop() {
    let mut catalog = Catalog::default();
    catalog.activities.clear();
    let mut state = AppState::new(catalog);
    state.toggle_current();
    assert!(state.calculator.selection().is_empty());
    assert_eq!(state.row_count(), 0);
}

// =============================================================================
// Key Handling
// =============================================================================

#[test]
fn test_space_toggles_activity_under_cursor() {
    let mut app = App::new(Catalog::default());
    assert!(!app.handle_key_event(press(KeyCode::Char(' '))));
    assert!(app.state().calculator.is_selected("guided_prompts"));
    assert_eq!(app.state().calculator.summary().total, 10);
}

#[test]
fn test_space_ignored_in_tier_panel() {
    let mut app = App::new(Catalog::default());
    app.handle_key_event(press(KeyCode::Tab));
    assert_eq!(app.state().mode, AppMode::Tiers);
    app.handle_key_event(press(KeyCode::Char(' ')));
    assert!(app.state().calculator.selection().is_empty());
}

#[test]
fn test_quit_keys() {
    let mut app = App::new(Catalog::default());
    assert!(app.handle_key_event(press(KeyCode::Char('q'))));
    assert!(app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}

#[test]
fn test_help_overlay_swallows_actions() {
    let mut app = App::new(Catalog::default());
    app.handle_key_event(press(KeyCode::Char('?')));
    assert!(app.state().help_visible);

    // Example key does nothing while help is open
    app.handle_key_event(press(KeyCode::Char('e')));
    assert_eq!(app.state().calculator.summary().total, 0);

    // Quit closes help instead of exiting
    assert!(!app.handle_key_event(press(KeyCode::Char('q'))));
    assert!(!app.state().help_visible);
}

#[test]
fn test_release_events_ignored() {
    let mut app = App::new(Catalog::default());
    let mut event = press(KeyCode::Char('e'));
    event.kind = KeyEventKind::Release;
    assert!(!app.handle_key_event(event));
    assert_eq!(app.state().calculator.summary().total, 0);
}

#[test]
fn test_example_then_reset_keys() {
    let mut app = App::new(Catalog::default());
    app.handle_key_event(press(KeyCode::Char('e')));
    let summary = app.state().calculator.summary();
    assert_eq!(summary.total, 40);
    assert_eq!(summary.unlocked.len(), 2);

    app.handle_key_event(press(KeyCode::Char('r')));
    assert_eq!(app.state().calculator.summary().total, 0);
}
