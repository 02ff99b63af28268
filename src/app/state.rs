//! Application state definitions
//!
//! Contains the UI-side state: focus mode, cursor positions, and status line.
//! The selection and the computed summary live in the [`Calculator`].

use strum::{Display, EnumIter};

use crate::catalog::Catalog;
use crate::session::Calculator;

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Current focus mode
    pub mode: AppMode,
    /// Catalog, selection, and derived summary
    pub calculator: Calculator,
    /// Cursor row in the activity list
    pub activity_cursor: usize,
    /// Cursor row in the tier ladder
    pub tier_cursor: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

/// Application focus modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AppMode {
    /// Activity checklist has focus
    #[strum(serialize = "Activities")]
    Activities,
    /// Unlock tier ladder has focus
    #[strum(serialize = "Unlock Tiers")]
    Tiers,
}

impl AppMode {
    /// The other panel
    pub fn other(self) -> Self {
        match self {
            Self::Activities => Self::Tiers,
            Self::Tiers => Self::Activities,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            mode: AppMode::Activities,
            calculator: Calculator::new(catalog),
            activity_cursor: 0,
            tier_cursor: 0,
            status_message: "Select activities to earn credits".to_string(),
            help_visible: false,
        }
    }

    /// Number of rows in the focused list
    pub fn row_count(&self) -> usize {
        let catalog = self.calculator.catalog();
        match self.mode {
            AppMode::Activities => catalog.activities.len(),
            AppMode::Tiers => catalog.tiers.len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.mode {
            AppMode::Activities => &mut self.activity_cursor,
            AppMode::Tiers => &mut self.tier_cursor,
        }
    }

    pub fn cursor(&self) -> usize {
        match self.mode {
            AppMode::Activities => self.activity_cursor,
            AppMode::Tiers => self.tier_cursor,
        }
    }

    pub fn move_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let last = self.row_count().saturating_sub(1);
        let cursor = self.cursor_mut();
        *cursor = (*cursor + 1).min(last);
    }

    pub fn move_first(&mut self) {
        *self.cursor_mut() = 0;
    }

    pub fn move_last(&mut self) {
        let last = self.row_count().saturating_sub(1);
        *self.cursor_mut() = last;
    }

    /// Toggle the activity under the cursor and describe the result
    pub fn toggle_current(&mut self) {
        let Some(activity) = self
            .calculator
            .catalog()
            .activities
            .get(self.activity_cursor)
            .cloned()
        else {
            return;
        };

        let selected = self.calculator.toggle(&activity.id);
        self.status_message = if selected {
            format!("Added {} (+{} credits)", activity.title, activity.points)
        } else {
            format!("Removed {} (-{} credits)", activity.title, activity.points)
        };
    }

    /// Load the example bundle
    pub fn load_example(&mut self) {
        self.status_message = match self.calculator.load_example() {
            Ok(()) => format!(
                "Example loaded: {} credits",
                self.calculator.summary().total
            ),
            Err(e) => e.to_string(),
        };
    }

    /// Clear the selection
    pub fn reset(&mut self) {
        self.calculator.reset();
        self.status_message = "Selection cleared".to_string();
    }

    pub fn switch_focus(&mut self) {
        self.mode = self.mode.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = AppState::default();
        state.move_up();
        assert_eq!(state.cursor(), 0);
        for _ in 0..20 {
            state.move_down();
        }
        assert_eq!(state.cursor(), 5);
    }

    #[test]
    fn test_cursors_are_per_mode() {
        let mut state = AppState::default();
        state.move_last();
        state.switch_focus();
        assert_eq!(state.mode, AppMode::Tiers);
        assert_eq!(state.cursor(), 0);
        state.move_last();
        assert_eq!(state.cursor(), 3);
        state.switch_focus();
        assert_eq!(state.cursor(), 5);
    }
}
