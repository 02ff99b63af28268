//! User interface rendering module
//!
//! - `header` - Title, gauge, status line, nav bar, help overlay
//! - `calculator` - Activity checklist, summary, and tier ladder panels

mod calculator;
mod header;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Title shown at the top of the screen
pub const APP_TITLE: &str = "Credit Tier Calculator";

/// Stateless renderer for the whole screen
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI from application state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Panels
                Constraint::Length(1), // Status
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        header::render_title(f, chunks[0], APP_TITLE);
        calculator::render_calculator_in_area(f, state, chunks[1]);
        header::render_status(f, chunks[2], state);
        header::render_nav_bar(f, state, keybinding_ctx, chunks[3]);

        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
