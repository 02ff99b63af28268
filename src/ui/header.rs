//! Header and common widget rendering
//!
//! Title bar, progress gauge, status line, and navigation bar.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Colors, Styles};
use crate::types::Progress;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the title bar
pub fn render_title(f: &mut Frame, area: Rect, title: &str) {
    let title_widget = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Styles::title());
    f.render_widget(title_widget, area);
}

/// Render the gauge toward the next unlock
pub fn render_progress_bar(f: &mut Frame, area: Rect, progress: &Progress) {
    let label = if progress.maxed_out {
        "100% (maxed out)".to_string()
    } else {
        format!("{:.0}%", progress.percent)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Progress to next unlock"),
        )
        .gauge_style(Styles::gauge())
        .percent(progress.percent_u16())
        .label(label);
    f.render_widget(gauge, area);
}

/// Render the one-line status message
pub fn render_status(f: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(state.status_message.clone(), Style::default().fg(Colors::FG_SECONDARY)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.mode);
    NavBar::new(nav_items).render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let area = f.area();
    HelpOverlay::new(&state.mode, keybinding_ctx).render(f, area);
}
