//! Calculator screen panels
//!
//! The activity checklist on the left, the live summary and tier ladder on
//! the right. Nothing here computes credits; it only reads the summary held
//! by the calculator session.

use super::header;
use crate::app::{AppMode, AppState};
use crate::engine::tiers::tier_status;
use crate::report;
use crate::theme::{check_marker, tier_marker, Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the activity list and the summary column side by side
pub fn render_calculator_in_area(f: &mut Frame, state: &AppState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_activities(f, state, columns[0]);
    render_summary_column(f, state, columns[1]);
}

fn panel(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Styles::title())
        .border_style(Styles::border(focused))
}

/// Two lines per activity: title with points, then the description
fn render_activities(f: &mut Frame, state: &AppState, area: Rect) {
    let calculator = &state.calculator;
    let focused = state.mode == AppMode::Activities;

    let items: Vec<ListItem> = calculator
        .catalog()
        .activities
        .iter()
        .enumerate()
        .map(|(index, activity)| {
            let selected = calculator.is_selected(&activity.id);
            let is_cursor = focused && index == state.activity_cursor;

            let title_style = if is_cursor {
                Styles::cursor()
            } else {
                Styles::text()
            };
            let marker_style = if selected {
                Style::default().fg(Colors::SELECTED_ITEM)
            } else {
                Styles::text_muted()
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", check_marker(selected)), marker_style),
                    Span::styled(activity.title.clone(), title_style),
                    Span::styled(
                        format!("  {}", report::activity_points_label(activity)),
                        marker_style,
                    ),
                ]),
                Line::from(Span::styled(
                    format!("    {}", activity.description),
                    Styles::text_secondary(),
                )),
            ])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.activity_cursor));

    let list = List::new(items)
        .block(panel("Activities", focused))
        .highlight_symbol(if focused { "▸ " } else { "  " });

    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_summary_column(f: &mut Frame, state: &AppState, area: Rect) {
    let summary = state.calculator.summary();
    let unlocked_lines = report::unlocked_lines(summary);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                // Total
            Constraint::Length(unlocked_lines.len() as u16 + 2), // Unlocked
            Constraint::Length(3),                                // Gauge
            Constraint::Length(4),                                // Next note
            Constraint::Min(3),                                   // Tier ladder
        ])
        .split(area);

    let total = Paragraph::new(Line::from(vec![
        Span::styled("Total credits: ", Styles::text_secondary()),
        Span::styled(summary.total.to_string(), Styles::total()),
    ]))
    .block(panel("Summary", false));
    f.render_widget(total, rows[0]);

    let unlocked_style = if summary.unlocked.is_empty() {
        Styles::text_muted()
    } else {
        Styles::success()
    };
    let unlocked: Vec<Line> = unlocked_lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, unlocked_style)))
        .collect();
    f.render_widget(
        Paragraph::new(unlocked).block(panel("Unlocked", false)),
        rows[1],
    );

    header::render_progress_bar(f, rows[2], &summary.progress);

    let note = Paragraph::new(report::next_unlock_note(summary))
        .style(Styles::text())
        .wrap(Wrap { trim: true })
        .block(panel("Next", false));
    f.render_widget(note, rows[3]);

    render_tier_ladder(f, state, rows[4]);
}

fn render_tier_ladder(f: &mut Frame, state: &AppState, area: Rect) {
    let summary = state.calculator.summary();
    let focused = state.mode == AppMode::Tiers;

    let items: Vec<ListItem> = state
        .calculator
        .catalog()
        .tiers
        .iter()
        .map(|tier| {
            let status = tier_status(tier, summary.next.as_ref(), summary.total);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", tier_marker(status)), Styles::tier(status)),
                Span::styled(format!("{:>4}+ ", tier.threshold), Styles::tier(status)),
                Span::styled(tier.label.clone(), Styles::tier(status)),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.tier_cursor));
    }

    let list = List::new(items)
        .block(panel("Unlock Tiers", focused))
        .highlight_style(Styles::cursor())
        .highlight_symbol("▸ ");

    f.render_stateful_widget(list, area, &mut list_state);
}
