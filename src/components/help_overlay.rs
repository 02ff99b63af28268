//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Sizing rules for the floating window
#[derive(Debug, Clone, Copy)]
pub struct OverlaySize {
    pub width_percent: u16,
    pub height_percent: u16,
    pub min_width: u16,
    pub min_height: u16,
    pub max_width: u16,
    pub max_height: u16,
}

impl Default for OverlaySize {
    fn default() -> Self {
        Self {
            width_percent: 60,
            height_percent: 70,
            min_width: 44,
            min_height: 14,
            max_width: 72,
            max_height: 30,
        }
    }
}

impl OverlaySize {
    /// Centered rectangle inside `parent`, never larger than `parent`
    pub fn centered_in(&self, parent: Rect) -> Rect {
        let width = percent_of(parent.width, self.width_percent)
            .clamp(self.min_width, self.max_width)
            .min(parent.width);
        let height = percent_of(parent.height, self.height_percent)
            .clamp(self.min_height, self.max_height)
            .min(parent.height);
        Rect {
            x: parent.x + (parent.width - width) / 2,
            y: parent.y + (parent.height - height) / 2,
            width,
            height,
        }
    }
}

/// `percent`% of `len`, computed wide so large terminals cannot overflow
fn percent_of(len: u16, percent: u16) -> u16 {
    let scaled = u32::from(len) * u32::from(percent) / 100;
    u16::try_from(scaled).unwrap_or(u16::MAX)
}

/// Help overlay component
pub struct HelpOverlay {
    size: OverlaySize,
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            size: OverlaySize::default(),
            content: Self::build_content(&sections, mode),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], mode: &AppMode) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(mode.to_string(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Credits add up as activities are selected; each tier unlocks once the total reaches its threshold.",
            Styles::text_secondary(),
        )]));

        lines
    }

    #[cfg(test)]
    fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = self.size.centered_in(parent);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_style(Styles::title())
            .title_bottom(Line::from(" Press ? or Esc to close ").alignment(Alignment::Center))
            .border_style(Style::default().fg(Colors::PRIMARY))
            .style(Style::default().bg(Colors::BG_PRIMARY));

        let paragraph = Paragraph::new(self.content.clone())
            .block(block)
            .wrap(Wrap { trim: false });

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}
