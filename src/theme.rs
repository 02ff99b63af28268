//! Centralized theme and styling for the TUI
//!
//! Single source of truth for all colors and styles used by the calculator
//! screens.
//!
//! # Usage
//! ```rust
//! use tiercalc::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::types::TierStatus;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Primary dark background - used for panels and the help overlay
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Gauge background
    pub const BG_GAUGE: Color = Color::Rgb(40, 40, 50);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - cursor row, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused panel border
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Unfocused panel border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected activity check mark and points
    pub const SELECTED_ITEM: Color = Color::LightGreen;

    /// Progress bar fill
    pub const PROGRESS: Color = Color::Green;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Credit total
    pub const TOTAL: Color = Color::LightYellow;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for a panel depending on focus
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Cursor row highlight
    pub fn cursor() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Large credit total
    pub fn total() -> Style {
        Style::default()
            .fg(Colors::TOTAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Colors::PROGRESS).bg(Colors::BG_GAUGE)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// Semantic style for a tier in the ladder view
    pub fn tier(status: TierStatus) -> Style {
        match status {
            TierStatus::Unlocked => Style::default().fg(Colors::SUCCESS),
            TierStatus::Next => Style::default()
                .fg(Colors::WARNING)
                .add_modifier(Modifier::BOLD),
            TierStatus::Locked => Style::default().fg(Colors::FG_MUTED),
        }
    }
}

/// Marker glyph for a tier in the ladder view
pub fn tier_marker(status: TierStatus) -> &'static str {
    match status {
        TierStatus::Unlocked => "✓",
        TierStatus::Next => "▸",
        TierStatus::Locked => "○",
    }
}

/// Marker glyph for an activity row
pub fn check_marker(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}
