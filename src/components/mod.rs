//! Reusable UI components: keybinding registry, navigation bar, help overlay.

pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
