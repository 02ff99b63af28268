//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the focused panel.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Home,
    End,
    Toggle,
    LoadExample,
    Reset,
    SwitchPanel,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
    /// Alternate keys are matched but left out of the nav bar and help
    pub hidden: bool,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
            hidden: false,
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            modifiers,
            ..Self::new(key, action, display, description)
        }
    }

    /// Create an alternate key for an action already listed elsewhere
    pub fn alias(key: KeyCode, action: KeyAction) -> Self {
        Self {
            hidden: true,
            ..Self::new(key, action, "", "")
        }
    }

    fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        self.key == key && modifiers.contains(self.modifiers)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::SwitchPanel, "Tab", "Switch panel"),
            Keybinding::new(KeyCode::Char('e'), KeyAction::LoadExample, "E", "Load example"),
            Keybinding::new(KeyCode::Char('r'), KeyAction::Reset, "R", "Reset"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::alias(KeyCode::Esc, KeyAction::Quit),
            Keybinding::alias(KeyCode::BackTab, KeyAction::SwitchPanel),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        let navigation = vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
            Keybinding::alias(KeyCode::Char('k'), KeyAction::NavigateUp),
            Keybinding::alias(KeyCode::Char('j'), KeyAction::NavigateDown),
            Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "Go to first"),
            Keybinding::new(KeyCode::End, KeyAction::End, "End", "Go to last"),
        ];

        // Activities
        let mut activities = navigation.clone();
        activities.extend([
            Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Add/Remove"),
            Keybinding::alias(KeyCode::Enter, KeyAction::Toggle),
        ]);
        self.mode_bindings.insert(AppMode::Activities, activities);

        // Tier ladder is read-only
        self.mode_bindings.insert(AppMode::Tiers, navigation);
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press to an action in the given mode.
    ///
    /// Bindings with modifiers are tried first so Ctrl+C is not read as `c`.
    pub fn resolve(&self, mode: &AppMode, key: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        let bindings = self.get_bindings(mode);
        bindings
            .iter()
            .filter(|b| !b.modifiers.is_empty())
            .chain(bindings.iter().filter(|b| b.modifiers.is_empty()))
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Activities => vec![
                KeyAction::NavigateUp,
                KeyAction::Toggle,
                KeyAction::LoadExample,
                KeyAction::Reset,
                KeyAction::SwitchPanel,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Tiers => vec![
                KeyAction::NavigateUp,
                KeyAction::SwitchPanel,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            // Up/Down collapse into one item
            if action == KeyAction::NavigateUp {
                items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Navigate".to_string(),
                });
                continue;
            }

            if let Some(binding) = bindings
                .iter()
                .find(|b| b.action == action && !b.hidden && b.modifiers.is_empty())
            {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp | KeyAction::NavigateDown | KeyAction::Home | KeyAction::End
                )
            }),
            ("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Toggle | KeyAction::LoadExample | KeyAction::Reset
                )
            }),
            ("General", |a| {
                matches!(a, KeyAction::SwitchPanel | KeyAction::Help | KeyAction::Quit)
            }),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, in_group)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| !b.hidden && in_group(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
