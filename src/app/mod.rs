//! Application module
//!
//! Contains the main application loop and key handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState};

use crate::catalog::Catalog;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::types::Summary;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance
    pub fn new(catalog: Catalog) -> Self {
        info!(
            activities = catalog.activities.len(),
            tiers = catalog.tiers.len(),
            "Creating new App instance"
        );
        let mut state = AppState::new(catalog);
        state.calculator.subscribe(unlock_logger());

        Self {
            state,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context)
            })?;

            if crossterm::event::poll(POLL_INTERVAL)? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event) {
                        break;
                    }
                }
            }
        }

        info!("Main application loop finished");
        Ok(())
    }

    /// Handle one key press. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return false;
        }

        let action = self.keybinding_context.resolve(
            &self.state.mode,
            key_event.code,
            key_event.modifiers,
        );

        // Help overlay swallows everything except its own dismissal
        if self.state.help_visible {
            if matches!(action, Some(KeyAction::Help | KeyAction::Quit)) {
                self.toggle_help();
            }
            return false;
        }

        let Some(action) = action else {
            return false;
        };
        debug!(?action, mode = %self.state.mode, "key action");

        match action {
            KeyAction::NavigateUp => self.state.move_up(),
            KeyAction::NavigateDown => self.state.move_down(),
            KeyAction::Home => self.state.move_first(),
            KeyAction::End => self.state.move_last(),
            KeyAction::Toggle => self.state.toggle_current(),
            KeyAction::LoadExample => self.state.load_example(),
            KeyAction::Reset => self.state.reset(),
            KeyAction::SwitchPanel => self.state.switch_focus(),
            KeyAction::Help => self.toggle_help(),
            KeyAction::Quit => return true,
        }

        false
    }
}

/// Run `body`, then `restore`, whether `body` returned early with an error or not.
///
/// Terminal setup steps go inside `body` so a failure halfway through setup
/// still leaves the terminal in cooked mode.
pub fn run_then_restore<T>(body: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    let result = body();
    restore();
    result
}

/// Listener that logs whenever the set of unlocked tiers grows or shrinks
fn unlock_logger() -> impl FnMut(&Summary) + 'static {
    let mut last_unlocked = 0usize;
    move |summary: &Summary| {
        let now = summary.unlocked.len();
        if now > last_unlocked {
            if let Some(tier) = summary.unlocked.last() {
                info!(threshold = tier.threshold, label = %tier.label, "tier unlocked");
            }
        } else if now < last_unlocked {
            info!(unlocked = now, "tiers relocked");
        }
        last_unlocked = now;
    }
}
