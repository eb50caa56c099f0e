//! Navigation state management
//!
//! Owns the history stack of screens and translates keyboard events into
//! navigation actions.

use super::route::Screen;
use crate::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back one step in history (Esc, Backspace)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// History of visited screens, most recent last
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Screen>,
    should_quit: bool,
}

impl Navigator {
    /// Create a navigator positioned at Home
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Home],
            should_quit: false,
        }
    }

    /// Create a navigator positioned at `path`, with its ancestors as history
    pub fn open_path(path: &str) -> Result<Self> {
        let screen = Screen::from_path(path)?;
        info!(path, screen = %screen.path(), "Opening route");
        Ok(Self {
            stack: screen.ancestry(),
            should_quit: false,
        })
    }

    /// The screen currently displayed
    pub fn current(&self) -> Screen {
        // The stack always holds at least the root screen
        self.stack.last().copied().unwrap_or_default()
    }

    /// Screens in visiting order, root first
    pub fn history(&self) -> &[Screen] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Follow a link from the current screen.
    ///
    /// Returns `false` and leaves history unchanged when `target` is not a
    /// link of the current screen.
    pub fn follow(&mut self, target: Screen) -> bool {
        let current = self.current();
        if !current.links().contains(&target) {
            debug!(from = %current.path(), to = %target.path(), "Ignoring unlinked navigation");
            return false;
        }
        debug!(from = %current.path(), to = %target.path(), "Navigating forward");
        self.stack.push(target);
        true
    }

    /// Return to the previous screen. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(left) = self.stack.pop() {
            debug!(from = %left.path(), to = %self.current().path(), "Navigating back");
        }
        true
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
