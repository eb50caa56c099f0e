//! Home screen implementation
//!
//! Entry menu offering Learn and Practice.

use crate::app::route::Screen;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::shell::KeyHint;

/// Credit line shown beneath the menu
pub const CREDIT: &str = "Designed by Rebeca Martinez with ♥";

const MENU: [(&str, Screen); 2] = [("Learn", Screen::LearnList), ("Practice", Screen::Practice)];

/// Home screen component
#[derive(Debug)]
pub struct HomeScreen {
    selected_index: usize,
    list_state: ListState,
}

impl HomeScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    /// Screen the highlighted menu entry links to
    pub fn selected_target(&self) -> Screen {
        MENU[self.selected_index].1
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = MENU.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % MENU.len();
        self.list_state.select(Some(self.selected_index));
    }

    pub fn hints(&self) -> &'static [KeyHint] {
        &[("↑↓", "Navigate"), ("Enter", "Open"), ("Q", "Quit")]
    }

    /// Render the menu into the shell body
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Subtitle
                Constraint::Length(6), // Menu
                Constraint::Length(2),
                Constraint::Length(1), // Credit
                Constraint::Min(0),
            ])
            .split(area);

        let subtitle = Paragraph::new("An educational terminal app")
            .style(Style::default().fg(Color::Magenta))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, chunks[0]);

        let items: Vec<ListItem> = MENU
            .iter()
            .map(|(label, _)| ListItem::new(*label))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Choose a mode"))
            .highlight_style(
                Style::default()
                    .bg(Color::Magenta)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let credit = Paragraph::new(CREDIT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(credit, chunks[3]);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}
