//! Learn list screen
//!
//! Lists the supported tables; selecting one opens its detail screen.

use crate::models::Table;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::shell::KeyHint;

/// Learn list screen component
#[derive(Debug)]
pub struct LearnListScreen {
    tables: Vec<Table>,
    selected_index: usize,
    list_state: ListState,
}

impl LearnListScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            tables: Table::all().collect(),
            selected_index: 0,
            list_state,
        }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn selected_table(&self) -> Table {
        self.tables[self.selected_index]
    }

    /// Return the highlight to the first table
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.tables.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.tables.len();
        self.list_state.select(Some(self.selected_index));
    }

    pub fn hints(&self) -> &'static [KeyHint] {
        &[("↑↓", "Navigate"), ("Enter", "Open"), ("Esc", "Back"), ("Q", "Quit")]
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .tables
            .iter()
            .map(|table| {
                ListItem::new(Line::from(vec![
                    Span::raw(table.label()),
                    Span::styled("  ›", Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .bg(Color::Magenta)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for LearnListScreen {
    fn default() -> Self {
        Self::new()
    }
}
