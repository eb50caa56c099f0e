//! Learn detail screen
//!
//! A pure projection of one table: its ten rows, nothing mutable.

use crate::models::Table;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::shell::KeyHint;

#[derive(Debug, Clone, Copy)]
pub struct LearnDetailScreen {
    table: Table,
}

impl LearnDetailScreen {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    /// Text of each row, in ascending multiplier order
    pub fn lines(&self) -> Vec<String> {
        self.table.rows().map(|row| row.to_string()).collect()
    }

    pub fn hints(&self) -> &'static [KeyHint] {
        &[("Esc", "Back"), ("Q", "Quit")]
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.lines().into_iter().map(Line::from).collect();
        let rows = Paragraph::new(lines)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(rows, area);
    }
}
