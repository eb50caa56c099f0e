//! Common chrome drawn around every screen
//!
//! A header with the screen title (and a back marker when the screen can go
//! back), the body area handed to the screen, and a key help footer.

use crate::app::route::Screen;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Marker shown in the header of screens with a back control
pub const BACK_MARKER: &str = "← Esc";

/// A key and what it does, shown in the footer
pub type KeyHint = (&'static str, &'static str);

/// Draw header and footer for `screen` and return the body area
pub fn render_shell(f: &mut Frame, screen: &Screen, hints: &[KeyHint]) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Help
        ])
        .split(f.size());

    render_header(f, chunks[0], screen);
    render_help(f, chunks[2], hints);
    chunks[1]
}

fn render_header(f: &mut Frame, area: Rect, screen: &Screen) {
    let mut spans = Vec::new();
    if screen.has_back() {
        spans.push(Span::styled(
            BACK_MARKER,
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        screen.title(),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(header, area);
}

fn render_help(f: &mut Frame, area: Rect, hints: &[KeyHint]) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(format!(" {}  ", action)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(help, area);
}
