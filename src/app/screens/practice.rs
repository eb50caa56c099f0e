//! Practice screen implementation
//!
//! Shows one question at a time with an answer field. Enter checks the
//! answer, and once checked, Enter draws the next question.

use crate::quiz::{Evaluation, Outcome, PracticeSession, QuestionGenerator, RandomSource};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::info;

use super::shell::KeyHint;

const PLACEHOLDER: &str = "Type your answer";

/// What a key press did on the practice screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeKey {
    /// The key edited the answer or advanced the quiz
    Handled,
    /// The key means nothing to this screen
    Ignored,
}

/// Practice screen component
#[derive(Debug)]
pub struct PracticeScreen {
    session: PracticeSession,
}

impl PracticeScreen {
    /// Enter Practice with a freshly generated question
    pub fn new<R: RandomSource>(generator: &mut QuestionGenerator<R>) -> Self {
        Self {
            session: PracticeSession::start(generator),
        }
    }

    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    /// Handle keys owned by the answer field and the Check/Next action
    pub fn handle_key<R: RandomSource>(
        &mut self,
        key: KeyEvent,
        generator: &mut QuestionGenerator<R>,
    ) -> PracticeKey {
        match key.code {
            // Every character belongs to the answer field; non-digits are dropped
            KeyCode::Char(c) => {
                self.session.push_digit(c);
                PracticeKey::Handled
            }
            KeyCode::Backspace => {
                self.session.backspace();
                PracticeKey::Handled
            }
            KeyCode::Enter => {
                self.activate(generator);
                PracticeKey::Handled
            }
            _ => PracticeKey::Ignored,
        }
    }

    /// Press the action button: Check while answering, Next once checked
    pub fn activate<R: RandomSource>(&mut self, generator: &mut QuestionGenerator<R>) {
        if self.session.is_locked() {
            self.session.next(generator);
            return;
        }
        match self.session.check() {
            Evaluation::Pending(_) => {}
            evaluation => info!(question = %self.session.question(), ?evaluation, "Practice answer"),
        }
    }

    /// Label of the action button
    pub fn action_label(&self) -> &'static str {
        if self.session.is_locked() {
            "Next"
        } else {
            "Check"
        }
    }

    pub fn hints(&self) -> &'static [KeyHint] {
        if self.session.is_locked() {
            &[("Enter", "Next"), ("Esc", "Back")]
        } else {
            &[("0-9", "Type"), ("Enter", "Check"), ("Esc", "Back")]
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Question
                Constraint::Length(3), // Answer field
                Constraint::Length(2), // Feedback
                Constraint::Length(3), // Action
                Constraint::Min(0),
            ])
            .split(area);

        let question = Paragraph::new(self.session.question().to_string())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(question, chunks[0]);

        f.render_widget(self.answer_field(), centered(chunks[1], 24));

        if let Some(outcome) = self.session.outcome() {
            let color = match outcome {
                Outcome::Correct => Color::Green,
                Outcome::Incorrect { .. } => Color::Red,
            };
            let feedback = Paragraph::new(outcome.message())
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            f.render_widget(feedback, chunks[2]);
        }

        let action = Paragraph::new(Line::from(vec![
            Span::styled("[ Enter ] ", Style::default().fg(Color::Cyan)),
            Span::styled(
                self.action_label(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(action, chunks[3]);
    }

    fn answer_field(&self) -> Paragraph<'static> {
        let input = self.session.input();
        let (text, style) = if self.session.is_locked() {
            (input.to_string(), Style::default().fg(Color::DarkGray))
        } else if input.is_empty() {
            (PLACEHOLDER.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (input.to_string(), Style::default().fg(Color::White))
        };

        let border = if self.session.is_locked() {
            Color::DarkGray
        } else {
            Color::Magenta
        };
        Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
    }
}

/// Horizontally center a box of `width` columns within `area`
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Question, SmallRngSource};
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_answer<R: RandomSource>(
        screen: &mut PracticeScreen,
        generator: &mut QuestionGenerator<R>,
        answer: u32,
    ) {
        for c in answer.to_string().chars() {
            screen.handle_key(press(KeyCode::Char(c)), generator);
        }
    }

    #[test]
    fn test_enter_on_empty_input_does_nothing() {
        let mut generator = QuestionGenerator::new(SmallRngSource::seeded(1));
        let mut screen = PracticeScreen::new(&mut generator);
        let question = *screen.session().question();

        screen.handle_key(press(KeyCode::Enter), &mut generator);
        assert!(!screen.session().is_locked());
        assert_eq!(*screen.session().question(), question);
        assert_eq!(screen.action_label(), "Check");
    }

    #[test]
    fn test_check_then_next() {
        let mut generator = QuestionGenerator::new(SmallRngSource::seeded(5));
        let mut screen = PracticeScreen::new(&mut generator);
        let product = screen.session().question().product();

        type_answer(&mut screen, &mut generator, product);
        screen.handle_key(press(KeyCode::Enter), &mut generator);
        assert_eq!(screen.session().outcome(), Some(Outcome::Correct));
        assert_eq!(screen.action_label(), "Next");

        // Locked: digits are ignored
        screen.handle_key(press(KeyCode::Char('9')), &mut generator);
        assert_eq!(screen.session().input(), product.to_string());

        screen.handle_key(press(KeyCode::Enter), &mut generator);
        assert_eq!(screen.session().input(), "");
        assert_eq!(screen.session().outcome(), None);
    }

    #[test]
    fn test_letters_are_absorbed_by_the_field() {
        let mut generator = QuestionGenerator::new(SmallRngSource::seeded(2));
        let mut screen = PracticeScreen::new(&mut generator);
        for c in ['4', 'h', 'q', 'x', '2'] {
            assert_eq!(
                screen.handle_key(press(KeyCode::Char(c)), &mut generator),
                PracticeKey::Handled
            );
        }
        assert_eq!(screen.session().input(), "42");
        assert_eq!(
            screen.handle_key(press(KeyCode::Esc), &mut generator),
            PracticeKey::Ignored
        );
    }

    #[test]
    fn test_wrong_answer_feedback() {
        let mut generator = QuestionGenerator::new(SmallRngSource::seeded(8));
        let mut screen = PracticeScreen {
            session: PracticeSession::with_question(Question::new(6, 7)),
        };
        type_answer(&mut screen, &mut generator, 40);
        screen.activate(&mut generator);
        assert_eq!(
            screen.session().outcome().map(|o| o.message()),
            Some("Incorrect. It's 42".to_string())
        );
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 5, 80, 3);
        assert_eq!(centered(area, 24), Rect::new(28, 5, 24, 3));
        assert_eq!(centered(Rect::new(0, 0, 10, 3), 24).width, 10);
    }
}
