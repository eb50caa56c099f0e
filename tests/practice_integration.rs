//! Integration tests for Practice mode

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use multimaster::app::{App, Navigator, Screen};
use multimaster::quiz::{Outcome, Question, RandomSource};
use ratatui::{backend::TestBackend, Terminal};

/// Replays a fixed list of draws, cycling when exhausted
struct Scripted {
    draws: Vec<u32>,
    next: usize,
}

impl RandomSource for Scripted {
    fn next_int(&mut self, bound: u32) -> u32 {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value % bound
    }
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// App opened on Practice: first question 6 × 7, then 2 × 1
fn practice_app() -> App {
    let source = Scripted {
        draws: vec![4, 6, 0, 0],
        next: 0,
    };
    let mut app = App::with_source(Navigator::new(), Box::new(source));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    app
}

fn screen_text(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.get(x, y).symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn question(app: &App) -> Question {
    *app.practice().unwrap().session().question()
}

#[test]
fn test_correct_answer() {
    let mut app = practice_app();
    assert_eq!(app.current_screen(), Screen::Practice);
    assert_eq!(question(&app), Question::new(6, 7));
    assert!(screen_text(&mut app).contains("6 × 7 = ?"));

    type_text(&mut app, "42");
    press(&mut app, KeyCode::Enter);

    let session = app.practice().unwrap().session();
    assert_eq!(session.outcome(), Some(Outcome::Correct));
    let text = screen_text(&mut app);
    assert!(text.contains("Correct!!"));
    assert!(text.contains("Next"));
}

#[test]
fn test_incorrect_answer_shows_product() {
    let mut app = practice_app();
    type_text(&mut app, "40");
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.practice().unwrap().session().outcome(),
        Some(Outcome::Incorrect { expected: 42 })
    );
    assert!(screen_text(&mut app).contains("Incorrect. It's 42"));
}

#[test]
fn test_next_clears_result_and_input() {
    let mut app = practice_app();
    type_text(&mut app, "40");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    let session = app.practice().unwrap().session();
    assert_eq!(*session.question(), Question::new(2, 1));
    assert_eq!(session.input(), "");
    assert_eq!(session.outcome(), None);

    let text = screen_text(&mut app);
    assert!(text.contains("Type your answer"));
    assert!(!text.contains("Incorrect"));
}

#[test]
fn test_check_with_empty_input_is_disabled() {
    let mut app = practice_app();
    press(&mut app, KeyCode::Enter);
    let session = app.practice().unwrap().session();
    assert!(!session.is_locked());
    assert_eq!(question(&app), Question::new(6, 7));
}

#[test]
fn test_input_locked_after_check() {
    let mut app = practice_app();
    type_text(&mut app, "4");
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "42");
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "7");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.practice().unwrap().session().input(), "42");
}

#[test]
fn test_leaving_practice_discards_question() {
    let mut app = practice_app();
    type_text(&mut app, "1");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_screen(), Screen::Home);
    assert!(app.practice().is_none());

    // Re-entering draws a fresh question from the shared source
    press(&mut app, KeyCode::Enter);
    assert_eq!(question(&app), Question::new(2, 1));
    assert_eq!(app.practice().unwrap().session().input(), "");
}

#[test]
fn test_letter_keys_stay_in_the_answer_field() {
    let mut app = practice_app();
    for c in ['4', 'h', 'q', 'j', 'k', 'l', '2'] {
        press(&mut app, KeyCode::Char(c));
    }

    assert_eq!(app.current_screen(), Screen::Practice);
    assert!(!app.should_quit());
    assert_eq!(app.practice().unwrap().session().input(), "42");

    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.practice().unwrap().session().outcome(),
        Some(Outcome::Correct)
    );
}
