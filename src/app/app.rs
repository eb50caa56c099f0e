//! Main application controller
//!
//! Routes key events to the active screen, drives navigation, and renders
//! the active screen inside the shell.

use crate::{
    app::{
        route::Screen,
        screens::{
            render_shell, HomeScreen, LearnDetailScreen, LearnListScreen, PracticeKey,
            PracticeScreen,
        },
        state::{NavigationAction, Navigator},
        tui::Tui,
    },
    config::AppConfig,
    quiz::{QuestionGenerator, RandomSource, SmallRngSource},
    Result,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tracing::info;

/// TUI application controller
pub struct App {
    navigator: Navigator,
    generator: QuestionGenerator<Box<dyn RandomSource>>,
    home_screen: HomeScreen,
    learn_list_screen: LearnListScreen,
    /// Present only while Practice is the active screen
    practice_screen: Option<PracticeScreen>,
}

impl App {
    /// Create an application from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let source: Box<dyn RandomSource> = Box::new(SmallRngSource::new(config.seed));
        let navigator = Navigator::open_path(&config.start_route)?;
        Ok(Self::with_source(navigator, source))
    }

    /// Create an application with an explicit history and random source
    pub fn with_source(navigator: Navigator, source: Box<dyn RandomSource>) -> Self {
        let mut app = Self {
            navigator,
            generator: QuestionGenerator::new(source),
            home_screen: HomeScreen::new(),
            learn_list_screen: LearnListScreen::new(),
            practice_screen: None,
        };
        app.sync_screen_state(None);
        app
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn practice(&self) -> Option<&PracticeScreen> {
        self.practice_screen.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.navigator.should_quit()
    }

    /// Run the main loop until the user quits
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        info!(route = %self.current_screen().path(), "Application started");
        while !self.should_quit() {
            tui.draw(|f| self.render(f))?;
            if let Some(key) = tui.next_key()? {
                self.handle_key(key);
            }
        }
        info!("Application finished");
        Ok(())
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.navigator.quit();
            return;
        }

        if let Some(practice) = self.practice_screen.as_mut() {
            if practice.handle_key(key, &mut self.generator) == PracticeKey::Handled {
                return;
            }
        }

        let action = Navigator::key_to_navigation(key);
        match action {
            NavigationAction::Quit => self.navigator.quit(),
            NavigationAction::Back => self.go_back(),
            NavigationAction::Left if self.navigator.depth() > 1 => self.go_back(),
            _ => self.handle_screen_action(action),
        }
    }

    fn handle_screen_action(&mut self, action: NavigationAction) {
        match (self.navigator.current(), action) {
            (Screen::Home, NavigationAction::Up) => self.home_screen.select_previous(),
            (Screen::Home, NavigationAction::Down) => self.home_screen.select_next(),
            (Screen::Home, NavigationAction::Select | NavigationAction::Right) => {
                let target = self.home_screen.selected_target();
                self.follow(target);
            }
            (Screen::LearnList, NavigationAction::Up) => self.learn_list_screen.select_previous(),
            (Screen::LearnList, NavigationAction::Down) => self.learn_list_screen.select_next(),
            (Screen::LearnList, NavigationAction::Select | NavigationAction::Right) => {
                let table = self.learn_list_screen.selected_table();
                self.follow(Screen::LearnDetail(table));
            }
            _ => {}
        }
    }

    fn follow(&mut self, target: Screen) {
        let previous = self.navigator.current();
        if self.navigator.follow(target) {
            self.sync_screen_state(Some(previous));
        }
    }

    /// Back from Home quits, like closing the app
    fn go_back(&mut self) {
        let previous = self.navigator.current();
        if self.navigator.back() {
            self.sync_screen_state(Some(previous));
        } else {
            self.navigator.quit();
        }
    }

    /// Create or drop screen-local state after the active screen changed
    fn sync_screen_state(&mut self, previous: Option<Screen>) {
        match self.navigator.current() {
            Screen::Practice => {
                if self.practice_screen.is_none() {
                    self.practice_screen = Some(PracticeScreen::new(&mut self.generator));
                }
            }
            current => {
                self.practice_screen = None;
                if current == Screen::LearnList && previous == Some(Screen::Home) {
                    self.learn_list_screen.reset();
                }
            }
        }
    }

    /// Draw the active screen inside the shell
    pub fn render(&mut self, f: &mut Frame) {
        let screen = self.navigator.current();
        match screen {
            Screen::Home => {
                let body = render_shell(f, &screen, self.home_screen.hints());
                self.home_screen.render(f, body);
            }
            Screen::LearnList => {
                let body = render_shell(f, &screen, self.learn_list_screen.hints());
                self.learn_list_screen.render(f, body);
            }
            Screen::LearnDetail(table) => {
                let detail = LearnDetailScreen::new(table);
                let body = render_shell(f, &screen, detail.hints());
                detail.render(f, body);
            }
            Screen::Practice => {
                if let Some(practice) = &self.practice_screen {
                    let body = render_shell(f, &screen, practice.hints());
                    practice.render(f, body);
                }
            }
        }
    }
}
