//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and navigation state handling.

pub mod app;
pub mod route;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use route::Screen;
pub use screens::{HomeScreen, LearnDetailScreen, LearnListScreen, PracticeScreen};
pub use state::{NavigationAction, Navigator};
pub use tui::Tui;
