//! TUI screen components
//!
//! Contains the shell chrome and one component per navigable screen.

pub mod home;
pub mod learn_detail;
pub mod learn_list;
pub mod practice;
pub mod shell;

pub use home::HomeScreen;
pub use learn_detail::LearnDetailScreen;
pub use learn_list::LearnListScreen;
pub use practice::{PracticeKey, PracticeScreen};
pub use shell::{render_shell, KeyHint, BACK_MARKER};
