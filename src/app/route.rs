//! Screens and their navigable paths
//!
//! | Path             | Screen      |
//! |------------------|-------------|
//! | `/`              | Home        |
//! | `/learn`         | LearnList   |
//! | `/learn/{table}` | LearnDetail |
//! | `/practice`      | Practice    |

use crate::models::Table;
use crate::{MultiMasterError, Result, APP_TITLE};
use tracing::warn;

/// Navigable screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Entry menu offering Learn and Practice
    #[default]
    Home,
    /// List of tables 2 through 9
    LearnList,
    /// The ten rows of one table
    LearnDetail(Table),
    /// Quiz with one question at a time
    Practice,
}

impl Screen {
    /// Resolve a path to a screen.
    ///
    /// A `/learn/{table}` path whose table is missing, non-numeric or out of
    /// range redirects to the Learn list. Any other unmatched path is an
    /// [`MultiMasterError::UnknownRoute`].
    pub fn from_path(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Ok(Screen::Home),
            ["learn"] => Ok(Screen::LearnList),
            ["learn", param] => match param.parse::<u32>().ok().and_then(Table::new) {
                Some(table) => Ok(Screen::LearnDetail(table)),
                None => {
                    warn!(path, "Invalid table parameter, redirecting to the Learn list");
                    Ok(Screen::LearnList)
                }
            },
            ["practice"] => Ok(Screen::Practice),
            _ => Err(MultiMasterError::UnknownRoute(path.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Screen::Home => "/".to_string(),
            Screen::LearnList => "/learn".to_string(),
            Screen::LearnDetail(table) => format!("/learn/{}", table),
            Screen::Practice => "/practice".to_string(),
        }
    }

    /// Title shown in the shell header
    pub fn title(&self) -> String {
        match self {
            Screen::Home => APP_TITLE.to_string(),
            Screen::LearnList => "Learn".to_string(),
            Screen::LearnDetail(table) => table.label(),
            Screen::Practice => "Practice".to_string(),
        }
    }

    /// Whether the shell shows a back control
    pub fn has_back(&self) -> bool {
        !matches!(self, Screen::Home)
    }

    /// Screens reachable from this one by following a link
    pub fn links(&self) -> Vec<Screen> {
        match self {
            Screen::Home => vec![Screen::LearnList, Screen::Practice],
            Screen::LearnList => Table::all().map(Screen::LearnDetail).collect(),
            Screen::LearnDetail(_) | Screen::Practice => Vec::new(),
        }
    }

    /// Chain of screens leading to this one from Home, inclusive
    pub fn ancestry(&self) -> Vec<Screen> {
        match self {
            Screen::Home => vec![Screen::Home],
            Screen::LearnList | Screen::Practice => vec![Screen::Home, *self],
            Screen::LearnDetail(_) => vec![Screen::Home, Screen::LearnList, *self],
        }
    }
}
