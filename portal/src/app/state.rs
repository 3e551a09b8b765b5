//! # Application State Types
//!
//! Navigation state shared between the shell and the navigation listener.

use shared::routes::ROOT_ROUTE;

/// Longest navigation history kept.
pub const HISTORY_LIMIT: usize = 50;

/// Where the application is and how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Location currently rendered
    pub location: String,
    /// Previously rendered locations, oldest first
    pub history: Vec<String>,
    /// Authentication signal seen by the last guard run
    pub authenticated: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            location: ROOT_ROUTE.to_string(),
            history: Vec::new(),
            authenticated: false,
        }
    }
}

impl AppState {
    /// Move to `location`, remembering the previous one.
    pub fn go_to(&mut self, location: &str) {
        if self.location == location {
            return;
        }

        let previous = std::mem::replace(&mut self.location, location.to_string());
        self.history.push(previous);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
    }
}
