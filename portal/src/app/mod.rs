//! # Application Shell
//!
//! Owns the current location and runs the session guard on every
//! navigation and on every authentication-signal change.
//!
//! ## Module Structure
//!
//! ```text
//! app/
//! ├── mod.rs         - App: guarded navigation
//! ├── state.rs       - AppState: location, history, last auth signal
//! └── navigation.rs  - Listener turning SessionEvents into navigations
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! # async fn demo() {
//! use std::sync::Arc;
//! use portal::app::{navigation, App};
//! use portal::core::service::Navigator;
//! use portal::session::{events, MemorySessionStore};
//!
//! let store = Arc::new(MemorySessionStore::new());
//! let (_events, receiver) = events::channel();
//! let app = Arc::new(App::new(store));
//!
//! let _listener = navigation::spawn_listener(receiver, app.clone());
//! assert_eq!(app.navigate("/project"), "/auth/sign-in");
//! # }
//! ```

pub mod navigation;
pub mod state;

use std::sync::Arc;

use parking_lot::RwLock;

pub use state::AppState;

use crate::core::service::{Navigator, SessionStore};
use crate::session::guard::{self, GuardDecision, SessionGuard};

/// Guarded navigation state.
pub struct App {
    pub state: Arc<RwLock<AppState>>,
    guard: SessionGuard,
}

impl App {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            guard: SessionGuard::new(store),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().authenticated
    }
}

impl Navigator for App {
    fn location(&self) -> String {
        self.state.read().location.clone()
    }

    fn navigate(&self, location: &str) -> String {
        let authenticated = self.guard.is_authenticated();
        let target = match guard::evaluate(authenticated, location) {
            GuardDecision::Render => location,
            GuardDecision::Redirect(target) => {
                tracing::info!(requested = %location, redirect = %target, "Navigation redirected by session guard");
                target
            }
        };

        let mut state = self.state.write();
        state.authenticated = authenticated;
        state.go_to(target);
        target.to_string()
    }
}
