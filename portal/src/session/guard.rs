//! # Session Guard
//!
//! Decides whether a location may be rendered for the current session.
//!
//! ```text
//!                    │ auth page            │ protected page
//! ───────────────────┼──────────────────────┼──────────────────────────
//!  credential stored │ redirect to /        │ render
//!  no credential     │ render               │ redirect to /auth/sign-in
//! ```
//!
//! The guard only looks at whether a credential is stored. Server-side
//! validity is checked by the first API call the rendered page makes; a 401
//! there is handled by the auth interceptor.

use std::sync::Arc;

use shared::routes::{is_auth_route, ROOT_ROUTE, SIGN_IN_ROUTE};

use crate::core::service::SessionStore;

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested location unchanged.
    Render,
    /// Navigate elsewhere instead.
    Redirect(&'static str),
}

/// Pure guard rule.
pub fn evaluate(authenticated: bool, location: &str) -> GuardDecision {
    match (authenticated, is_auth_route(location)) {
        (true, true) => GuardDecision::Redirect(ROOT_ROUTE),
        (false, false) => GuardDecision::Redirect(SIGN_IN_ROUTE),
        _ => GuardDecision::Render,
    }
}

/// Guard bound to a credential store.
#[derive(Clone)]
pub struct SessionGuard {
    store: Arc<dyn SessionStore>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Current authentication signal.
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Check `location` against the currently stored credential.
    pub fn check(&self, location: &str) -> GuardDecision {
        evaluate(self.is_authenticated(), location)
    }

    /// Location to actually show for a request to `location`.
    pub fn resolve<'a>(&self, location: &'a str) -> &'a str {
        match self.check(location) {
            GuardDecision::Render => location,
            GuardDecision::Redirect(target) => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemorySessionStore;

    #[test]
    fn test_authenticated_user_leaves_sign_in() {
        assert_eq!(evaluate(true, "/auth/sign-in"), GuardDecision::Redirect("/"));
        assert_eq!(evaluate(true, "/auth/sign-up"), GuardDecision::Redirect("/"));
        assert_eq!(evaluate(true, "/auth/reset-password?code=1"), GuardDecision::Redirect("/"));
    }

    #[test]
    fn test_anonymous_user_is_sent_to_sign_in() {
        assert_eq!(evaluate(false, "/project"), GuardDecision::Redirect("/auth/sign-in"));
        assert_eq!(evaluate(false, "/"), GuardDecision::Redirect("/auth/sign-in"));
        assert_eq!(evaluate(false, "/admin/kyc"), GuardDecision::Redirect("/auth/sign-in"));
    }

    #[test]
    fn test_matching_zone_renders() {
        assert_eq!(evaluate(true, "/project"), GuardDecision::Render);
        assert_eq!(evaluate(true, "/"), GuardDecision::Render);
        assert_eq!(evaluate(false, "/auth/sign-in"), GuardDecision::Render);
        assert_eq!(evaluate(false, "/auth/forgot-password"), GuardDecision::Render);
    }

    #[test]
    fn test_redirect_targets_are_stable() {
        // A redirect target must itself render, otherwise navigation would loop
        assert_eq!(evaluate(true, ROOT_ROUTE), GuardDecision::Render);
        assert_eq!(evaluate(false, SIGN_IN_ROUTE), GuardDecision::Render);
    }

    #[test]
    fn test_guard_follows_store() {
        let store = Arc::new(MemorySessionStore::new());
        let guard = SessionGuard::new(store.clone());

        assert_eq!(guard.resolve("/project"), "/auth/sign-in");

        store.set("abc123").unwrap();
        assert_eq!(guard.resolve("/project"), "/project");
        assert_eq!(guard.resolve("/auth/sign-in"), "/");
    }
}
