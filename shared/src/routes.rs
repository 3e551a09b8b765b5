//! # Client Routes
//!
//! Locations the session layer redirects to, and the auth-only zone.

/// Sign-in page, target of every forced logout.
pub const SIGN_IN_ROUTE: &str = "/auth/sign-in";

/// Sign-up page.
pub const SIGN_UP_ROUTE: &str = "/auth/sign-up";

/// Password reset request page.
pub const FORGOT_PASSWORD_ROUTE: &str = "/auth/forgot-password";

/// Password reset page (reached from the reset e-mail).
pub const RESET_PASSWORD_ROUTE: &str = "/auth/reset-password";

/// Application root, where authenticated users land.
pub const ROOT_ROUTE: &str = "/";

/// Pages only meaningful without a session.
pub const AUTH_ROUTES: &[&str] = &[
    SIGN_IN_ROUTE,
    SIGN_UP_ROUTE,
    FORGOT_PASSWORD_ROUTE,
    RESET_PASSWORD_ROUTE,
];

/// Whether `location` belongs to the auth-only zone.
///
/// Query string, fragment and trailing slash are ignored, and sub-paths count
/// (`/auth/reset-password/abc123` is an auth page).
pub fn is_auth_route(location: &str) -> bool {
    let path = crate::utils::normalize_path(location);
    AUTH_ROUTES.iter().any(|route| {
        path == *route
            || path
                .strip_prefix(route)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}
