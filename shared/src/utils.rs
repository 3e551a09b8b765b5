//! # Shared Utility Functions
//!
//! Path and URL helpers used by the portal client.
//!
//! ## Locations
//!
//! - [`normalize_path`] - Reduce a client location to its bare path
//! - [`join_url`] - Join a base URL and a request path with exactly one slash
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{join_url, normalize_path};
//!
//! assert_eq!(normalize_path("/project/?tab=docs"), "/project");
//! assert_eq!(join_url("http://localhost:3001/", "/api/users"), "http://localhost:3001/api/users");
//! ```

/// Strip query string, fragment and trailing slashes from a location.
///
/// The root location stays `/`, and an empty location is treated as the root.
///
/// # Examples
///
/// ```rust
/// use shared::utils::normalize_path;
///
/// assert_eq!(normalize_path("/auth/sign-in?next=/"), "/auth/sign-in");
/// assert_eq!(normalize_path("/"), "/");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = location[..end].trim_end_matches('/');

    if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// Join a base URL and a path, collapsing the slash between them.
///
/// An empty path yields the base unchanged (minus a trailing slash).
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/project"), "/project");
        assert_eq!(normalize_path("/project/"), "/project");
        assert_eq!(normalize_path("/project?page=2"), "/project");
        assert_eq!(normalize_path("/project#units"), "/project");
        assert_eq!(normalize_path("/?x=1"), "/");
    }

    #[test]
    fn test_normalize_path_empty() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("//"), "/");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://a", "/b"), "http://a/b");
        assert_eq!(join_url("http://a/", "b"), "http://a/b");
        assert_eq!(join_url("http://a/service/kyc/v1", "/documents"), "http://a/service/kyc/v1/documents");
        assert_eq!(join_url("http://a/", ""), "http://a");
    }
}
