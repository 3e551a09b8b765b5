//! # Services Module
//!
//! External service integrations for the portal.
//!
//! ```text
//! services/
//! └── api/ - Backend HTTP API access (client factory, auth interceptor,
//!            typed request helpers, feature endpoints)
//! ```
//!
//! ## Thread Safety
//!
//! - **ClientFactory**: registry behind a `parking_lot::Mutex`; share it in an `Arc`
//! - **ServiceClient**: wraps `reqwest::Client` (internally thread-safe,
//!   connection pooled); handed out as `Arc<ServiceClient>`
//! - **ApiClient**: `Send + Sync`, usable as `Arc<dyn ApiService>`

pub mod api;
