//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Error types (`ApiError`, `AppError`, `SessionStoreError`)
//! - **[`service`]**: Service traits for dependency injection (`SessionStore`, `Navigator`, `ApiService`)
//!
//! ## Dependency Injection
//!
//! Nothing in the API layer reaches for ambient global state. The credential
//! store and the navigation target are handed in at startup:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use portal::core::service::SessionStore;
//! use portal::session::store::{FileSessionStore, MemorySessionStore};
//!
//! // In production: cookie jar on disk
//! let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(".portal/session.json"));
//!
//! // In tests: in-memory fake
//! let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, ApiResult, AppError, Result, SessionStoreError};
pub use service::{ApiService, Navigator, SessionStore, CREDENTIAL_KEY};
