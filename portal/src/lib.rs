//! # Estate Portal - Library Root
//!
//! Authenticated API access layer and session lifecycle for the real-estate
//! tokenization portal: project listings, fractional ownership, transactions
//! and KYC all reach the backend through this crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                  portal (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  app       - current location, guarded navigation      │
//! │  session   - credential store, events, session guard   │
//! │  services  - client factory, auth interceptor,         │
//! │              typed request helpers, feature endpoints  │
//! │  core      - error types, DI traits                    │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON (Bearer)
//!          ▼
//! ┌─────────────────────────────────────┐
//! │  Backend                            │
//! │  {api_url}/api/*                    │
//! │  {service_url}/service/{name}/{ver} │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Session Flow
//!
//! 1. Sign-in stores the bearer credential and emits `SignedIn`.
//! 2. Every request built through the factory carries `Authorization: Bearer <token>`.
//! 3. A 401 clears the credential and emits `CredentialExpired`; the caller
//!    still gets `ApiError::Unauthorized`.
//! 4. The navigation listener moves the app to `/auth/sign-in`.
//! 5. The session guard re-runs on every navigation and signal change.
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p portal
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod session;

// Re-export commonly used types for convenience
pub use app::{App, AppState};
pub use config::PortalConfig;
pub use core::{ApiError, ApiResult, AppError, Result};
pub use services::api::{ApiClient, ClientFactory, ServiceClient};
