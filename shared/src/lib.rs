//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the portal client and the backend API.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{ status, data, message?, pagination? }` response wrapper
//!   - **[`dto::auth`]**: Sign-in / sign-up DTOs
//!   - **[`dto::portfolio`]**: Users, projects, transactions and KYC DTOs
//! - **[`routes`]**: Client-side route constants (sign-in, root, auth pages)
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::normalize_path`]**: Strip query, fragment and trailing slash from a location
//!
//! ## Wire Format
//!
//! Every backend response is wrapped in an envelope:
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "status": "success",
//!   "data": { "user": { "firstName": "Jane" } }
//! }
//! ```
//!
//! Callers almost always want `data` only. [`Envelope::from_value`] makes the
//! unwrapping explicit and fails when `data` is absent.
//!
//! ## Usage in the Client
//!
//! ```rust
//! use shared::dto::envelope::Envelope;
//!
//! let body = serde_json::json!({ "status": "ok", "data": 42 });
//! let envelope: Envelope<u32> = Envelope::from_value(body).unwrap();
//! assert_eq!(envelope.data, 42);
//! ```

pub mod dto;
pub mod routes;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
