//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the portal client and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Response envelope and pagination metadata
//! - [`auth`] - Sign-in, sign-up and session DTOs
//! - [`portfolio`] - User profile, projects, transactions and KYC
//!
//! ## Serialization Format
//!
//! The backend speaks camelCase JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`. Optional fields are omitted when `None`.
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "jane@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "status": "success",
//!   "message": "Login successful",
//!   "data": {
//!     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!     "user": { "id": "1", "firstName": "Jane", "lastName": "Doe", "email": "jane@example.com" }
//!   }
//! }
//! ```

pub mod auth;
pub mod envelope;
pub mod portfolio;

pub use auth::*;
pub use envelope::*;
pub use portfolio::*;
