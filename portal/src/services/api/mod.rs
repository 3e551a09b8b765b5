//! # Backend API Client Module
//!
//! Authenticated access to the portal backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── factory.rs      - ClientFactory registry and ServiceClient
//! ├── interceptor.rs  - Bearer injection and 401 teardown
//! ├── request.rs      - Typed GET/POST/PUT/PATCH/DELETE helpers
//! ├── client.rs       - ApiClient facade implementing ApiService
//! ├── auth.rs         - Sign-in, sign-up, sign-out
//! ├── users.rs        - Profile
//! ├── projects.rs     - Project listings (paged)
//! ├── transactions.rs - Transactions (paged)
//! └── kyc.rs          - KYC submission and status (versioned service)
//! ```
//!
//! ## Request Flow
//!
//! ```text
//! feature fn ──> factory.client(name, version) ──> request helper
//!                                                     │
//!                      on_request: Authorization ◄────┤
//!                                                     ▼
//!                                               reqwest send
//!                                                     │
//!                      on_response: 401 teardown ◄────┤
//!                                                     ▼
//!                                         Envelope::from_value -> data
//! ```

pub mod auth;
pub mod client;
pub mod factory;
pub mod interceptor;
pub mod kyc;
pub mod projects;
pub mod request;
pub mod transactions;
pub mod users;

pub use client::ApiClient;
pub use factory::{ClientFactory, ServiceClient, API_SERVICE};
pub use interceptor::AuthInterceptor;
pub use request::{delete_request, get_envelope, get_request, patch_request, post_request, put_request};
