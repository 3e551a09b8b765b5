//! # Session Lifecycle
//!
//! Credential storage, authentication-signal events and the render-time
//! session guard.
//!
//! ```text
//! session/
//! ├── store.rs   - SessionStore implementations (memory, JSON cookie jar)
//! ├── events.rs  - SessionEvent channel (HTTP layer -> navigation listener)
//! └── guard.rs   - SessionGuard redirect rules
//! ```
//!
//! ## Lifecycle
//!
//! ```text
//! sign-in ──> store.set(token) ──> SignedIn ──> guard re-runs
//!    │
//!    ▼
//! every request ──> store.get() ──> Authorization: Bearer <token>
//!    │
//!    ▼ 401
//! store.clear() ──> CredentialExpired ──> navigate(/auth/sign-in)
//! ```
//!
//! A request already in flight when the credential is cleared completes with
//! the header it was sent with. It is neither aborted nor retried.

pub mod events;
pub mod guard;
pub mod store;

pub use events::{SessionEvent, SessionEvents};
pub use guard::{GuardDecision, SessionGuard};
pub use store::{FileSessionStore, MemorySessionStore};
