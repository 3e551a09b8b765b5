//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! - [`SessionStore`]: where the bearer credential lives
//! - [`Navigator`]: whatever owns the current client-side location
//! - [`ApiService`]: the feature-level backend operations

use async_trait::async_trait;
use shared::{
    AuthResponse, KycStatus, KycSubmission, LoginRequest, Page, ProfileResponse, Project,
    SignupRequest, Transaction,
};

use crate::core::error::{ApiResult, SessionStoreError};

/// Name under which the credential is stored.
pub const CREDENTIAL_KEY: &str = "token";

/// Storage for the opaque bearer credential.
///
/// Implementations are shared across concurrent requests, so every method
/// takes `&self`. Any request may read the credential and any 401 response
/// may clear it.
pub trait SessionStore: Send + Sync {
    /// Read the stored credential, `Ok(None)` when signed out.
    fn get(&self) -> Result<Option<String>, SessionStoreError>;

    /// Persist a credential, replacing any previous one.
    fn set(&self, token: &str) -> Result<(), SessionStoreError>;

    /// Delete the credential. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionStoreError>;

    /// Authentication signal used by the session guard.
    ///
    /// An unreadable store counts as signed out.
    fn is_authenticated(&self) -> bool {
        matches!(self.get(), Ok(Some(_)))
    }
}

/// Owner of the current location.
///
/// `navigate` runs the session guard and returns the location actually
/// reached, which differs from the requested one on a redirect.
pub trait Navigator: Send + Sync {
    /// Current location.
    fn location(&self) -> String;

    /// Navigate to `location`, applying the session guard.
    fn navigate(&self, location: &str) -> String;

    /// Re-run the guard for the current location after the authentication
    /// signal changed.
    fn refresh(&self) -> String {
        let current = self.location();
        self.navigate(&current)
    }
}

/// Trait for API service operations
///
/// This trait allows for dependency injection and mocking in tests.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Sign in and store the returned credential
    async fn sign_in(&self, request: LoginRequest) -> ApiResult<AuthResponse>;

    /// Register a new account and store the returned credential
    async fn sign_up(&self, request: SignupRequest) -> ApiResult<AuthResponse>;

    /// Drop the session locally and notify the backend
    async fn sign_out(&self) -> ApiResult<()>;

    /// Profile of the signed-in user
    async fn profile(&self) -> ApiResult<ProfileResponse>;

    /// One page of tokenized projects
    async fn projects(&self, page: u32, limit: u32) -> ApiResult<Page<Project>>;

    /// A single project
    async fn project(&self, id: &str) -> ApiResult<Project>;

    /// One page of the user's transactions
    async fn transactions(&self, page: u32, limit: u32) -> ApiResult<Page<Transaction>>;

    /// Submit KYC details for review
    async fn submit_kyc(&self, submission: &KycSubmission) -> ApiResult<KycStatus>;

    /// Current KYC review state
    async fn kyc_status(&self) -> ApiResult<KycStatus>;
}
