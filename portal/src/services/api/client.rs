//! # API Client
//!
//! Facade bundling the client factory, the credential store and the session
//! event sender. Feature endpoints live in sibling modules as free functions
//! taking `&ApiClient`; this type wires them into [`ApiService`].

use std::sync::Arc;

use shared::{
    AuthResponse, KycStatus, KycSubmission, LoginRequest, Page, ProfileResponse, Project,
    SignupRequest, Transaction,
};

use super::factory::{ClientFactory, ServiceClient};
use crate::config::PortalConfig;
use crate::core::error::ApiResult;
use crate::core::service::{ApiService, SessionStore};
use crate::session::events::SessionEvents;

/// Entry point for every backend call made by the portal.
pub struct ApiClient {
    factory: Arc<ClientFactory>,
    store: Arc<dyn SessionStore>,
    events: SessionEvents,
}

impl ApiClient {
    /// Create a client with its own factory.
    pub fn new(config: &PortalConfig, store: Arc<dyn SessionStore>, events: SessionEvents) -> Self {
        let factory = Arc::new(ClientFactory::new(config, store.clone(), events.clone()));
        Self::with_factory(factory, store, events)
    }

    /// Create a client around an existing factory (shared registry).
    pub fn with_factory(factory: Arc<ClientFactory>, store: Arc<dyn SessionStore>, events: SessionEvents) -> Self {
        Self { factory, store, events }
    }

    pub fn factory(&self) -> &Arc<ClientFactory> {
        &self.factory
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    /// Generic API client.
    pub(crate) fn api(&self) -> Arc<ServiceClient> {
        self.factory.api()
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn sign_in(&self, request: LoginRequest) -> ApiResult<AuthResponse> {
        super::auth::sign_in(self, request).await
    }

    async fn sign_up(&self, request: SignupRequest) -> ApiResult<AuthResponse> {
        super::auth::sign_up(self, request).await
    }

    async fn sign_out(&self) -> ApiResult<()> {
        super::auth::sign_out(self).await
    }

    async fn profile(&self) -> ApiResult<ProfileResponse> {
        super::users::get_profile(self).await
    }

    async fn projects(&self, page: u32, limit: u32) -> ApiResult<Page<Project>> {
        super::projects::list_projects(self, page, limit).await
    }

    async fn project(&self, id: &str) -> ApiResult<Project> {
        super::projects::get_project(self, id).await
    }

    async fn transactions(&self, page: u32, limit: u32) -> ApiResult<Page<Transaction>> {
        super::transactions::list_transactions(self, page, limit).await
    }

    async fn submit_kyc(&self, submission: &KycSubmission) -> ApiResult<KycStatus> {
        super::kyc::submit_kyc(self, submission).await
    }

    async fn kyc_status(&self) -> ApiResult<KycStatus> {
        super::kyc::get_kyc_status(self).await
    }
}
