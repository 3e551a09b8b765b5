//! # Client Factory
//!
//! Builds one configured [`ServiceClient`] per `(service name, version)` and
//! hands out the same instance on every later request for that key.
//!
//! ## Base URLs
//!
//! ```text
//! client("api", _)        -> {api_url}
//! client("api/admin", _)  -> {api_url}
//! client("kyc", None)     -> {service_url}/service/kyc/v1
//! client("kyc", Some(v2)) -> {service_url}/service/kyc/v2
//! ```
//!
//! The registry lock is held across lookup-or-insert, so two tasks asking
//! for the same key at once still end up with one client.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use shared::utils::join_url;
use tracing::Instrument;
use uuid::Uuid;

use super::interceptor::AuthInterceptor;
use crate::config::PortalConfig;
use crate::core::error::ApiResult;
use crate::core::service::SessionStore;
use crate::session::events::SessionEvents;

/// Service name of the generic API.
pub const API_SERVICE: &str = "api";

/// Whether `name` addresses the generic API rather than a versioned service.
pub fn is_generic_api(name: &str) -> bool {
    let name = service_name(name);
    name == API_SERVICE || name.starts_with("api/")
}

/// `"/kyc"` and `"kyc"` name the same service.
fn service_name(name: &str) -> &str {
    name.trim_start_matches('/')
}

/// HTTP client bound to one backend service.
pub struct ServiceClient {
    name: String,
    version: String,
    base_url: String,
    http: Client,
    interceptor: AuthInterceptor,
}

impl ServiceClient {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request to `path` with the credential already attached.
    ///
    /// The credential is read now, not when the request is sent.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = join_url(&self.base_url, path);
        self.interceptor.on_request(self.http.request(method, url))
    }

    /// Send a request built by [`Self::request`] through the response interceptor.
    pub async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let span = tracing::debug_span!(
            "api_request",
            request_id = %Uuid::new_v4(),
            service = %self.name,
            version = %self.version,
        );

        async move {
            let start = Instant::now();
            let outcome = request.send().await;
            let result = self.interceptor.on_response(outcome).await;

            tracing::debug!(
                duration_ms = start.elapsed().as_millis(),
                ok = result.is_ok(),
                "Request completed"
            );
            result
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ServiceKey {
    name: String,
    version: String,
}

/// Lazily populated registry of service clients.
pub struct ClientFactory {
    api_url: String,
    service_url: String,
    default_version: String,
    timeout: Duration,
    store: Arc<dyn SessionStore>,
    events: SessionEvents,
    registry: Mutex<HashMap<ServiceKey, Arc<ServiceClient>>>,
}

impl ClientFactory {
    pub fn new(config: &PortalConfig, store: Arc<dyn SessionStore>, events: SessionEvents) -> Self {
        Self {
            api_url: config.api_url.clone(),
            service_url: config.service_url.clone(),
            default_version: config.api_version.clone(),
            timeout: config.request_timeout,
            store,
            events,
            registry: Mutex::new(HashMap::new()),
        }
    }

    /// Client for `name` at `version` (or the default version).
    ///
    /// Never fails. The first call for a key builds the client, later calls
    /// return the same `Arc`.
    pub fn client(&self, name: &str, version: Option<&str>) -> Arc<ServiceClient> {
        let key = ServiceKey {
            name: service_name(name).to_string(),
            version: version.unwrap_or(&self.default_version).to_string(),
        };

        let mut registry = self.registry.lock();
        if let Some(client) = registry.get(&key) {
            return client.clone();
        }

        let client = Arc::new(self.build(&key));
        tracing::debug!(
            service = %key.name,
            version = %key.version,
            base_url = %client.base_url,
            "Created service client"
        );
        registry.insert(key, client.clone());
        client
    }

    /// Client for the generic API.
    pub fn api(&self) -> Arc<ServiceClient> {
        self.client(API_SERVICE, None)
    }

    /// Base URL a client for `name`/`version` is bound to.
    pub fn base_url_for(&self, name: &str, version: &str) -> String {
        let name = service_name(name);
        if is_generic_api(name) {
            self.api_url.clone()
        } else {
            join_url(&self.service_url, &format!("service/{}/{}", name, version))
        }
    }

    /// Number of clients built so far.
    pub fn len(&self) -> usize {
        self.registry.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn build(&self, key: &ServiceKey) -> ServiceClient {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Failed to build configured HTTP client, using defaults");
                Client::new()
            });

        ServiceClient {
            name: key.name.clone(),
            version: key.version.clone(),
            base_url: self.base_url_for(&key.name, &key.version),
            http,
            interceptor: AuthInterceptor::new(self.store.clone(), self.events.clone()),
        }
    }
}
