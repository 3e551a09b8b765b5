//! # Auth Interceptor
//!
//! Request and response hooks applied to every call made through a
//! [`ServiceClient`](super::factory::ServiceClient).
//!
//! ## Request phase
//!
//! Reads the credential and sets `Authorization: Bearer <token>`. A missing
//! credential, or a store that cannot be read, means no header; the backend
//! decides whether that is acceptable.
//!
//! ## Response phase
//!
//! ```text
//! transport error ──> timeout? ──> ApiError::Timeout
//!                 └─> otherwise ──> ApiError::Network / Request
//! 2xx ─────────────> pass through
//! 401 ─────────────> clear credential, emit CredentialExpired, ApiError::Unauthorized
//! other non-2xx ───> log, ApiError::Status
//! ```
//!
//! The error is always returned after the side effects so the caller can
//! still show a message before navigation completes.

use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode};
use shared::ErrorResponse;

use crate::core::error::{ApiError, ApiResult};
use crate::core::service::SessionStore;
use crate::session::events::{SessionEvent, SessionEvents};

/// Bearer-token injection and 401 teardown.
#[derive(Clone)]
pub struct AuthInterceptor {
    store: Arc<dyn SessionStore>,
    events: SessionEvents,
}

impl AuthInterceptor {
    pub fn new(store: Arc<dyn SessionStore>, events: SessionEvents) -> Self {
        Self { store, events }
    }

    /// Attach the stored credential, if any.
    pub fn on_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.get() {
            Ok(Some(token)) => request.bearer_auth(token),
            Ok(None) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Credential store unreadable, sending request without Authorization");
                request
            }
        }
    }

    /// Classify the outcome of `send()`.
    pub async fn on_response(&self, outcome: Result<Response, reqwest::Error>) -> ApiResult<Response> {
        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                let err = ApiError::from(e);
                match &err {
                    ApiError::Timeout => tracing::warn!("Request timed out"),
                    other => tracing::error!(error = %other, "Request failed before a response arrived"),
                }
                return Err(err);
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let message = error_message(response).await;

        if status == StatusCode::UNAUTHORIZED {
            self.expire_session(&url);
            return Err(ApiError::Unauthorized(message));
        }

        if status == StatusCode::NOT_FOUND {
            tracing::warn!(url = %url, message = %message, "Resource not found");
        } else {
            tracing::error!(status = status.as_u16(), url = %url, message = %message, "Request rejected");
        }

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    fn expire_session(&self, url: &str) {
        tracing::warn!(url = %url, "Credential rejected, ending session");

        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, "Failed to clear rejected credential");
        }
        self.events.emit(SessionEvent::CredentialExpired {
            url: url.to_string(),
        });
    }
}

/// Human-readable message from an error response body.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let fallback = || status.canonical_reason().unwrap_or("Request failed").to_string();

    match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.text().map(str::to_owned))
            .unwrap_or_else(fallback),
        Err(_) => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::events;
    use crate::session::store::MemorySessionStore;
    use reqwest::header::AUTHORIZATION;

    fn builder() -> RequestBuilder {
        reqwest::Client::new().get("http://127.0.0.1:1/api/users/profile")
    }

    #[test]
    fn test_on_request_sets_bearer_header() {
        let store = Arc::new(MemorySessionStore::with_token("abc123"));
        let interceptor = AuthInterceptor::new(store, SessionEvents::detached());

        let request = interceptor.on_request(builder()).build().unwrap();

        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer abc123");
    }

    #[test]
    fn test_on_request_without_credential_has_no_header() {
        let store = Arc::new(MemorySessionStore::new());
        let interceptor = AuthInterceptor::new(store, SessionEvents::detached());

        let request = interceptor.on_request(builder()).build().unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self) -> Result<Option<String>, crate::core::error::SessionStoreError> {
            Err(crate::core::error::SessionStoreError::Corrupt("truncated".to_string()))
        }
        fn set(&self, _token: &str) -> Result<(), crate::core::error::SessionStoreError> {
            Ok(())
        }
        fn clear(&self) -> Result<(), crate::core::error::SessionStoreError> {
            Ok(())
        }
    }

    #[test]
    fn test_on_request_tolerates_unreadable_store() {
        let interceptor = AuthInterceptor::new(Arc::new(BrokenStore), SessionEvents::detached());

        let request = interceptor.on_request(builder()).build().unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_expire_session_clears_and_notifies() {
        let store = Arc::new(MemorySessionStore::with_token("abc123"));
        let (events, rx) = events::channel();
        let interceptor = AuthInterceptor::new(store.clone(), events);

        interceptor.expire_session("http://127.0.0.1/api/x");

        assert_eq!(store.get().unwrap(), None);
        assert_eq!(
            rx.try_recv().unwrap(),
            SessionEvent::CredentialExpired {
                url: "http://127.0.0.1/api/x".to_string()
            }
        );
    }
}
