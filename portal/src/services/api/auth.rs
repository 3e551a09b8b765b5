//! # Authentication Endpoints
//!
//! Sign-in, sign-up and sign-out. These are the only places that write or
//! intentionally delete the credential; the auth interceptor deletes it on a 401.

use shared::{AuthResponse, LoginRequest, SignupRequest};

use super::client::ApiClient;
use super::request::post_request;
use crate::core::error::{ApiError, ApiResult};
use crate::session::events::SessionEvent;

/// Sign in with e-mail and password and store the returned credential.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn sign_in(client: &ApiClient, request: LoginRequest) -> ApiResult<AuthResponse> {
    tracing::info!("Attempting sign-in");
    let start = std::time::Instant::now();

    let response: AuthResponse = post_request(&client.api(), "/api/auth/login", &request).await?;
    store_credential(client, &response.token)?;

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Sign-in successful");
    Ok(response)
}

/// Register a new account. The backend signs the user in immediately.
///
/// Fails with [`ApiError::Session`] if the returned credential cannot be stored.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn sign_up(client: &ApiClient, request: SignupRequest) -> ApiResult<AuthResponse> {
    let response: AuthResponse = post_request(&client.api(), "/api/auth/signup", &request).await?;
    store_credential(client, &response.token)?;

    tracing::info!("Sign-up successful");
    Ok(response)
}

/// End the session.
///
/// The backend is told first, while the credential is still attached. Its
/// answer does not matter: the local credential is removed either way.
#[tracing::instrument(skip(client))]
pub async fn sign_out(client: &ApiClient) -> ApiResult<()> {
    let outcome: ApiResult<serde_json::Value> =
        post_request(&client.api(), "/api/auth/logout", &serde_json::json!({})).await;
    if let Err(e) = outcome {
        tracing::warn!(error = %e, "Backend sign-out failed, clearing local session anyway");
    }

    client.store().clear().map_err(|e| {
        tracing::error!(error = %e, "Failed to clear credential on sign-out");
        ApiError::from(e)
    })?;
    client.events().emit(SessionEvent::SignedOut);

    tracing::info!("Signed out");
    Ok(())
}

/// Persist the credential, then announce the session.
///
/// Nothing is announced when persisting fails: without a stored credential
/// the session does not exist.
fn store_credential(client: &ApiClient, token: &str) -> ApiResult<()> {
    client.store().set(token).map_err(|e| {
        tracing::error!(error = %e, "Failed to persist credential");
        ApiError::from(e)
    })?;
    client.events().emit(SessionEvent::SignedIn);
    Ok(())
}
