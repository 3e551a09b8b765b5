//! # Typed Request Helpers
//!
//! Generic wrappers every feature service uses instead of repeating HTTP
//! boilerplate. Each one sends through the client's interceptors and returns
//! the envelope's `data`, decoded as the caller's type.
//!
//! No retries, no validation, no transformation beyond unwrapping; errors
//! come back exactly as the interceptor produced them.
//!
//! ```rust,no_run
//! # async fn demo(client: &portal::services::api::ServiceClient) -> portal::core::ApiResult<()> {
//! use portal::services::api::request::get_request;
//! use shared::ProfileResponse;
//!
//! let profile: ProfileResponse = get_request(client, "/api/users/profile").await?;
//! println!("{}", profile.user.first_name);
//! # Ok(())
//! # }
//! ```

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::Envelope;

use super::factory::ServiceClient;
use crate::core::error::ApiResult;

/// `GET path`, returning `data`.
pub async fn get_request<T: DeserializeOwned>(client: &ServiceClient, path: &str) -> ApiResult<T> {
    Ok(get_envelope(client, path).await?.data)
}

/// `POST path` with a JSON body, returning `data`.
pub async fn post_request<B, T>(client: &ServiceClient, path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let request = client.request(Method::POST, path).json(body);
    Ok(execute(client, request).await?.data)
}

/// `PUT path` with a JSON body, returning `data`.
pub async fn put_request<B, T>(client: &ServiceClient, path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let request = client.request(Method::PUT, path).json(body);
    Ok(execute(client, request).await?.data)
}

/// `PATCH path` with a JSON body, returning `data`.
pub async fn patch_request<B, T>(client: &ServiceClient, path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let request = client.request(Method::PATCH, path).json(body);
    Ok(execute(client, request).await?.data)
}

/// `DELETE path`, returning `data`.
pub async fn delete_request<T: DeserializeOwned>(client: &ServiceClient, path: &str) -> ApiResult<T> {
    let request = client.request(Method::DELETE, path);
    Ok(execute(client, request).await?.data)
}

/// `GET path`, returning the whole envelope.
///
/// For list endpoints whose `pagination` sits next to `data`.
pub async fn get_envelope<T: DeserializeOwned>(client: &ServiceClient, path: &str) -> ApiResult<Envelope<T>> {
    let request = client.request(Method::GET, path);
    execute(client, request).await
}

async fn execute<T: DeserializeOwned>(client: &ServiceClient, request: RequestBuilder) -> ApiResult<Envelope<T>> {
    let response = client.send(request).await?;
    let body: Value = response.json().await?;
    Ok(Envelope::from_value(body)?)
}
