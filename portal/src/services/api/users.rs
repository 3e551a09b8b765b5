//! # User Endpoints

use shared::ProfileResponse;

use super::client::ApiClient;
use super::request::get_request;
use crate::core::error::ApiResult;

/// Profile of the signed-in user.
pub async fn get_profile(client: &ApiClient) -> ApiResult<ProfileResponse> {
    get_request(&client.api(), "/api/users/profile").await
}
