//! # Project Endpoints
//!
//! Tokenized real-estate listings. The list endpoint keeps the envelope's
//! pagination metadata next to the items.

use shared::{Page, Project};

use super::client::ApiClient;
use super::request::{get_envelope, get_request};
use crate::core::error::ApiResult;

/// One page of projects (`page` starts at 1).
#[tracing::instrument(skip(client))]
pub async fn list_projects(client: &ApiClient, page: u32, limit: u32) -> ApiResult<Page<Project>> {
    let path = format!("/api/projects?page={}&limit={}", page.max(1), limit);
    let envelope = get_envelope::<Vec<Project>>(&client.api(), &path).await?;

    tracing::debug!(count = envelope.data.len(), "Fetched projects");
    Ok(Page {
        items: envelope.data,
        pagination: envelope.pagination,
    })
}

/// A single project by id. The id is sent as one encoded path segment.
pub async fn get_project(client: &ApiClient, id: &str) -> ApiResult<Project> {
    let path = format!("/api/projects/{}", urlencoding::encode(id));
    get_request(&client.api(), &path).await
}
