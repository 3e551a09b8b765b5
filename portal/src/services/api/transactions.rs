//! # Transaction Endpoints

use shared::{Page, Transaction};

use super::client::ApiClient;
use super::request::get_envelope;
use crate::core::error::ApiResult;

/// One page of the signed-in user's transactions.
#[tracing::instrument(skip(client))]
pub async fn list_transactions(client: &ApiClient, page: u32, limit: u32) -> ApiResult<Page<Transaction>> {
    let path = format!("/api/transactions?page={}&limit={}", page.max(1), limit);
    let envelope = get_envelope::<Vec<Transaction>>(&client.api(), &path).await?;

    Ok(Page {
        items: envelope.data,
        pagination: envelope.pagination,
    })
}
