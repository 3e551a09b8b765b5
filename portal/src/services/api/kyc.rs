//! # KYC Endpoints
//!
//! KYC runs as its own versioned service (`/service/kyc/{version}`) rather
//! than under the generic API.

use shared::{KycStatus, KycSubmission};

use super::client::ApiClient;
use super::request::{get_request, post_request};
use crate::core::error::ApiResult;

/// Service name of the KYC backend.
pub const KYC_SERVICE: &str = "kyc";

/// Submit identity details for review.
#[tracing::instrument(skip(client, submission), fields(document_type = %submission.document_type))]
pub async fn submit_kyc(client: &ApiClient, submission: &KycSubmission) -> ApiResult<KycStatus> {
    let kyc = client.factory().client(KYC_SERVICE, None);
    let status: KycStatus = post_request(&kyc, "/submissions", submission).await?;

    tracing::info!(status = ?status.status, "KYC submitted");
    Ok(status)
}

/// Current review state.
pub async fn get_kyc_status(client: &ApiClient) -> ApiResult<KycStatus> {
    let kyc = client.factory().client(KYC_SERVICE, None);
    get_request(&kyc, "/status").await
}
