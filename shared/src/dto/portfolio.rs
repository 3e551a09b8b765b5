//! # Portfolio Data Transfer Objects
//!
//! Payloads of the feature endpoints consumed through the typed request
//! helpers: user profile, tokenized projects, transactions and KYC.

use serde::{Deserialize, Serialize};

use super::auth::UserInfo;

/// `GET /api/users/profile`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileResponse {
    pub user: UserInfo,
}

/// Tokenized real-estate project listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub token_price: f64,
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default)]
    pub available_tokens: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Investment or payout transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub amount: f64,
    #[serde(default)]
    pub tokens: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

/// KYC submission body for `POST /service/kyc/{version}/submissions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmission {
    pub full_name: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub document_type: String,
    pub document_number: String,
    pub address: String,
}

/// KYC review state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KycState {
    Pending,
    Approved,
    Rejected,
}

/// `GET /service/kyc/{version}/status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KycStatus {
    pub status: KycState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One page of a list endpoint, pagination kept next to the items
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<super::envelope::Pagination>,
}
