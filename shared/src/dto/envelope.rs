//! # Response Envelope
//!
//! Every backend response wraps its payload as
//! `{ "status": ..., "data": ..., "message"?: ..., "pagination"?: ... }`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: String,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Pagination metadata returned next to `data` by list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    /// Whether a page after the current one exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode an envelope from a raw JSON body.
    ///
    /// Unlike plain `serde` deserialization this distinguishes a body that is
    /// not an envelope at all from one whose `data` has the wrong shape, and
    /// never substitutes a default for a missing `data` field.
    pub fn from_value(value: Value) -> Result<Self, EnvelopeError> {
        let Value::Object(mut object) = value else {
            return Err(EnvelopeError::NotAnObject);
        };

        let data = object.remove("data").ok_or(EnvelopeError::MissingData)?;
        let data = serde_json::from_value(data).map_err(|e| EnvelopeError::Data(e.to_string()))?;

        let status = match object.remove("status") {
            Some(Value::String(status)) => status,
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let message = object
            .remove("message")
            .and_then(|v| v.as_str().map(str::to_owned));
        let pagination = object
            .remove("pagination")
            .filter(|v| !v.is_null())
            .map(serde_json::from_value::<Pagination>)
            .transpose()
            .map_err(|e| EnvelopeError::Pagination(e.to_string()))?;

        Ok(Self {
            status,
            data,
            message,
            pagination,
        })
    }
}

/// Error body sent with non-2xx responses.
///
/// Backends are inconsistent about the field name, so both `message` and
/// `error` are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable description carried by the body, if any.
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    NotAnObject,
    MissingData,
    Data(String),
    Pagination(String),
}

impl std::fmt::Display for EnvelopeError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(fmt, "response body is not a JSON object"),
            Self::MissingData => write!(fmt, "response body has no `data` field"),
            Self::Data(e) => write!(fmt, "`data` field has unexpected shape: {e}"),
            Self::Pagination(e) => write!(fmt, "`pagination` field has unexpected shape: {e}"),
        }
    }
}

impl std::error::Error for EnvelopeError {}
// endregion: --- Error
