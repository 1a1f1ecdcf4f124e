//! Backend batch delete response payloads.
//!
//! The identity backend answers a bulk delete with a JSON object whose
//! optional `errors` array lists the identifiers it could not delete:
//!
//! ```json
//! { "errors": [{ "index": 1, "localId": "uid-2", "message": "not-found" }] }
//! ```
//!
//! A missing or `null` `errors` field means every identifier was deleted.

use serde::Deserialize;

use crate::error::ResponseError;

/// One per-identifier failure as reported on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteErrorInfo {
    index: usize,
    #[serde(default)]
    local_id: Option<String>,
    message: String,
}

impl BatchDeleteErrorInfo {
    /// Create a failure record for the identifier at `index`.
    pub fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            local_id: None,
            message: message.into(),
        }
    }

    /// Attach the identifier the backend echoed back.
    #[must_use]
    pub fn with_local_id(mut self, local_id: impl Into<String>) -> Self {
        self.local_id = Some(local_id.into());
        self
    }

    /// Position of the failed identifier within the submitted list.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Identifier echoed back by the backend, when present.
    #[must_use]
    pub fn local_id(&self) -> Option<&str> {
        self.local_id.as_deref()
    }

    /// Backend description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Decoded batch delete response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BatchDeleteResponse {
    #[serde(default)]
    errors: Option<Vec<BatchDeleteErrorInfo>>,
}

impl BatchDeleteResponse {
    /// Build a response from an already decoded error list.
    #[must_use]
    pub const fn new(errors: Option<Vec<BatchDeleteErrorInfo>>) -> Self {
        Self { errors }
    }

    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::Parse`] if the body is not valid JSON, an
    /// error entry lacks `index` or `message`, or an `index` is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use delete_users::BatchDeleteResponse;
    ///
    /// let response = BatchDeleteResponse::from_json("{}").expect("valid response");
    /// assert!(response.errors().is_none());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ResponseError> {
        serde_json::from_str(json).map_err(|e| ResponseError::Parse {
            message: e.to_string(),
        })
    }

    /// Failures reported by the backend, if any were listed.
    #[must_use]
    pub fn errors(&self) -> Option<&[BatchDeleteErrorInfo]> {
        self.errors.as_deref()
    }

    /// Convert into the `(index, message)` pairs consumed by
    /// [`summarize`](crate::summarize), keeping response order.
    #[must_use]
    pub fn into_raw_errors(self) -> Option<Vec<(usize, String)>> {
        self.errors.map(|errors| {
            errors
                .into_iter()
                .map(|info| (info.index, info.message))
                .collect()
        })
    }
}
