//! Port to the backend that performs the bulk delete.
//!
//! The crate performs no network I/O of its own. Transport adapters implement
//! [`DeletionGateway`] and hand back the decoded [`BatchDeleteResponse`];
//! identifiers the backend could not delete travel inside that response, not
//! as a [`GatewayError`].

use async_trait::async_trait;
use thiserror::Error;

use crate::error::ResponseError;
use crate::response::BatchDeleteResponse;

/// Errors raised by deletion gateway adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backend could not be reached.
    #[error("user deletion backend unavailable: {message}")]
    Unavailable {
        /// Transport failure description.
        message: String,
    },
    /// The backend refused the whole batch.
    #[error("user deletion backend rejected the batch: {message}")]
    Rejected {
        /// Backend rejection description.
        message: String,
    },
    /// The backend answered with a body that could not be decoded.
    #[error("user deletion backend returned an unreadable response: {0}")]
    Decode(#[from] ResponseError),
}

impl GatewayError {
    /// Build a [`GatewayError::Unavailable`] error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Build a [`GatewayError::Rejected`] error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Port for submitting a bulk user deletion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeletionGateway: Send + Sync {
    /// Delete the given user identifiers in one backend call.
    async fn delete_accounts(&self, uids: &[String]) -> Result<BatchDeleteResponse, GatewayError>;
}

/// Fixture gateway that reports every identifier as deleted.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDeletionGateway;

#[async_trait]
impl DeletionGateway for FixtureDeletionGateway {
    async fn delete_accounts(&self, _uids: &[String]) -> Result<BatchDeleteResponse, GatewayError> {
        Ok(BatchDeleteResponse::default())
    }
}
