//! Error types for the delete-users crate.
//!
//! Per-identifier deletion failures are not errors here; they are data carried
//! by [`DeletionOutcome`](crate::DeletionOutcome). These enums cover the
//! recoverable failures around it: decoding the backend response and driving
//! the bulk delete call.

use thiserror::Error;

use crate::ports::GatewayError;

/// Errors raised while decoding a backend batch delete response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// The response body is malformed or an error entry is incomplete.
    #[error("invalid batch delete response: {message}")]
    Parse {
        /// Description of the decode failure.
        message: String,
    },
}

/// Errors returned by [`DeleteUsersService`](crate::DeleteUsersService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteUsersError {
    /// More identifiers were submitted than one call may carry.
    #[error("cannot delete {requested} users in one call: the limit is {max}")]
    TooManyUsers {
        /// Number of identifiers submitted.
        requested: usize,
        /// Configured per-call limit.
        max: usize,
    },

    /// The backend call itself failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
