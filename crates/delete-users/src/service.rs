//! Bulk user deletion service.
//!
//! [`DeleteUsersService`] submits identifiers through a [`DeletionGateway`]
//! and summarises the backend response into a [`DeletionOutcome`].

use std::sync::Arc;

use crate::config::{DEFAULT_MAX_USERS_PER_CALL, DeleteUsersSettings};
use crate::error::DeleteUsersError;
use crate::outcome::{DeletionOutcome, summarize};
use crate::ports::DeletionGateway;

/// Service that deletes users in bulk and reports per-identifier results.
#[derive(Clone)]
pub struct DeleteUsersService<G> {
    gateway: Arc<G>,
    max_users_per_call: usize,
}

impl<G> DeleteUsersService<G> {
    /// Create a service using the default per-call limit.
    pub const fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            max_users_per_call: DEFAULT_MAX_USERS_PER_CALL,
        }
    }

    /// Create a service using loaded settings.
    pub fn with_settings(gateway: Arc<G>, settings: &DeleteUsersSettings) -> Self {
        Self {
            gateway,
            max_users_per_call: settings.max_users_per_call,
        }
    }

    /// Largest number of identifiers accepted by one call.
    #[must_use]
    pub const fn max_users_per_call(&self) -> usize {
        self.max_users_per_call
    }
}

impl<G> DeleteUsersService<G>
where
    G: DeletionGateway,
{
    /// Delete `uids` in one backend call and summarise the result.
    ///
    /// An empty list succeeds without contacting the backend.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteUsersError::TooManyUsers`] when `uids` exceeds the
    /// per-call limit, and [`DeleteUsersError::Gateway`] when the backend call
    /// fails as a whole.
    ///
    /// # Panics
    ///
    /// Panics if the gateway reports more errors than identifiers were
    /// submitted.
    pub async fn delete_users(&self, uids: &[String]) -> Result<DeletionOutcome, DeleteUsersError> {
        let requested = uids.len();
        if requested > self.max_users_per_call {
            tracing::warn!(
                requested,
                max = self.max_users_per_call,
                "bulk delete exceeds per-call limit"
            );
            return Err(DeleteUsersError::TooManyUsers {
                requested,
                max: self.max_users_per_call,
            });
        }
        if uids.is_empty() {
            tracing::debug!("bulk delete called without identifiers, skipping backend call");
            return Ok(summarize(0, None));
        }

        tracing::debug!(requested, "submitting bulk delete");
        let response = self
            .gateway
            .delete_accounts(uids)
            .await
            .inspect_err(|error| {
                tracing::warn!(requested, %error, "bulk delete backend call failed");
            })?;

        let outcome = DeletionOutcome::from_response(requested, response);
        if outcome.is_complete_success() {
            tracing::info!(deleted = outcome.success_count(), "bulk delete completed");
        } else {
            tracing::warn!(
                deleted = outcome.success_count(),
                failed = outcome.failure_count(),
                "bulk delete completed with failures"
            );
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
