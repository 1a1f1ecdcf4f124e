//! Result aggregation for bulk user deletion against an identity backend.
//!
//! A bulk "delete users" call submits an ordered list of user identifiers and
//! receives a response listing the positions that could not be deleted. This
//! crate turns that response into a [`DeletionOutcome`]: success and failure
//! counts plus the ordered failure list, which callers cross-reference
//! against their original identifiers to decide what to retry.
//!
//! # Overview
//!
//! - [`summarize`] builds an outcome from the submitted count and the
//!   backend's optional `(index, message)` list
//! - [`BatchDeleteResponse`] decodes the backend's JSON response
//! - [`DeletionGateway`] is the port transport adapters implement
//! - [`DeleteUsersService`] drives the gateway under a configurable per-call
//!   limit
//!
//! # Example
//!
//! ```
//! use delete_users::{BatchDeleteResponse, DeletionOutcome};
//!
//! let uids = ["uid-0", "uid-1", "uid-2"];
//! let response = BatchDeleteResponse::from_json(
//!     r#"{"errors": [{"index": 1, "localId": "uid-1", "message": "not-found"}]}"#,
//! )
//! .expect("valid response");
//!
//! let outcome = DeletionOutcome::from_response(uids.len(), response);
//!
//! assert_eq!(outcome.success_count(), 2);
//! assert_eq!(outcome.failure_count(), 1);
//! assert_eq!(outcome.failed_items(&uids), vec![&"uid-1"]);
//! ```

mod config;
mod error;
mod outcome;
pub mod ports;
mod response;
mod service;

pub use config::{DEFAULT_MAX_USERS_PER_CALL, DeleteUsersSettings};
pub use error::{DeleteUsersError, ResponseError};
pub use outcome::{DeletionOutcome, ErrorEntry, summarize};
pub use ports::{DeletionGateway, FixtureDeletionGateway, GatewayError};
pub use response::{BatchDeleteErrorInfo, BatchDeleteResponse};
pub use service::DeleteUsersService;
