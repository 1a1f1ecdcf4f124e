//! Bulk deletion outcome aggregation.
//!
//! A [`DeletionOutcome`] summarises one bulk "delete users" call: how many
//! identifiers were deleted, how many failed, and why each failure happened.
//! It is built once from the number of submitted identifiers and the
//! backend's optional per-index error list, and is read-only afterwards.

use serde::Serialize;

use crate::response::BatchDeleteResponse;

/// One failed deletion reported by the backend.
///
/// `index` is the zero-based position of the failed identifier in the list
/// that was submitted; `message` is the backend's diagnostic text, passed
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorEntry {
    index: usize,
    message: String,
}

impl ErrorEntry {
    /// Create an entry for the identifier at `index` in the submitted list.
    pub fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }

    /// Position of the failed identifier within the submitted list.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Backend description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Summary of a bulk user deletion.
///
/// `success_count + failure_count` always equals the number of identifiers
/// submitted, and `errors().len()` always equals `failure_count`.
///
/// # Example
///
/// ```
/// use delete_users::summarize;
///
/// let outcome = summarize(3, Some(vec![(1, "not-found".to_owned())]));
///
/// assert_eq!(outcome.success_count(), 2);
/// assert_eq!(outcome.failure_count(), 1);
/// assert_eq!(outcome.errors()[0].index(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionOutcome {
    success_count: usize,
    failure_count: usize,
    errors: Vec<ErrorEntry>,
}

/// Summarise a bulk deletion of `total_requested` identifiers.
///
/// `raw_errors` is the backend's `(index, message)` list in response order;
/// `None` means the backend reported no failures. Entries are kept in order
/// and multiplicity. Every identifier without a reported error counts as
/// deleted, whether or not it existed before the call.
///
/// # Panics
///
/// Panics if `raw_errors` holds more entries than `total_requested`. That
/// means the backend adapter and the caller disagree about the request and
/// no trustworthy summary exists.
#[must_use]
pub fn summarize(
    total_requested: usize,
    raw_errors: Option<Vec<(usize, String)>>,
) -> DeletionOutcome {
    let entries = raw_errors.unwrap_or_default();
    assert!(
        total_requested >= entries.len(),
        "backend reported {} deletion errors for {total_requested} requested users",
        entries.len()
    );

    let errors: Vec<ErrorEntry> = entries
        .into_iter()
        .map(|(index, message)| ErrorEntry { index, message })
        .collect();
    let failure_count = errors.len();

    DeletionOutcome {
        success_count: total_requested - failure_count,
        failure_count,
        errors,
    }
}

impl DeletionOutcome {
    /// Summarise a decoded backend response for `total_requested` identifiers.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`summarize`]: the response lists
    /// more errors than identifiers were submitted.
    #[must_use]
    pub fn from_response(total_requested: usize, response: BatchDeleteResponse) -> Self {
        summarize(total_requested, response.into_raw_errors())
    }

    /// Number of identifiers deleted, possibly zero.
    #[must_use]
    pub const fn success_count(&self) -> usize {
        self.success_count
    }

    /// Number of identifiers that could not be deleted, possibly zero.
    #[must_use]
    pub const fn failure_count(&self) -> usize {
        self.failure_count
    }

    /// Failures in the order the backend reported them.
    #[must_use]
    pub fn errors(&self) -> &[ErrorEntry] {
        self.errors.as_slice()
    }

    /// Number of identifiers that were submitted.
    #[must_use]
    pub const fn total_requested(&self) -> usize {
        self.success_count + self.failure_count
    }

    /// Returns `true` when no failures were reported.
    #[must_use]
    pub const fn is_complete_success(&self) -> bool {
        self.failure_count == 0
    }

    /// Look up the submitted items that failed, in error order.
    ///
    /// `requested` must be the list that was sent to the backend. Indices
    /// that fall outside it are skipped.
    ///
    /// ```
    /// use delete_users::summarize;
    ///
    /// let uids = ["a", "b", "c"];
    /// let outcome = summarize(uids.len(), Some(vec![(2, "disabled".to_owned())]));
    ///
    /// assert_eq!(outcome.failed_items(&uids), vec![&"c"]);
    /// ```
    #[must_use]
    pub fn failed_items<'a, T>(&self, requested: &'a [T]) -> Vec<&'a T> {
        self.errors
            .iter()
            .filter_map(|entry| requested.get(entry.index))
            .collect()
    }
}
