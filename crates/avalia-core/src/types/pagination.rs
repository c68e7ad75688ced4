//! Offset/limit pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// Default number of rows returned by list operations.
pub const DEFAULT_LIMIT: u64 = 100;
/// Upper bound applied to any requested limit.
pub const MAX_LIMIT: u64 = 1000;

/// Offset-based page request (`skip` rows, then at most `limit` rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of rows to skip.
    pub skip: u64,
    /// Maximum number of rows to return.
    pub limit: u64,
}

impl PageRequest {
    /// Create a page request, clamping `limit` into `1..=MAX_LIMIT`.
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.skip).unwrap_or(i64::MAX)
    }

    /// SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }

    /// Apply this page to an already ordered iterator.
    pub fn slice<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(usize::try_from(self.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(self.limit).unwrap_or(usize::MAX))
            .collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
