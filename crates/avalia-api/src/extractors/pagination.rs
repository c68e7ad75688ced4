//! Pagination and scoping query parameters.

use serde::{Deserialize, Serialize};

use avalia_core::types::pagination::{DEFAULT_LIMIT, PageRequest};

/// `skip`/`limit` query parameters for list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Rows to skip (default: 0).
    #[serde(default)]
    pub skip: u64,
    /// Rows to return (default: 100, max: 1000).
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationParams {
    /// Converts to a clamped `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(self.skip, self.limit)
    }
}

/// Optional `ciclo_id` restriction for caller-scoped lists.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CycleScope {
    pub ciclo_id: Option<i32>,
}
