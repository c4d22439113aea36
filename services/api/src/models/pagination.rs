//! Page arithmetic for the admin contact listing

use serde::{Deserialize, Serialize};

/// Page size used when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: u64 = 100;

/// Query parameters for paginated listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Page number (1-based)
    pub page: Option<u64>,
    /// Number of items per page
    pub limit: Option<u64>,
}

/// A clamped page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Rows to skip before this page starts
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl From<&PageQuery> for PageRequest {
    fn from(query: &PageQuery) -> Self {
        Self {
            page: query.page.unwrap_or(1).max(1),
            limit: query
                .limit
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }
}

/// Pagination block returned with a page of results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            pages: total.div_ceil(request.limit),
        }
    }
}
