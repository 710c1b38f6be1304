//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;

/// A normalized page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a page request from values that are already valid.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Normalize raw caller input.
    ///
    /// `page < 1` becomes 1, `page_size < 1` becomes the configured default
    /// and anything above the configured maximum is clamped to it.
    pub fn normalize(page: i64, page_size: i64, limits: &PaginationConfig) -> Self {
        let page = if page < 1 { 1 } else { page as u64 };
        let page_size = if page_size < 1 {
            limits.default_page_size
        } else {
            (page_size as u64).min(limits.max_page_size)
        };
        Self::new(page, page_size)
    }

    /// Calculate the SQL `OFFSET` value, saturating for very large pages.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        let limits = PaginationConfig::default();
        Self::new(1, limits.default_page_size)
    }
}

/// Paginated response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Total number of matching items across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of pages; 0 only when `total` is 0.
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(data: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            data,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: total_pages(total, request.page_size),
        }
    }
}

/// `ceil(total / page_size)`.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    total.div_ceil(page_size.max(1))
}
