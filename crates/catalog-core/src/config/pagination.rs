//! Paging limits for list endpoints.

use serde::{Deserialize, Serialize};

/// Page size defaults applied when normalizing list requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller asks for less than one item.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Upper bound for the page size.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    10
}

fn default_max_page_size() -> u64 {
    100
}
