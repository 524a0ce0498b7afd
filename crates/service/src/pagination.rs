//! Pagination parameters for list queries.

/// A requested page of results. Only constructed when the caller supplied
/// both `page` and `limit`; otherwise list queries return a flat list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub limit: u64,
}

impl PageRequest {
    /// Values below 1 are clamped to 1; a page past the end simply yields an
    /// empty items list, never an error.
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page: page.max(1), limit: limit.max(1) }
    }

    /// 0-based index as expected by the paginator.
    pub fn zero_based(self) -> u64 {
        self.page - 1
    }
}
