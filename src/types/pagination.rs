//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::EmployeeResponse;

/// Pagination query parameters
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u64,
    /// Page size, capped at the maximum
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

/// Highest page index whose row offset still fits a signed 64-bit column
const MAX_PAGE_INDEX: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Zero-based page index; page 0 is treated as page 1 and huge pages
    /// are capped so the offset cannot overflow
    pub fn page_index(&self) -> u64 {
        self.page.saturating_sub(1).min(MAX_PAGE_INDEX)
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        self.page_index() * self.limit()
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> u64 {
        self.per_page.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, ToSchema)]
#[aliases(PaginatedEmployees = Paginated<EmployeeResponse>)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Build a page from the rows and the total row count
    pub fn new(data: Vec<T>, params: &PaginationParams, total: u64) -> Self {
        let per_page = params.limit();
        Self {
            data,
            meta: PaginationMeta {
                page: params.page_index() + 1,
                per_page,
                total,
                total_pages: total.div_ceil(per_page),
            },
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped() {
        assert_eq!(PaginationParams::new(1, 0).limit(), 1);
        assert_eq!(PaginationParams::new(1, 1_000).limit(), MAX_PAGE_SIZE);
        assert_eq!(PaginationParams::new(1, 10).limit(), 10);
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let params = PaginationParams::new(0, 10);
        assert_eq!(params.offset(), 0);
        assert_eq!(Paginated::new(vec![1, 2], &params, 2).meta.page, 1);
    }

    #[test]
    fn huge_page_is_capped_instead_of_overflowing() {
        let params = PaginationParams::new(u64::MAX, 100);
        assert_eq!(params.page_index(), MAX_PAGE_INDEX);
        assert!(params.offset() <= i64::MAX as u64);
    }

    #[test]
    fn total_pages_rounds_up() {
        let params = PaginationParams::new(3, 10);
        let page: Paginated<u8> = Paginated::new(vec![], &params, 21);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(params.offset(), 20);
    }
}
