//! Request and response types shared across endpoints.

mod pagination;
mod response;

pub use pagination::{Paginated, PaginatedEmployees, PaginationMeta, PaginationParams};
pub use response::{Created, NoContent};
