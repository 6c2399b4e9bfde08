pub mod error_code;
pub mod field_errors;
pub mod pagination;
pub mod query;
pub mod response;

pub use error_code::ErrorCode;
pub use field_errors::FieldErrors;
pub use pagination::{PaginationInfo, PaginationQuery};
pub use response::ApiResponse;
