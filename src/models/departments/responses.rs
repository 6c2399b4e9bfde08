use super::entities::Department;
use crate::models::common::pagination::PaginatedResponse;

pub type DepartmentListResponse = PaginatedResponse<Department>;
