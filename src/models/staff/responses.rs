use super::entities::Staff;
use crate::models::common::pagination::PaginatedResponse;

pub type StaffListResponse = PaginatedResponse<Staff>;
