use super::entities::Account;
use crate::models::common::pagination::PaginatedResponse;

pub type AccountListResponse = PaginatedResponse<Account>;
