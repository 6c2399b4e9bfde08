use super::entities::Club;
use crate::models::common::pagination::PaginatedResponse;

pub type ClubListResponse = PaginatedResponse<Club>;
