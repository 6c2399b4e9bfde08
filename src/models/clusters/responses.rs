use super::entities::Cluster;
use crate::models::common::pagination::PaginatedResponse;

pub type ClusterListResponse = PaginatedResponse<Cluster>;
