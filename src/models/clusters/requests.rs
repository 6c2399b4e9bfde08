use crate::models::common::PaginationQuery;
use crate::models::common::query::deserialize_bool_flag;
use serde::Deserialize;
use ts_rs::TS;

// 学群列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/cluster.ts")]
pub struct ClusterListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_bool_flag")]
    #[ts(type = "string | null")]
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

// 学群创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/cluster.ts")]
pub struct CreateClusterRequest {
    pub cluster_name: String,
    pub cluster_code: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

// 学群更新请求（PUT/PATCH 均为部分更新）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/cluster.ts")]
pub struct UpdateClusterRequest {
    pub cluster_name: Option<String>,
    pub cluster_code: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

// 学群列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ClusterListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl From<ClusterListParams> for ClusterListQuery {
    fn from(params: ClusterListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            is_active: params.is_active,
            search: params.search,
        }
    }
}
