use crate::models::common::PaginationQuery;
use crate::models::common::query::deserialize_bool_flag;
use serde::Deserialize;
use ts_rs::TS;

// 社团列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club.ts")]
pub struct ClubListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_bool_flag")]
    #[ts(type = "string | null")]
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

// 社团创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club.ts")]
pub struct CreateClubRequest {
    pub name: String,
    pub description: Option<String>,
    pub coordinator: i64,
    pub max_members: Option<i32>,
    pub is_active: Option<bool>,
}

// 社团更新请求（PUT/PATCH 均为部分更新）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club.ts")]
pub struct UpdateClubRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub coordinator: Option<i64>,
    pub max_members: Option<i32>,
    pub is_active: Option<bool>,
}

// 成员列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club.ts")]
pub struct ClubMemberListParams {
    #[serde(default, deserialize_with = "deserialize_bool_flag")]
    #[ts(type = "string | null")]
    pub is_active: Option<bool>,
}

// 管理员添加成员
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club.ts")]
pub struct AddClubMemberRequest {
    pub student: i64,
    pub is_representative: Option<bool>,
}

// 学生自助加入
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club.ts")]
pub struct JoinClubRequest {
    pub student: i64,
}

// 社团列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ClubListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl From<ClubListParams> for ClubListQuery {
    fn from(params: ClubListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            is_active: params.is_active,
            search: params.search,
        }
    }
}
