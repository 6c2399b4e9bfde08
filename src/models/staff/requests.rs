use crate::models::common::PaginationQuery;
use crate::models::common::query::{deserialize_bool_flag, deserialize_optional_id};
use serde::Deserialize;
use ts_rs::TS;

// 教职工列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_bool_flag")]
    #[ts(type = "string | null")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[ts(type = "string | null")]
    pub department: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_bool_flag")]
    #[ts(type = "string | null")]
    pub mentor_enabled: Option<bool>,
    // 匹配姓名、工号或邮箱
    pub search: Option<String>,
}

// 可担任导师的教职工查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct MentorsByDepartmentParams {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[ts(type = "string | null")]
    pub department_id: Option<i64>,
}

// 教职工创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct CreateStaffRequest {
    pub staff_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject_expertise: String,
    pub qualification: String,
    pub department: i64,
    pub photo: Option<String>,
    pub departmental_access_enabled: Option<bool>,
    pub mentor_access_enabled: Option<bool>,
    pub mentor_cluster: Option<i64>,
    pub is_active: Option<bool>,
}

// 教职工更新请求（PUT/PATCH 均为部分更新）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct UpdateStaffRequest {
    pub staff_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject_expertise: Option<String>,
    pub qualification: Option<String>,
    pub department: Option<i64>,
    pub photo: Option<String>,
    pub departmental_access_enabled: Option<bool>,
    pub mentor_access_enabled: Option<bool>,
    pub mentor_cluster: Option<i64>,
    pub is_active: Option<bool>,
}

// 存储层创建教职工的输入（含登录账号密码哈希）
#[derive(Debug, Clone)]
pub struct NewStaff {
    pub request: CreateStaffRequest,
    pub password_hash: String,
}

// 教职工列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StaffListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub is_active: Option<bool>,
    pub department: Option<i64>,
    pub mentor_enabled: Option<bool>,
    pub search: Option<String>,
}

impl From<StaffListParams> for StaffListQuery {
    fn from(params: StaffListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            is_active: params.is_active,
            department: params.department,
            mentor_enabled: params.mentor_enabled,
            search: params.search,
        }
    }
}
