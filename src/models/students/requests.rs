use crate::models::common::PaginationQuery;
use crate::models::common::query::{deserialize_bool_flag, deserialize_optional_id};
use serde::Deserialize;
use ts_rs::TS;

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_bool_flag")]
    #[ts(type = "string | null")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[ts(type = "string | null")]
    pub cluster: Option<i64>,
    // 匹配姓名、学号、邮箱或座号
    pub search: Option<String>,
}

// 学生创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cluster: i64,
    pub roll_number: Option<String>,
    pub year_of_admission: i32,
    pub current_semester: Option<i32>,
    // 不提供时自动生成
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub can_change_club: Option<bool>,
}

// 学生更新请求（PUT/PATCH 均为部分更新）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cluster: Option<i64>,
    pub roll_number: Option<String>,
    pub year_of_admission: Option<i32>,
    pub current_semester: Option<i32>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub can_change_club: Option<bool>,
}

// 批量导入记录查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct BulkUploadListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[ts(type = "string | null")]
    pub cluster: Option<i64>,
}

// 存储层创建学生的输入（学号、用户名与密码已由服务层生成）
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub student_id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cluster_id: i64,
    pub roll_number: Option<String>,
    pub year_of_admission: i32,
    pub current_semester: i32,
    pub is_active: bool,
    pub can_change_club: bool,
    pub password: String,
    pub password_hash: String,
}

// 存储层更新学生的输入
#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    pub request: UpdateStudentRequest,
    // 与 request.password 同时提供
    pub password_hash: Option<String>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub is_active: Option<bool>,
    pub cluster: Option<i64>,
    pub search: Option<String>,
}

impl From<StudentListParams> for StudentListQuery {
    fn from(params: StudentListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            is_active: params.is_active,
            cluster: params.cluster,
            search: params.search,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BulkUploadListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub cluster: Option<i64>,
}

impl From<BulkUploadListParams> for BulkUploadListQuery {
    fn from(params: BulkUploadListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            cluster: params.cluster,
        }
    }
}
