use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Student, StudentBulkUpload};
use crate::models::common::pagination::PaginatedResponse;

pub type StudentListResponse = PaginatedResponse<Student>;

pub type BulkUploadListResponse = PaginatedResponse<StudentBulkUpload>;

// 批量导入成功创建的学生摘要
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreatedStudentSummary {
    pub name: String,
    pub email: String,
    pub roll_number: Option<String>,
}

// 批量导入结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct BulkUploadResponse {
    pub message: String,
    pub created_students: Vec<CreatedStudentSummary>,
    // 形如 "Row 3: email: Email already exists."
    pub errors: Vec<String>,
    pub upload_id: i64,
}

// 重置密码结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct PasswordResetResponse {
    pub message: String,
    pub new_password: String,
}
