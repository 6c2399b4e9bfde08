use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 下拉选择等场景的简要展示信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffDisplayInfo {
    pub id: i64,
    pub name: String,
    pub photo: Option<String>,
    pub department: Option<String>,
}

// 教职工
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct Staff {
    pub id: i64,
    pub user_id: i64,
    pub staff_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject_expertise: String,
    pub qualification: String,
    pub department: i64,
    pub department_name: Option<String>,
    pub photo: Option<String>,
    pub departmental_access_enabled: bool,
    pub mentor_access_enabled: bool,
    // 仅在 mentor_access_enabled 为 true 时有意义
    pub mentor_cluster: Option<i64>,
    pub mentor_cluster_name: Option<String>,
    pub is_active: bool,
    pub date_joined: chrono::DateTime<chrono::Utc>,
    pub last_updated: chrono::DateTime<chrono::Utc>,
    pub display_info: StaffDisplayInfo,
}
