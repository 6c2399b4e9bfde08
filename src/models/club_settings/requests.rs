use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

// 社团设置创建请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club_settings.ts")]
pub struct CreateClubSettingsRequest {
    pub student_join_period_start: Option<DateTime<Utc>>,
    pub student_join_period_end: Option<DateTime<Utc>>,
    pub is_joining_open: Option<bool>,
    pub max_clubs_per_student: Option<i32>,
}

// 社团设置更新请求（PUT/PATCH 均为部分更新）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club_settings.ts")]
pub struct UpdateClubSettingsRequest {
    pub student_join_period_start: Option<DateTime<Utc>>,
    pub student_join_period_end: Option<DateTime<Utc>>,
    pub is_joining_open: Option<bool>,
    pub max_clubs_per_student: Option<i32>,
}
