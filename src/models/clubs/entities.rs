use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 社团
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club.ts")]
pub struct Club {
    pub id: i64,
    // 创建时生成的 UUID，不可修改
    pub club_id: String,
    pub name: String,
    pub description: Option<String>,
    pub coordinator: i64,
    pub coordinator_name: Option<String>,
    pub department_name: Option<String>,
    pub max_members: i32,
    pub member_count: i64,
    pub representative_count: i64,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Club {
    pub fn is_full(&self) -> bool {
        self.member_count >= i64::from(self.max_members)
    }
}

// 社团成员
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club.ts")]
pub struct ClubMember {
    pub id: i64,
    pub club: i64,
    pub student: i64,
    pub student_name: Option<String>,
    // 学生学号
    pub student_number: Option<String>,
    pub is_representative: bool,
    pub is_active: bool,
    pub joined_at: chrono::DateTime<chrono::Utc>,
    pub left_at: Option<chrono::DateTime<chrono::Utc>>,
}
