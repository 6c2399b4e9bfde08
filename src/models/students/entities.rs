use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub student_id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cluster: i64,
    pub cluster_name: Option<String>,
    pub roll_number: Option<String>,
    pub year_of_admission: i32,
    pub current_semester: i32,
    // 当前签发的明文密码，仅用于凭据邮件，不输出到响应
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password: Option<String>,
    pub can_change_club: bool,
    pub club_change_expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub is_active: bool,
    pub credentials_sent: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 批量导入状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub enum BulkUploadStatus {
    Processing, // 处理中
    Completed,  // 全部成功
    Partial,    // 部分失败
}

impl BulkUploadStatus {
    /// 根据失败数量得出最终状态
    pub fn finished(failed: usize) -> Self {
        if failed == 0 {
            Self::Completed
        } else {
            Self::Partial
        }
    }
}

impl std::fmt::Display for BulkUploadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BulkUploadStatus::Processing => write!(f, "processing"),
            BulkUploadStatus::Completed => write!(f, "completed"),
            BulkUploadStatus::Partial => write!(f, "partial"),
        }
    }
}

impl std::str::FromStr for BulkUploadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(BulkUploadStatus::Processing),
            "completed" => Ok(BulkUploadStatus::Completed),
            "partial" => Ok(BulkUploadStatus::Partial),
            _ => Err(format!("Invalid bulk upload status: {s}")),
        }
    }
}

// 学生批量导入记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentBulkUpload {
    pub id: i64,
    pub cluster: i64,
    pub file_name: String,
    pub total_students: i32,
    pub successful_uploads: i32,
    pub failed_uploads: i32,
    pub status: BulkUploadStatus,
    pub error_log: Option<String>,
    pub upload_date: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_status_roundtrip_and_finish() {
        assert_eq!(BulkUploadStatus::finished(0), BulkUploadStatus::Completed);
        assert_eq!(BulkUploadStatus::finished(3), BulkUploadStatus::Partial);
        assert_eq!(
            "partial".parse::<BulkUploadStatus>().unwrap(),
            BulkUploadStatus::Partial
        );
        assert!("done".parse::<BulkUploadStatus>().is_err());
    }

    #[test]
    fn test_plaintext_password_not_serialized() {
        let now = chrono::Utc::now();
        let student = Student {
            id: 1,
            user_id: 1,
            student_id: "CS1234".into(),
            username: "ann_CS1234".into(),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone: None,
            cluster: 1,
            cluster_name: None,
            roll_number: None,
            year_of_admission: 2024,
            current_semester: 1,
            password: Some("secret12".into()),
            can_change_club: false,
            club_change_expires_at: None,
            is_active: true,
            credentials_sent: false,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&student).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["student_id"], "CS1234");
    }
}
