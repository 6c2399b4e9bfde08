use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学群（学术项目）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/cluster.ts")]
pub struct Cluster {
    pub id: i64,
    pub cluster_name: String,
    pub cluster_code: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    // "{code} ({name})"
    pub display_name: String,
}
