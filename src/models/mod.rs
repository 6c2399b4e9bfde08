//! API 数据模型
//!
//! 每个资源模块分为 `entities`（业务实体）、`requests`（请求体与查询参数）
//! 和 `responses`（响应体）。

pub mod accounts;
pub mod club_settings;
pub mod clubs;
pub mod clusters;
pub mod common;
pub mod departments;
pub mod staff;
pub mod students;
pub mod system;

pub use common::{ApiResponse, ErrorCode, FieldErrors, PaginationInfo, PaginationQuery};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
