use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use chrono::Utc;

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, system::responses::StatusResponse};

/// 服务运行状态，无需任何存储访问
pub async fn status(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    // 未注册启动时间时以当前时间计
    let started_at = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or_else(Utc::now);

    let response = StatusResponse {
        status: "success".to_string(),
        message: format!("{} API is running", config.app.system_name),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at,
        uptime_seconds: (Utc::now() - started_at).num_seconds().max(0),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Service is running",
    )))
}
