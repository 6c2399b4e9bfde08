use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClubSettingsService;
use crate::models::{
    ApiResponse, ErrorCode, club_settings::responses::CurrentClubSettingsResponse,
};

/// 返回 ID 最小的设置记录，不存在时以默认值创建
pub async fn current_settings(
    service: &ClubSettingsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let settings = match storage.get_current_club_settings().await {
        Ok(Some(settings)) => Ok(settings),
        Ok(None) => storage.ensure_club_settings().await,
        Err(e) => Err(e),
    };

    match settings {
        Ok(settings) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CurrentClubSettingsResponse::from(settings),
            "Current club settings retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve current club settings: {e}"),
            )),
        ),
    }
}
