use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClubSettingsService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_settings(
    service: &ClubSettingsService,
    settings_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_club_settings_by_id(settings_id).await {
        Ok(Some(settings)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            settings,
            "Club settings retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClubSettingsNotFound,
            "Club settings not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve club settings: {e}"),
            )),
        ),
    }
}
