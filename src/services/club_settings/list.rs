use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClubSettingsService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_settings(
    service: &ClubSettingsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_club_settings().await {
        Ok(settings) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            settings,
            "Club settings retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve club settings: {e}"),
            )),
        ),
    }
}
