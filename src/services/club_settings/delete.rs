use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClubSettingsService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_settings(
    service: &ClubSettingsService,
    settings_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_club_settings(settings_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Club settings deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClubSettingsNotFound,
            "Club settings not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClubSettingsUpdateFailed,
                format!("Club settings deletion failed: {e}"),
            )),
        ),
    }
}
