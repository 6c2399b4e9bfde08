use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClubService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn toggle_club_status(
    service: &ClubService,
    club_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.toggle_club_status(club_id).await {
        Ok(Some(club)) => {
            info!(
                "Club {} is now {}",
                club.name,
                if club.is_active { "active" } else { "inactive" }
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                club,
                "Club status updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClubNotFound,
            "Club not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClubUpdateFailed,
                format!("Failed to toggle club status: {e}"),
            )),
        ),
    }
}
