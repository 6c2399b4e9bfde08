use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClubService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_club(
    service: &ClubService,
    club_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_club(club_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Club deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClubNotFound,
            "Club not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClubDeleteFailed,
                format!("Club deletion failed: {e}"),
            )),
        ),
    }
}
