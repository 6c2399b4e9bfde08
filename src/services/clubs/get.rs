use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClubService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_club(
    service: &ClubService,
    club_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_club_by_id(club_id).await {
        Ok(Some(club)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            club,
            "Club retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClubNotFound,
            "Club not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve club: {e}"),
            )),
        ),
    }
}
