use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClubService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_active_clubs(
    service: &ClubService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_active_clubs().await {
        Ok(clubs) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            clubs,
            "Active clubs retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve active clubs: {e}"),
            )),
        ),
    }
}
