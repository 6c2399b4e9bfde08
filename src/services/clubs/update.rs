use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClubService;
use super::validate::check_club_fields;
use crate::models::{ApiResponse, ErrorCode, clubs::requests::UpdateClubRequest};

pub async fn update_club(
    service: &ClubService,
    club_id: i64,
    update_data: UpdateClubRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = match check_club_fields(
        &storage,
        update_data.name.as_deref(),
        update_data.coordinator,
        update_data.max_members,
    )
    .await
    {
        Ok(errors) => errors,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Club validation failed: {e}"),
                )),
            );
        }
    };
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors)));
    }

    match storage.update_club(club_id, update_data).await {
        Ok(Some(club)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(club, "Club updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClubNotFound,
            "Club not found",
        ))),
        Err(e) => {
            error!("Club update failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClubUpdateFailed,
                    format!("Club update failed: {e}"),
                )),
            )
        }
    }
}
