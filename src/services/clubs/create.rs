use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClubService;
use super::validate::check_club_fields;
use crate::models::{ApiResponse, ErrorCode, clubs::requests::CreateClubRequest};

pub async fn create_club(
    service: &ClubService,
    club_data: CreateClubRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = match check_club_fields(
        &storage,
        Some(&club_data.name),
        Some(club_data.coordinator),
        club_data.max_members,
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

    match storage.create_club(club_data).await {
        Ok(club) => {
            info!("Created club {} ({})", club.name, club.club_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(club, "Club created successfully")))
        }
        Err(e) => {
            error!("Club creation failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClubCreationFailed,
                    format!("Club creation failed: {e}"),
                )),
            )
        }
    }
}
