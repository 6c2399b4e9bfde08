use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClubSettingsService;
use super::validate::check_settings_fields;
use crate::models::{
    ApiResponse, ErrorCode, club_settings::requests::CreateClubSettingsRequest,
};

pub async fn create_settings(
    service: &ClubSettingsService,
    settings_data: CreateClubSettingsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let errors = check_settings_fields(
        settings_data.student_join_period_start,
        settings_data.student_join_period_end,
        settings_data.max_clubs_per_student,
    );
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors)));
    }

    let storage = service.get_storage(request);

    match storage.create_club_settings(settings_data).await {
        Ok(settings) => Ok(HttpResponse::Created().json(ApiResponse::success(
            settings,
            "Club settings created successfully",
        ))),
        Err(e) => {
            error!("Club settings creation failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClubSettingsUpdateFailed,
                    format!("Club settings creation failed: {e}"),
                )),
            )
        }
    }
}
