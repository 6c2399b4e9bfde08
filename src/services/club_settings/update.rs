use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClubSettingsService;
use super::validate::check_settings_fields;
use crate::models::{
    ApiResponse, ErrorCode, club_settings::requests::UpdateClubSettingsRequest,
};

pub async fn update_settings(
    service: &ClubSettingsService,
    settings_id: i64,
    update_data: UpdateClubSettingsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let errors = check_settings_fields(
        update_data.student_join_period_start,
        update_data.student_join_period_end,
        update_data.max_clubs_per_student,
    );
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors)));
    }

    let storage = service.get_storage(request);

    match storage.update_club_settings(settings_id, update_data).await {
        Ok(Some(settings)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            settings,
            "Club settings updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClubSettingsNotFound,
            "Club settings not found",
        ))),
        Err(e) => {
            error!("Club settings update failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClubSettingsUpdateFailed,
                    format!("Club settings update failed: {e}"),
                )),
            )
        }
    }
}
