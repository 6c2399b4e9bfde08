use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StaffService;
use super::validate::{StaffFields, check_staff_fields};
use crate::models::{ApiResponse, ErrorCode, staff::requests::UpdateStaffRequest};

pub async fn update_staff(
    service: &StaffService,
    staff_id: i64,
    update_data: UpdateStaffRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = match check_staff_fields(
        &storage,
        StaffFields::from(&update_data),
        Some(staff_id),
    )
    .await
    {
        Ok(errors) => errors,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Staff validation failed: {e}"),
                )),
            );
        }
    };
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors)));
    }

    match storage.update_staff(staff_id, update_data).await {
        Ok(Some(staff)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(staff, "Staff updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StaffNotFound,
            "Staff not found",
        ))),
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::StaffAlreadyExists,
                "Staff ID or email already exists",
            ),
        )),
        Err(e) => {
            error!("Staff update failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StaffUpdateFailed,
                    format!("Staff update failed: {e}"),
                )),
            )
        }
    }
}
