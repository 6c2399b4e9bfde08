use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StaffService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn toggle_staff_status(
    service: &StaffService,
    staff_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.toggle_staff_status(staff_id).await {
        Ok(Some(staff)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            staff,
            "Staff status updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StaffNotFound,
            "Staff not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StaffUpdateFailed,
                format!("Failed to toggle staff status: {e}"),
            )),
        ),
    }
}

/// 关闭导师权限时存储层会同时清空导师学群
pub async fn toggle_mentor_access(
    service: &StaffService,
    staff_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.toggle_staff_mentor_access(staff_id).await {
        Ok(Some(staff)) => {
            info!(
                "Mentor access for staff {} set to {}",
                staff.staff_id, staff.mentor_access_enabled
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                staff,
                "Mentor access updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StaffNotFound,
            "Staff not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StaffUpdateFailed,
                format!("Failed to toggle mentor access: {e}"),
            )),
        ),
    }
}
