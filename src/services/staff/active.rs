use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_active_staff(
    service: &StaffService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_active_staff().await {
        Ok(staff) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            staff,
            "Active staff retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve active staff: {e}"),
            )),
        ),
    }
}
