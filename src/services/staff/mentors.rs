use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::{ApiResponse, ErrorCode, staff::requests::MentorsByDepartmentParams};

/// 启用且开放院系权限的教职工，按院系过滤
pub async fn mentors_by_department(
    service: &StaffService,
    query: MentorsByDepartmentParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_mentor_candidates(query.department_id).await {
        Ok(staff) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            staff,
            "Mentor candidates retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve mentor candidates: {e}"),
            )),
        ),
    }
}
