use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

pub async fn toggle_student_status(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.toggle_student_status(student_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            student,
            "Student status updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentUpdateFailed,
                format!("Failed to toggle student status: {e}"),
            )),
        ),
    }
}

/// 开启时截止时间为当前时间加上 `club.change_window_hours`
pub async fn toggle_club_change(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let window_hours = AppConfig::get().club.change_window_hours;

    match storage
        .toggle_student_club_change(student_id, window_hours)
        .await
    {
        Ok(Some(student)) => {
            info!(
                "Club change for student {} set to {}",
                student.student_id, student.can_change_club
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                student,
                "Club change permission updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentUpdateFailed,
                format!("Failed to toggle club change permission: {e}"),
            )),
        ),
    }
}
