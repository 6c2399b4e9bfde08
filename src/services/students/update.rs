use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use super::validate::{StudentFields, check_student_fields};
use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::{StudentUpdate, UpdateStudentRequest},
};
use crate::utils::password::hash_password_blocking;

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    mut update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = match check_student_fields(
        &storage,
        StudentFields::from(&update_data),
        Some(student_id),
    )
    .await
    {
        Ok(errors) => errors,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student validation failed: {e}"),
                )),
            );
        }
    };
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors)));
    }

    // 空密码视为不修改
    update_data.password = update_data.password.filter(|p| !p.is_empty());
    let password_hash = match update_data.password.clone() {
        Some(password) => match hash_password_blocking(password).await {
            Ok(hash) => Some(hash),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Password hashing failed: {e}"),
                    )),
                );
            }
        },
        None => None,
    };

    let update = StudentUpdate {
        request: update_data,
        password_hash,
    };

    match storage.update_student(student_id, update).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(student, "Student updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::StudentAlreadyExists,
                "Student email or roll number already exists",
            ),
        )),
        Err(e) => {
            error!("Student update failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentUpdateFailed,
                    format!("Student update failed: {e}"),
                )),
            )
        }
    }
}
