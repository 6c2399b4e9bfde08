use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::StudentService;
use super::registration::register_student;
use super::validate::{StudentFields, check_student_fields};
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::mail::CredentialEmail;
use crate::models::{
    ApiResponse, ErrorCode, FieldErrors,
    students::{entities::Student, requests::CreateStudentRequest},
};
use crate::utils::validate::invalid_pk_message;

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors =
        match check_student_fields(&storage, StudentFields::from(&student_data), None).await {
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

    let cluster = match storage.get_cluster_by_id(student_data.cluster).await {
        Ok(Some(cluster)) => cluster,
        Ok(None) => {
            let mut errors = FieldErrors::new();
            errors.add("cluster", invalid_pk_message(student_data.cluster));
            return Ok(HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors)));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve cluster: {e}"),
                )),
            );
        }
    };

    match register_student(&storage, student_data, &cluster).await {
        Ok(student) => {
            info!("Created student {} ({})", student.student_id, student.name);
            let student = deliver_initial_credentials(service, request, student).await;
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student created successfully")))
        }
        Err(e) => Ok(registration_failure(e)),
    }
}

/// 学号耗尽等冲突保留原始消息，数据库唯一约束冲突使用统一消息
fn registration_failure(err: AppError) -> HttpResponse {
    match err {
        AppError::Conflict(msg) => HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::StudentAlreadyExists, msg)),
        e if e.is_unique_violation() => HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentAlreadyExists,
            "Student email, roll number or username already exists",
        )),
        e => {
            error!("Student creation failed: {e}");
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentCreationFailed,
                format!("Student creation failed: {e}"),
            ))
        }
    }
}

/// 创建后立即发送凭据；发送失败只记录日志，不影响创建结果
async fn deliver_initial_credentials(
    service: &StudentService,
    request: &HttpRequest,
    mut student: Student,
) -> Student {
    let mailer = service.get_mailer(request);
    let email = CredentialEmail::for_student(&student, &AppConfig::get().email.school_name);

    if let Err(e) = mailer.send(&email).await {
        warn!(
            "Failed to send credentials email to {}: {e}",
            student.email
        );
        return student;
    }

    match service
        .get_storage(request)
        .mark_credentials_sent(student.id)
        .await
    {
        Ok(_) => student.credentials_sent = true,
        Err(e) => warn!(
            "Credentials sent to {} but flag update failed: {e}",
            student.email
        ),
    }
    student
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_conflict_message_is_kept() {
        let err = AppError::conflict("No free student ID left for cluster SCI");
        let resp = registration_failure(err);
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "No free student ID left for cluster SCI");
    }

    #[actix_web::test]
    async fn test_unique_violation_uses_generic_message() {
        let err = AppError::database_operation("UNIQUE constraint failed: students.email");
        let resp = registration_failure(err);
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body["message"],
            "Student email, roll number or username already exists"
        );
    }

    #[actix_web::test]
    async fn test_other_failures_are_internal() {
        let resp = registration_failure(AppError::password_hash("boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
