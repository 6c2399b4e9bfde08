use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::config::AppConfig;
use crate::mail::CredentialEmail;
use crate::models::{ApiResponse, ErrorCode, students::responses::PasswordResetResponse};
use crate::utils::password::hash_password_blocking;
use crate::utils::random_code::generate_password;

/// 重新发送当前密码，失败时返回 500
pub async fn send_credentials(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve student: {e}"),
                )),
            );
        }
    };

    let email = CredentialEmail::for_student(&student, &AppConfig::get().email.school_name);
    if let Err(e) = service.get_mailer(request).send(&email).await {
        error!("Failed to send credentials to {}: {e}", student.email);
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::CredentialsSendFailed,
                format!("Failed to send email: {e}"),
            )),
        );
    }

    if let Err(e) = storage.mark_credentials_sent(student.id).await {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentUpdateFailed,
                format!("Credentials sent but status update failed: {e}"),
            )),
        );
    }

    info!("Credentials sent to student {}", student.student_id);
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Credentials sent successfully")))
}

/// 生成新密码，同时更新学生明文副本与账号哈希，不发送邮件
pub async fn reset_password(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let new_password = generate_password();
    let password_hash = match hash_password_blocking(new_password.clone()).await {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::PasswordResetFailed,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    match storage
        .reset_student_password(student_id, &new_password, &password_hash)
        .await
    {
        Ok(Some(student)) => {
            info!("Password reset for student {}", student.student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                PasswordResetResponse {
                    message: "Password reset successfully".to_string(),
                    new_password,
                },
                "Password reset successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::PasswordResetFailed,
                format!("Password reset failed: {e}"),
            )),
        ),
    }
}
