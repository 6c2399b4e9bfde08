use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DepartmentService;
use super::validate::check_department_fields;
use crate::models::{ApiResponse, ErrorCode, departments::requests::CreateDepartmentRequest};

pub async fn create_department(
    service: &DepartmentService,
    department_data: CreateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = match check_department_fields(
        &storage,
        Some(&department_data.name),
        Some(&department_data.code),
        None,
    )
    .await
    {
        Ok(errors) => errors,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Department validation failed: {e}"),
                )),
            );
        }
    };
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors)));
    }

    match storage.create_department(department_data).await {
        Ok(department) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(department, "Department created successfully"))),
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::DepartmentAlreadyExists,
                "Department name or code already exists",
            ),
        )),
        Err(e) => {
            error!("Department creation failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DepartmentCreationFailed,
                    format!("Department creation failed: {e}"),
                )),
            )
        }
    }
}
