use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StaffService;
use super::validate::{StaffFields, check_staff_fields};
use crate::models::{
    ApiResponse, ErrorCode,
    staff::requests::{CreateStaffRequest, NewStaff},
};
use crate::utils::password::hash_password_blocking;
use crate::utils::random_code::generate_password;

pub async fn create_staff(
    service: &StaffService,
    staff_data: CreateStaffRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = match check_staff_fields(&storage, StaffFields::from(&staff_data), None).await {
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

    // 教职工账号使用随机初始密码
    let password_hash = match hash_password_blocking(generate_password()).await {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let new_staff = NewStaff {
        request: staff_data,
        password_hash,
    };

    match storage.create_staff(new_staff).await {
        Ok(staff) => {
            info!("Created staff {} ({})", staff.staff_id, staff.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(staff, "Staff created successfully")))
        }
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::StaffAlreadyExists,
                "Staff ID or email already exists",
            ),
        )),
        Err(e) => {
            error!("Staff creation failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StaffCreationFailed,
                    format!("Staff creation failed: {e}"),
                )),
            )
        }
    }
}
