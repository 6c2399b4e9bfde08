use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::staff::requests::{
    CreateStaffRequest, MentorsByDepartmentParams, StaffListParams, UpdateStaffRequest,
};
use crate::services::StaffService;
use crate::utils::SafeIDI64;

static STAFF_SERVICE: Lazy<StaffService> = Lazy::new(StaffService::new_lazy);

pub async fn list_staff(
    req: HttpRequest,
    query: web::Query<StaffListParams>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.list_staff(query.into_inner(), &req).await
}

pub async fn list_active_staff(req: HttpRequest) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.list_active_staff(&req).await
}

pub async fn mentors_by_department(
    req: HttpRequest,
    query: web::Query<MentorsByDepartmentParams>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE
        .mentors_by_department(query.into_inner(), &req)
        .await
}

pub async fn create_staff(
    req: HttpRequest,
    staff_data: web::Json<CreateStaffRequest>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE
        .create_staff(staff_data.into_inner(), &req)
        .await
}

pub async fn get_staff(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.get_staff(id.0, &req).await
}

pub async fn update_staff(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateStaffRequest>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE
        .update_staff(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_staff(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.delete_staff(id.0, &req).await
}

pub async fn toggle_status(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.toggle_status(id.0, &req).await
}

pub async fn toggle_mentor_access(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.toggle_mentor_access(id.0, &req).await
}

pub fn configure_staff_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/staff")
            .service(
                web::resource("")
                    .route(web::get().to(list_staff))
                    .route(web::post().to(create_staff)),
            )
            .route("/active_staff", web::get().to(list_active_staff))
            .route("/mentors_by_department", web::get().to(mentors_by_department))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_staff))
                    .route(web::put().to(update_staff))
                    .route(web::patch().to(update_staff))
                    .route(web::delete().to(delete_staff)),
            )
            .route("/{id}/toggle_status", web::post().to(toggle_status))
            .route(
                "/{id}/toggle_mentor_access",
                web::post().to(toggle_mentor_access),
            ),
    );
}
