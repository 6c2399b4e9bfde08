use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RateLimit;
use crate::models::students::requests::{
    BulkUploadListParams, CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::utils::SafeIDI64;

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_students(query.into_inner(), &req)
        .await
}

pub async fn list_active_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_active_students(&req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &req)
        .await
}

pub async fn get_student(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(id.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_student(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(id.0, &req).await
}

pub async fn toggle_status(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.toggle_status(id.0, &req).await
}

pub async fn toggle_club_change(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.toggle_club_change(id.0, &req).await
}

pub async fn send_credentials(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.send_credentials(id.0, &req).await
}

pub async fn reset_password(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.reset_password(id.0, &req).await
}

pub async fn download_template() -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.download_template().await
}

pub async fn bulk_upload(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.bulk_upload(payload, &req).await
}

pub async fn list_bulk_uploads(
    req: HttpRequest,
    query: web::Query<BulkUploadListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_bulk_uploads(query.into_inner(), &req)
        .await
}

pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            .route("/active_students", web::get().to(list_active_students))
            .route("/template", web::get().to(download_template))
            .service(
                web::resource("/bulk_upload")
                    .wrap(RateLimit::bulk_upload())
                    .route(web::post().to(bulk_upload)),
            )
            .route("/bulk_uploads", web::get().to(list_bulk_uploads))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::patch().to(update_student))
                    .route(web::delete().to(delete_student)),
            )
            // 发送凭据与重置密码均限流
            .service(
                web::resource("/{id}/send_credentials")
                    .wrap(RateLimit::credentials())
                    .route(web::post().to(send_credentials)),
            )
            .service(
                web::resource("/{id}/reset_password")
                    .wrap(RateLimit::credentials())
                    .route(web::post().to(reset_password)),
            )
            .route("/{id}/toggle_status", web::post().to(toggle_status))
            .route("/{id}/toggle_club_change", web::post().to(toggle_club_change)),
    );
}
