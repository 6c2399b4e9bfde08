use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::club_settings::requests::{
    CreateClubSettingsRequest, UpdateClubSettingsRequest,
};
use crate::services::ClubSettingsService;
use crate::utils::SafeIDI64;

static CLUB_SETTINGS_SERVICE: Lazy<ClubSettingsService> =
    Lazy::new(ClubSettingsService::new_lazy);

pub async fn list_settings(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLUB_SETTINGS_SERVICE.list_settings(&req).await
}

pub async fn current_settings(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLUB_SETTINGS_SERVICE.current_settings(&req).await
}

pub async fn create_settings(
    req: HttpRequest,
    settings_data: web::Json<CreateClubSettingsRequest>,
) -> ActixResult<HttpResponse> {
    CLUB_SETTINGS_SERVICE
        .create_settings(settings_data.into_inner(), &req)
        .await
}

pub async fn get_settings(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLUB_SETTINGS_SERVICE.get_settings(id.0, &req).await
}

pub async fn update_settings(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateClubSettingsRequest>,
) -> ActixResult<HttpResponse> {
    CLUB_SETTINGS_SERVICE
        .update_settings(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_settings(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLUB_SETTINGS_SERVICE.delete_settings(id.0, &req).await
}

pub fn configure_club_settings_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/club-settings")
            .service(
                web::resource("")
                    .route(web::get().to(list_settings))
                    .route(web::post().to(create_settings)),
            )
            .route("/current", web::get().to(current_settings))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_settings))
                    .route(web::put().to(update_settings))
                    .route(web::patch().to(update_settings))
                    .route(web::delete().to(delete_settings)),
            ),
    );
}
