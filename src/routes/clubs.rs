use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::clubs::requests::{
    AddClubMemberRequest, ClubListParams, ClubMemberListParams, CreateClubRequest,
    JoinClubRequest, UpdateClubRequest,
};
use crate::services::ClubService;
use crate::utils::{SafeIDI64, SafeMemberIdI64};

static CLUB_SERVICE: Lazy<ClubService> = Lazy::new(ClubService::new_lazy);

pub async fn list_clubs(
    req: HttpRequest,
    query: web::Query<ClubListParams>,
) -> ActixResult<HttpResponse> {
    CLUB_SERVICE.list_clubs(query.into_inner(), &req).await
}

pub async fn list_active_clubs(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLUB_SERVICE.list_active_clubs(&req).await
}

pub async fn create_club(
    req: HttpRequest,
    club_data: web::Json<CreateClubRequest>,
) -> ActixResult<HttpResponse> {
    CLUB_SERVICE.create_club(club_data.into_inner(), &req).await
}

pub async fn get_club(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLUB_SERVICE.get_club(id.0, &req).await
}

pub async fn update_club(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateClubRequest>,
) -> ActixResult<HttpResponse> {
    CLUB_SERVICE
        .update_club(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_club(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLUB_SERVICE.delete_club(id.0, &req).await
}

pub async fn toggle_status(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLUB_SERVICE.toggle_status(id.0, &req).await
}

// 成员管理
pub async fn list_members(
    req: HttpRequest,
    id: SafeIDI64,
    query: web::Query<ClubMemberListParams>,
) -> ActixResult<HttpResponse> {
    CLUB_SERVICE
        .list_members(id.0, query.into_inner(), &req)
        .await
}

pub async fn add_member(
    req: HttpRequest,
    id: SafeIDI64,
    member_data: web::Json<AddClubMemberRequest>,
) -> ActixResult<HttpResponse> {
    CLUB_SERVICE
        .add_member(id.0, member_data.into_inner(), &req)
        .await
}

pub async fn join_club(
    req: HttpRequest,
    id: SafeIDI64,
    join_data: web::Json<JoinClubRequest>,
) -> ActixResult<HttpResponse> {
    CLUB_SERVICE
        .join_club(id.0, join_data.into_inner(), &req)
        .await
}

pub async fn leave_club(
    req: HttpRequest,
    id: SafeIDI64,
    member_id: SafeMemberIdI64,
) -> ActixResult<HttpResponse> {
    CLUB_SERVICE.leave_club(id.0, member_id.0, &req).await
}

pub async fn toggle_representative(
    req: HttpRequest,
    id: SafeIDI64,
    member_id: SafeMemberIdI64,
) -> ActixResult<HttpResponse> {
    CLUB_SERVICE
        .toggle_representative(id.0, member_id.0, &req)
        .await
}

pub fn configure_clubs_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/clubs")
            .service(
                web::resource("")
                    .route(web::get().to(list_clubs))
                    .route(web::post().to(create_club)),
            )
            .route("/active_clubs", web::get().to(list_active_clubs))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_club))
                    .route(web::put().to(update_club))
                    .route(web::patch().to(update_club))
                    .route(web::delete().to(delete_club)),
            )
            .route("/{id}/toggle_status", web::post().to(toggle_status))
            .service(
                web::resource("/{id}/members")
                    .route(web::get().to(list_members))
                    .route(web::post().to(add_member)),
            )
            .route("/{id}/join", web::post().to(join_club))
            .route(
                "/{id}/members/{member_id}/leave",
                web::post().to(leave_club),
            )
            .route(
                "/{id}/members/{member_id}/toggle_representative",
                web::post().to(toggle_representative),
            ),
    );
}
