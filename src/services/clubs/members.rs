//! 社团成员管理

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use super::ClubService;
use crate::models::{
    ApiResponse, ErrorCode,
    clubs::requests::{AddClubMemberRequest, ClubMemberListParams, JoinClubRequest},
};
use crate::storage::Storage;

fn internal_error(message: impl Into<String>) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        message,
    ))
}

fn club_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::ClubNotFound,
        "Club not found",
    ))
}

fn member_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::ClubMemberNotFound,
        "Club member not found",
    ))
}

pub async fn list_members(
    service: &ClubService,
    club_id: i64,
    query: ClubMemberListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_club_by_id(club_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(club_not_found()),
        Err(e) => return Ok(internal_error(format!("Failed to retrieve club: {e}"))),
    }

    match storage.list_club_members(club_id, query.is_active).await {
        Ok(members) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            members,
            "Club members retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!(
            "Failed to retrieve club members: {e}"
        ))),
    }
}

/// 加入前检查：社团启用且未满，学生在籍且尚未加入
async fn check_admission(
    storage: &Arc<dyn Storage>,
    club_id: i64,
    student_id: i64,
) -> Result<(), HttpResponse> {
    let club = match storage.get_club_by_id(club_id).await {
        Ok(Some(club)) => club,
        Ok(None) => return Err(club_not_found()),
        Err(e) => return Err(internal_error(format!("Failed to retrieve club: {e}"))),
    };
    if !club.is_active {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ClubInactive,
            "Club is not active",
        )));
    }

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => return Err(internal_error(format!("Failed to retrieve student: {e}"))),
    };
    if !student.is_active {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::StudentInactive,
            "Student is not active",
        )));
    }

    match storage.get_club_membership(club_id, student_id).await {
        Ok(Some(member)) if member.is_active => {
            return Err(already_member());
        }
        Ok(_) => {}
        Err(e) => return Err(internal_error(format!("Failed to retrieve membership: {e}"))),
    }

    if club.is_full() {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ClubFull,
            format!("Club has reached its limit of {} members", club.max_members),
        )));
    }

    Ok(())
}

fn already_member() -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(
        ErrorCode::ClubMemberAlreadyExists,
        "Student is already a member of this club",
    ))
}

async fn insert_member(
    storage: &Arc<dyn Storage>,
    club_id: i64,
    student_id: i64,
    is_representative: bool,
) -> HttpResponse {
    match storage
        .add_club_member(club_id, student_id, is_representative)
        .await
    {
        Ok(member) => {
            info!("Student {} joined club {}", student_id, club_id);
            HttpResponse::Created().json(ApiResponse::success(member, "Member added successfully"))
        }
        Err(e) if e.is_unique_violation() => already_member(),
        Err(e) => {
            error!("Adding student {student_id} to club {club_id} failed: {e}");
            internal_error(format!("Failed to add member: {e}"))
        }
    }
}

pub async fn add_member(
    service: &ClubService,
    club_id: i64,
    member_data: AddClubMemberRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_admission(&storage, club_id, member_data.student).await {
        return Ok(response);
    }

    Ok(insert_member(
        &storage,
        club_id,
        member_data.student,
        member_data.is_representative.unwrap_or(false),
    )
    .await)
}

/// 自助加入还要求处于开放期且未超过每人社团数上限
pub async fn join_club(
    service: &ClubService,
    club_id: i64,
    join_data: JoinClubRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let settings = match storage.get_current_club_settings().await {
        Ok(settings) => settings,
        Err(e) => return Ok(internal_error(format!("Failed to retrieve club settings: {e}"))),
    };
    let Some(settings) = settings.filter(|s| s.is_joining_period_active()) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ClubJoiningClosed,
            "Club joining period is not active",
        )));
    };

    if let Err(response) = check_admission(&storage, club_id, join_data.student).await {
        return Ok(response);
    }

    match storage
        .count_active_student_memberships(join_data.student)
        .await
    {
        Ok(count) if count >= settings.max_clubs_per_student.max(0) as u64 => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ClubLimitReached,
                format!(
                    "Students may join at most {} club(s)",
                    settings.max_clubs_per_student
                ),
            )));
        }
        Ok(_) => {}
        Err(e) => return Ok(internal_error(format!("Failed to count memberships: {e}"))),
    }

    Ok(insert_member(&storage, club_id, join_data.student, false).await)
}

pub async fn leave_club(
    service: &ClubService,
    club_id: i64,
    member_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.leave_club_member(club_id, member_id).await {
        Ok(Some(member)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            member,
            "Member left the club",
        ))),
        Ok(None) => Ok(member_not_found()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClubUpdateFailed,
                format!("Failed to update membership: {e}"),
            )),
        ),
    }
}

pub async fn toggle_representative(
    service: &ClubService,
    club_id: i64,
    member_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.toggle_club_representative(club_id, member_id).await {
        Ok(Some(member)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            member,
            "Representative status updated successfully",
        ))),
        Ok(None) => Ok(member_not_found()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClubUpdateFailed,
                format!("Failed to toggle representative status: {e}"),
            )),
        ),
    }
}
