pub mod active;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod members;
pub mod toggle;
pub mod update;
mod validate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::clubs::requests::{
    AddClubMemberRequest, ClubListParams, ClubMemberListParams, CreateClubRequest,
    JoinClubRequest, UpdateClubRequest,
};
use crate::storage::Storage;

pub struct ClubService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClubService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取社团列表
    pub async fn list_clubs(
        &self,
        query: ClubListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_clubs(self, query, request).await
    }

    pub async fn list_active_clubs(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        active::list_active_clubs(self, request).await
    }

    pub async fn create_club(
        &self,
        club_data: CreateClubRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_club(self, club_data, request).await
    }

    pub async fn get_club(&self, club_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_club(self, club_id, request).await
    }

    pub async fn update_club(
        &self,
        club_id: i64,
        update_data: UpdateClubRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_club(self, club_id, update_data, request).await
    }

    pub async fn delete_club(
        &self,
        club_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_club(self, club_id, request).await
    }

    pub async fn toggle_status(
        &self,
        club_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_club_status(self, club_id, request).await
    }

    // 成员列表
    pub async fn list_members(
        &self,
        club_id: i64,
        query: ClubMemberListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::list_members(self, club_id, query, request).await
    }

    // 管理员添加成员
    pub async fn add_member(
        &self,
        club_id: i64,
        member_data: AddClubMemberRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::add_member(self, club_id, member_data, request).await
    }

    // 学生自助加入
    pub async fn join_club(
        &self,
        club_id: i64,
        join_data: JoinClubRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::join_club(self, club_id, join_data, request).await
    }

    pub async fn leave_club(
        &self,
        club_id: i64,
        member_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::leave_club(self, club_id, member_id, request).await
    }

    pub async fn toggle_representative(
        &self,
        club_id: i64,
        member_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::toggle_representative(self, club_id, member_id, request).await
    }
}
