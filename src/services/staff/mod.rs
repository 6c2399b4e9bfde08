pub mod active;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod mentors;
pub mod toggle;
pub mod update;
mod validate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::staff::requests::{
    CreateStaffRequest, MentorsByDepartmentParams, StaffListParams, UpdateStaffRequest,
};
use crate::storage::Storage;

pub struct StaffService {
    storage: Option<Arc<dyn Storage>>,
}

impl StaffService {
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

    // 获取教职工列表
    pub async fn list_staff(
        &self,
        query: StaffListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_staff(self, query, request).await
    }

    pub async fn list_active_staff(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        active::list_active_staff(self, request).await
    }

    // 可担任导师的教职工
    pub async fn mentors_by_department(
        &self,
        query: MentorsByDepartmentParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mentors::mentors_by_department(self, query, request).await
    }

    // 创建教职工
    pub async fn create_staff(
        &self,
        staff_data: CreateStaffRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_staff(self, staff_data, request).await
    }

    pub async fn get_staff(&self, staff_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_staff(self, staff_id, request).await
    }

    pub async fn update_staff(
        &self,
        staff_id: i64,
        update_data: UpdateStaffRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_staff(self, staff_id, update_data, request).await
    }

    pub async fn delete_staff(
        &self,
        staff_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_staff(self, staff_id, request).await
    }

    pub async fn toggle_status(
        &self,
        staff_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_staff_status(self, staff_id, request).await
    }

    // 切换导师权限
    pub async fn toggle_mentor_access(
        &self,
        staff_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_mentor_access(self, staff_id, request).await
    }
}
