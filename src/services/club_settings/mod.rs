pub mod create;
pub mod current;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
mod validate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::club_settings::requests::{
    CreateClubSettingsRequest, UpdateClubSettingsRequest,
};
use crate::storage::Storage;

pub struct ClubSettingsService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClubSettingsService {
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

    pub async fn list_settings(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_settings(self, request).await
    }

    // 当前生效的设置
    pub async fn current_settings(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        current::current_settings(self, request).await
    }

    pub async fn create_settings(
        &self,
        settings_data: CreateClubSettingsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_settings(self, settings_data, request).await
    }

    pub async fn get_settings(
        &self,
        settings_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_settings(self, settings_id, request).await
    }

    pub async fn update_settings(
        &self,
        settings_id: i64,
        update_data: UpdateClubSettingsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_settings(self, settings_id, update_data, request).await
    }

    pub async fn delete_settings(
        &self,
        settings_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_settings(self, settings_id, request).await
    }
}
