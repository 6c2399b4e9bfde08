pub mod active;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod toggle;
pub mod update;
mod validate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::clusters::requests::{
    ClusterListParams, CreateClusterRequest, UpdateClusterRequest,
};
use crate::storage::Storage;

pub struct ClusterService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClusterService {
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

    // 获取学群列表
    pub async fn list_clusters(
        &self,
        query: ClusterListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_clusters(self, query, request).await
    }

    // 获取全部启用的学群
    pub async fn list_active_clusters(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        active::list_active_clusters(self, request).await
    }

    // 创建学群
    pub async fn create_cluster(
        &self,
        cluster_data: CreateClusterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_cluster(self, cluster_data, request).await
    }

    pub async fn get_cluster(
        &self,
        cluster_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_cluster(self, cluster_id, request).await
    }

    pub async fn update_cluster(
        &self,
        cluster_id: i64,
        update_data: UpdateClusterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_cluster(self, cluster_id, update_data, request).await
    }

    pub async fn delete_cluster(
        &self,
        cluster_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_cluster(self, cluster_id, request).await
    }

    // 切换启用状态
    pub async fn toggle_status(
        &self,
        cluster_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_cluster_status(self, cluster_id, request).await
    }
}
