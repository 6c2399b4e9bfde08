use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::clusters::requests::{
    ClusterListParams, CreateClusterRequest, UpdateClusterRequest,
};
use crate::services::ClusterService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CLUSTER_SERVICE 实例
static CLUSTER_SERVICE: Lazy<ClusterService> = Lazy::new(ClusterService::new_lazy);

// HTTP处理程序
pub async fn list_clusters(
    req: HttpRequest,
    query: web::Query<ClusterListParams>,
) -> ActixResult<HttpResponse> {
    CLUSTER_SERVICE
        .list_clusters(query.into_inner(), &req)
        .await
}

pub async fn list_active_clusters(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLUSTER_SERVICE.list_active_clusters(&req).await
}

pub async fn create_cluster(
    req: HttpRequest,
    cluster_data: web::Json<CreateClusterRequest>,
) -> ActixResult<HttpResponse> {
    CLUSTER_SERVICE
        .create_cluster(cluster_data.into_inner(), &req)
        .await
}

pub async fn get_cluster(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLUSTER_SERVICE.get_cluster(id.0, &req).await
}

pub async fn update_cluster(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateClusterRequest>,
) -> ActixResult<HttpResponse> {
    CLUSTER_SERVICE
        .update_cluster(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_cluster(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLUSTER_SERVICE.delete_cluster(id.0, &req).await
}

pub async fn toggle_status(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLUSTER_SERVICE.toggle_status(id.0, &req).await
}

// 配置路由
pub fn configure_clusters_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/clusters")
            .service(
                web::resource("")
                    .route(web::get().to(list_clusters))
                    .route(web::post().to(create_cluster)),
            )
            // 静态路径需在 /{id} 之前注册
            .route("/active_clusters", web::get().to(list_active_clusters))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_cluster))
                    .route(web::put().to(update_cluster))
                    .route(web::patch().to(update_cluster))
                    .route(web::delete().to(delete_cluster)),
            )
            .route("/{id}/toggle_status", web::post().to(toggle_status)),
    );
}
