use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClusterService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn toggle_cluster_status(
    service: &ClusterService,
    cluster_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.toggle_cluster_status(cluster_id).await {
        Ok(Some(cluster)) => {
            info!(
                "Cluster {} is now {}",
                cluster.cluster_code,
                if cluster.is_active { "active" } else { "inactive" }
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                cluster,
                "Cluster status updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClusterNotFound,
            "Cluster not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClusterUpdateFailed,
                format!("Failed to toggle cluster status: {e}"),
            )),
        ),
    }
}
