use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClusterService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_cluster(
    service: &ClusterService,
    cluster_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_cluster(cluster_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Cluster deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClusterNotFound,
            "Cluster not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClusterDeleteFailed,
                format!("Cluster deletion failed: {e}"),
            )),
        ),
    }
}
