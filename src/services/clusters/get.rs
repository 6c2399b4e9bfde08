use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClusterService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_cluster(
    service: &ClusterService,
    cluster_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_cluster_by_id(cluster_id).await {
        Ok(Some(cluster)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            cluster,
            "Cluster retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClusterNotFound,
            "Cluster not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve cluster: {e}"),
            )),
        ),
    }
}
