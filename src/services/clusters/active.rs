use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClusterService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_active_clusters(
    service: &ClusterService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_active_clusters().await {
        Ok(clusters) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            clusters,
            "Active clusters retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve active clusters: {e}"),
            )),
        ),
    }
}
