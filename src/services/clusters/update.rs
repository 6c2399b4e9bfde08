use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClusterService;
use super::validate::check_cluster_fields;
use crate::models::{ApiResponse, ErrorCode, clusters::requests::UpdateClusterRequest};

pub async fn update_cluster(
    service: &ClusterService,
    cluster_id: i64,
    update_data: UpdateClusterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = match check_cluster_fields(
        &storage,
        update_data.cluster_name.as_deref(),
        update_data.cluster_code.as_deref(),
        Some(cluster_id),
    )
    .await
    {
        Ok(errors) => errors,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Cluster validation failed: {e}"),
                )),
            );
        }
    };
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors)));
    }

    match storage.update_cluster(cluster_id, update_data).await {
        Ok(Some(cluster)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(cluster, "Cluster updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClusterNotFound,
            "Cluster not found",
        ))),
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::ClusterAlreadyExists,
                "Cluster name or code already exists",
            ),
        )),
        Err(e) => {
            error!("Cluster update failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClusterUpdateFailed,
                    format!("Cluster update failed: {e}"),
                )),
            )
        }
    }
}
